mod config;
mod health;
mod refine;
mod suggest;

pub use config::*;
pub use health::*;
pub use refine::*;
pub use suggest::*;
