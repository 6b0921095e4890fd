//! Run with: cargo run --package server --bin generate-types --features typescript

use std::fs;
use std::path::Path;

fn main() {
    println!("Generating TypeScript types...");

    let out_dir = Path::new("frontend/src/types/generated");

    if let Err(e) = fs::create_dir_all(out_dir) {
        eprintln!("Failed to create output directory: {}", e);
        std::process::exit(1);
    }

    #[cfg(feature = "typescript")]
    {
        use ts_rs::TS;

        promptcraft_core::RefinementRequest::export_all_to(out_dir)
            .expect("Failed to export RefinementRequest");
        promptcraft_core::RefinementResult::export_all_to(out_dir)
            .expect("Failed to export RefinementResult");
        promptcraft_core::SuggestionRequest::export_all_to(out_dir)
            .expect("Failed to export SuggestionRequest");
        promptcraft_core::ParameterSuggestion::export_all_to(out_dir)
            .expect("Failed to export ParameterSuggestion");

        orchestrator::Notification::export_all_to(out_dir)
            .expect("Failed to export Notification");
        orchestrator::NotificationLevel::export_all_to(out_dir)
            .expect("Failed to export NotificationLevel");
        orchestrator::WorkspaceState::export_all_to(out_dir)
            .expect("Failed to export WorkspaceState");

        server::routes::RefineRequestBody::export_all_to(out_dir)
            .expect("Failed to export RefineRequestBody");
        server::routes::RefineResponse::export_all_to(out_dir)
            .expect("Failed to export RefineResponse");
        server::routes::SuggestRequestBody::export_all_to(out_dir)
            .expect("Failed to export SuggestRequestBody");
        server::routes::ClientConfigResponse::export_all_to(out_dir)
            .expect("Failed to export ClientConfigResponse");
        server::error::ErrorResponse::export_all_to(out_dir)
            .expect("Failed to export ErrorResponse");

        println!("Types exported to {}", out_dir.display());

        generate_index(out_dir);
    }

    #[cfg(not(feature = "typescript"))]
    {
        eprintln!("Error: typescript feature is not enabled");
        eprintln!("Run with: cargo run --package server --bin generate-types --features typescript");
        std::process::exit(1);
    }
}

#[cfg(feature = "typescript")]
fn generate_index(out_dir: &Path) {
    use std::io::Write;

    let index_path = out_dir.join("index.ts");
    let mut file = fs::File::create(&index_path).expect("Failed to create index.ts");

    let exports = r#"// Auto-generated - regenerate with: cargo run --package server --bin generate-types --features typescript

export * from './RefinementRequest';
export * from './RefinementResult';
export * from './SuggestionRequest';
export * from './ParameterSuggestion';

export * from './Notification';
export * from './NotificationLevel';
export * from './WorkspaceState';

export * from './RefineRequestBody';
export * from './RefineResponse';
export * from './SuggestRequestBody';
export * from './ClientConfigResponse';
export * from './ErrorResponse';
"#;

    file.write_all(exports.as_bytes())
        .expect("Failed to write index.ts");

    println!("Generated {}", index_path.display());
}
