pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Promptcraft API",
        version = "0.1.0",
        description = "Turns short prompt ideas into detailed, model-ready prompts"
    ),
    paths(
        routes::health_check,
        routes::get_client_config,
        routes::refine_prompt,
        routes::suggest_parameters,
    ),
    components(schemas(
        routes::HealthResponse,
        routes::ClientConfigResponse,
        routes::RefineRequestBody,
        routes::RefineResponse,
        routes::SuggestRequestBody,
        error::ErrorResponse,
        promptcraft_core::ParameterSuggestion,
        promptcraft_core::ValidationErrors,
        orchestrator::Notification,
        orchestrator::NotificationLevel,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "config", description = "Client configuration"),
        (name = "refine", description = "Prompt refinement and parameter suggestions"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let app_dir = state.app_dir.clone();

    let api_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health_check))
        .route("/api/config", get(routes::get_client_config))
        .route("/api/refine", post(routes::refine_prompt))
        .route(
            "/api/suggest-parameters",
            post(routes::suggest_parameters),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    if let Some(app_dir) = app_dir {
        let index_file = app_dir.join("index.html");
        let serve_dir = ServeDir::new(&app_dir).not_found_service(ServeFile::new(&index_file));
        api_router.fallback_service(serve_dir)
    } else {
        api_router
    }
}
