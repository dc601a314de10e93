//! REST API layer: route handlers, OpenAPI document, and router composition.
//!
//! Todo endpoints live under `/api/todoitem`; the OpenAPI document is
//! served at [`openapi::OPENAPI_JSON_PATH`] and, with the `swagger-ui`
//! feature, browsable at [`openapi::SWAGGER_UI_PATH`].

pub mod handlers;
pub mod openapi;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST and documentation
/// endpoints.
pub fn build_router() -> Router<AppState> {
    let router = handlers::routes();

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        router.merge(
            SwaggerUi::new(openapi::SWAGGER_UI_PATH)
                .url(openapi::OPENAPI_JSON_PATH, openapi::ApiDoc::openapi()),
        )
    };

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(
        openapi::OPENAPI_JSON_PATH,
        axum::routing::get(openapi::openapi_json),
    );

    router
}
