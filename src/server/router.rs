use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        calculator::{self, CALCULATOR_TAG},
        pet::{self, ADMIN_PET_TAG, PET_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "valueboard", description = "Pet value catalog and calculators"),
    tags(
        (name = PET_TAG, description = "Pet catalog lookups"),
        (name = ADMIN_PET_TAG, description = "Pet catalog management"),
        (name = CALCULATOR_TAG, description = "Weight and value calculators")
    )
)]
struct ApiDoc;

/// Builds the public API router with Swagger UI at `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(pet::get_pets))
        .routes(routes!(pet::resolve_pet))
        .routes(routes!(pet::get_admin_pets, pet::create_pet))
        .routes(routes!(pet::update_pet, pet::delete_pet))
        .routes(routes!(calculator::calculate_weights))
        .routes(routes!(calculator::calculate_values))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
