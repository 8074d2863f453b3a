use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        pet::{
            CreatePetDto, PetCatalogDto, PetDto, PetEntryDto, ResolutionDto, ResolveQueryDto,
            UpdatePetDto,
        },
    },
    server::{
        error::AppError,
        model::pet::{CreatePetParams, UpdatePetParams},
        state::AppState,
    },
};

pub static PET_TAG: &str = "pet";

/// Tag for grouping admin catalog endpoints in OpenAPI documentation
pub static ADMIN_PET_TAG: &str = "admin-pet";

/// GET /api/pets - List every pet in catalog order.
#[utoipa::path(
    get,
    path = "/api/pets",
    tag = PET_TAG,
    responses(
        (status = 200, description = "All pets in catalog order", body = Vec<PetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pets: Vec<PetDto> = state
        .catalog
        .read()
        .await
        .records()
        .cloned()
        .map(|record| record.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(pets)))
}

/// GET /api/pets/resolve?q= - Resolve a possibly misspelled pet name.
///
/// # Returns
/// - `200 OK`: Exact, ambiguous or not-found outcome
/// - `400 Bad Request`: Empty query
#[utoipa::path(
    get,
    path = "/api/pets/resolve",
    tag = PET_TAG,
    params(ResolveQueryDto),
    responses(
        (status = 200, description = "Resolution outcome", body = ResolutionDto),
        (status = 400, description = "Empty query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_pet(
    State(state): State<AppState>,
    Query(query): Query<ResolveQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let (resolution, examples) = state.catalog.resolve(&query.q).await?;

    Ok((StatusCode::OK, Json(resolution.into_dto(examples))))
}

/// GET /api/admin/pets - List every pet with its catalog key.
#[utoipa::path(
    get,
    path = "/api/admin/pets",
    tag = ADMIN_PET_TAG,
    responses(
        (status = 200, description = "All pets keyed by normalized name", body = PetCatalogDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_pets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let pets: Vec<PetEntryDto> = state
        .catalog
        .read()
        .await
        .records()
        .cloned()
        .map(|record| record.into_entry_dto())
        .collect();
    let count = pets.len();

    Ok((StatusCode::OK, Json(PetCatalogDto { pets, count })))
}

/// Add a pet to the catalog.
///
/// Missing value and demand fall back to `0` and `Medium`. The change is announced
/// in the pet update channel when one is configured.
///
/// # Returns
/// - `201 Created` - The stored pet with its key
/// - `400 Bad Request` - Blank name or a pet with the same key already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/pets",
    tag = ADMIN_PET_TAG,
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "Pet added", body = PetEntryDto),
        (status = 400, description = "Invalid or duplicate pet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    Json(payload): Json<CreatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePetParams::from_dto(payload);

    let change = state.catalog.create(params).await?;
    let entry = change.record().clone().into_entry_dto();
    state.notifier.notify(change);

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update fields of an existing pet.
///
/// Omitted fields are kept. A blank demand or image clears it.
///
/// # Returns
/// - `200 OK` - The updated pet
/// - `400 Bad Request` - Blank value
/// - `404 Not Found` - No pet with this key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/pets/{key}",
    tag = ADMIN_PET_TAG,
    params(
        ("key" = String, Path, description = "Pet name or normalized key")
    ),
    request_body = UpdatePetDto,
    responses(
        (status = 200, description = "Pet updated", body = PetEntryDto),
        (status = 400, description = "Invalid pet data", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<UpdatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdatePetParams::from_dto(payload);

    let change = state.catalog.update(&key, params).await?;
    let entry = change.record().clone().into_entry_dto();
    state.notifier.notify(change);

    Ok((StatusCode::OK, Json(entry)))
}

/// Remove a pet from the catalog.
///
/// # Returns
/// - `204 No Content` - Pet removed
/// - `404 Not Found` - No pet with this key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/pets/{key}",
    tag = ADMIN_PET_TAG,
    params(
        ("key" = String, Path, description = "Pet name or normalized key")
    ),
    responses(
        (status = 204, description = "Pet removed"),
        (status = 404, description = "Pet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let change = state.catalog.delete(&key).await?;
    state.notifier.notify(change);

    Ok(StatusCode::NO_CONTENT)
}
