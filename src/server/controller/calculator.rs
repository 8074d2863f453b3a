use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        calculator::{ValueRequestDto, ValueResponseDto, WeightRequestDto, WeightResponseDto},
    },
    server::{
        error::AppError,
        model::valuation::ValuationParams,
        service::{valuation::predict_value, weight::predict_all},
    },
};

pub static CALCULATOR_TAG: &str = "calculator";

/// POST /api/calculate - Predict weights for ages 1 to 100.
#[utoipa::path(
    post,
    path = "/api/calculate",
    tag = CALCULATOR_TAG,
    request_body = WeightRequestDto,
    responses(
        (status = 200, description = "Predicted weight for every age", body = WeightResponseDto),
        (status = 400, description = "Age or weight out of range", body = ErrorDto)
    ),
)]
pub async fn calculate_weights(
    Json(payload): Json<WeightRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let table = predict_all(payload.age, payload.weight)?;

    Ok((StatusCode::OK, Json(table.into_dto())))
}

/// POST /api/calculate-values - Predict a pet's future value.
#[utoipa::path(
    post,
    path = "/api/calculate-values",
    tag = CALCULATOR_TAG,
    request_body = ValueRequestDto,
    responses(
        (status = 200, description = "Value prediction", body = ValueResponseDto),
        (status = 400, description = "Value or time horizon out of range", body = ErrorDto)
    ),
)]
pub async fn calculate_values(
    Json(payload): Json<ValueRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let valuation = predict_value(ValuationParams::from(payload))?;

    Ok((StatusCode::OK, Json(valuation.into_dto())))
}
