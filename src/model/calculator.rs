use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WeightRequestDto {
    pub age: i64,
    pub weight: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WeightResponseDto {
    pub current_age: i64,
    pub current_weight: f64,
    /// Predicted weight keyed by age, for every age from 1 to 100.
    pub predictions: BTreeMap<u32, f64>,
}

fn default_demand() -> String {
    "Medium".to_string()
}

fn default_trend() -> String {
    "Stable".to_string()
}

fn default_tier() -> String {
    "Common".to_string()
}

fn default_time_horizon() -> i64 {
    30
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ValueRequestDto {
    #[serde(default)]
    pub pet_name: String,
    pub current_value: f64,
    #[serde(default = "default_demand")]
    pub demand: String,
    #[serde(default = "default_trend")]
    pub trend: String,
    #[serde(default = "default_tier")]
    pub tier: String,
    /// Days ahead, 1 to 365
    #[serde(default = "default_time_horizon")]
    pub time_horizon: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ValueResponseDto {
    pub pet_name: String,
    pub current_value: f64,
    pub predicted_value: i64,
    pub time_horizon: i64,
    pub demand: String,
    pub trend: String,
    pub tier: String,
    /// One of `positive`, `negative` or `neutral`.
    pub prediction_trend: String,
    pub investment_rating: String,
    pub analysis: String,
    pub change_percentage: f64,
}
