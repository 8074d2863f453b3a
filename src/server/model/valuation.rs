//! Value predictor inputs and outputs.

use std::fmt;

use crate::model::calculator::{ValueRequestDto, ValueResponseDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ValuationParams {
    pub pet_name: String,
    pub current_value: f64,
    pub demand: String,
    pub trend: String,
    pub tier: String,
    /// Days ahead
    pub time_horizon: i64,
}

impl From<ValueRequestDto> for ValuationParams {
    fn from(dto: ValueRequestDto) -> Self {
        Self {
            pet_name: dto.pet_name,
            current_value: dto.current_value,
            demand: dto.demand,
            trend: dto.trend,
            tier: dto.tier,
            time_horizon: dto.time_horizon,
        }
    }
}

/// Direction of the predicted value relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionTrend {
    Positive,
    Negative,
    Neutral,
}

impl PredictionTrend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl fmt::Display for InvestmentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "⭐⭐⭐ Excellent",
            Self::Good => "⭐⭐ Good",
            Self::Fair => "⭐ Fair",
            Self::Poor => "❌ Poor",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub params: ValuationParams,
    pub predicted_value: i64,
    /// Product of the demand, trend, tier and time multipliers.
    pub total_multiplier: f64,
    pub prediction_trend: PredictionTrend,
    pub investment_rating: InvestmentRating,
    pub analysis: String,
    /// Rounded to one decimal.
    pub change_percentage: f64,
}

impl Valuation {
    pub fn into_dto(self) -> ValueResponseDto {
        ValueResponseDto {
            pet_name: self.params.pet_name,
            current_value: self.params.current_value,
            predicted_value: self.predicted_value,
            time_horizon: self.params.time_horizon,
            demand: self.params.demand,
            trend: self.params.trend,
            tier: self.params.tier,
            prediction_trend: self.prediction_trend.as_str().to_string(),
            investment_rating: self.investment_rating.to_string(),
            analysis: self.analysis,
            change_percentage: self.change_percentage,
        }
    }
}
