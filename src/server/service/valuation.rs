//! Pet value predictor.
//!
//! Combines demand, trend and tier multipliers with a monthly compounding trend
//! effect over the requested horizon. Unknown labels count as 1.0.

use crate::server::{
    error::calculator::ValuationError,
    model::valuation::{InvestmentRating, PredictionTrend, Valuation, ValuationParams},
};

const DEMAND_MULTIPLIERS: &[(&str, f64)] = &[
    ("terrible", 0.7),
    ("low", 0.85),
    ("medium", 1.0),
    ("high", 1.3),
    ("extremely high", 1.6),
];

const TREND_MULTIPLIERS: &[(&str, f64)] = &[("dropping", 0.8), ("stable", 1.0), ("rising", 1.2)];

const TIER_MULTIPLIERS: &[(&str, f64)] = &[
    ("common", 0.9),
    ("uncommon", 1.0),
    ("rare", 1.1),
    ("epic", 1.25),
    ("legendary", 1.5),
    ("divine", 1.8),
];

pub const MAX_HORIZON_DAYS: i64 = 365;
/// Largest accepted current value. Predictions stay exact integers below 2^53.
pub const MAX_CURRENT_VALUE: f64 = 1e15;
/// Share of the trend effect applied per 30 days.
const MONTHLY_TREND_SHARE: f64 = 0.1;

fn multiplier(table: &[(&str, f64)], label: &str) -> f64 {
    let label = label.trim().to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map_or(1.0, |(_, value)| *value)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn rating(total_multiplier: f64) -> InvestmentRating {
    if total_multiplier >= 1.5 {
        InvestmentRating::Excellent
    } else if total_multiplier >= 1.2 {
        InvestmentRating::Good
    } else if total_multiplier >= 1.0 {
        InvestmentRating::Fair
    } else {
        InvestmentRating::Poor
    }
}

fn analysis(params: &ValuationParams, change_percentage: f64) -> String {
    let pet_name = if params.pet_name.trim().is_empty() {
        "This pet"
    } else {
        params.pet_name.trim()
    };

    if change_percentage > 0.0 {
        format!(
            "Based on {} demand and {} trend, {} is expected to increase by {}% over {} days. The {} tier provides additional value stability.",
            params.demand,
            params.trend.to_lowercase(),
            pet_name,
            change_percentage,
            params.time_horizon,
            params.tier
        )
    } else if change_percentage < 0.0 {
        format!(
            "Market analysis suggests {} may decrease by {}% over {} days due to {} demand and {} market conditions.",
            pet_name,
            change_percentage.abs(),
            params.time_horizon,
            params.demand.to_lowercase(),
            params.trend.to_lowercase()
        )
    } else {
        format!(
            "{} is expected to maintain stable value over {} days with current market conditions.",
            pet_name, params.time_horizon
        )
    }
}

/// Predicts a pet's value after `time_horizon` days.
///
/// # Returns
/// - `Ok(Valuation)` - Prediction with trend, rating and analysis
/// - `Err(ValuationError)` - Value not in `(0, 1e15]` or horizon outside 1..=365 days
pub fn predict_value(params: ValuationParams) -> Result<Valuation, ValuationError> {
    let current = params.current_value;
    if !(current.is_finite() && current > 0.0) {
        return Err(ValuationError::NonPositiveValue(current));
    }
    if current > MAX_CURRENT_VALUE {
        return Err(ValuationError::ValueTooLarge(current));
    }
    if !(1..=MAX_HORIZON_DAYS).contains(&params.time_horizon) {
        return Err(ValuationError::HorizonOutOfRange(params.time_horizon));
    }

    let demand = multiplier(DEMAND_MULTIPLIERS, &params.demand);
    let trend = multiplier(TREND_MULTIPLIERS, &params.trend);
    let tier = multiplier(TIER_MULTIPLIERS, &params.tier);
    let time = (1.0 + (trend - 1.0) * MONTHLY_TREND_SHARE).powf(params.time_horizon as f64 / 30.0);

    let total_multiplier = demand * trend * tier * time;
    let predicted_value = (current * total_multiplier).round() as i64;
    let predicted = predicted_value as f64;

    let prediction_trend = if predicted > current * 1.1 {
        PredictionTrend::Positive
    } else if predicted < current * 0.9 {
        PredictionTrend::Negative
    } else {
        PredictionTrend::Neutral
    };

    let change_percentage = round1((predicted - current) / current * 100.0);

    Ok(Valuation {
        analysis: analysis(&params, change_percentage),
        params,
        predicted_value,
        total_multiplier,
        prediction_trend,
        investment_rating: rating(total_multiplier),
        change_percentage,
    })
}
