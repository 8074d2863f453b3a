//! Pet weight predictor.
//!
//! Pets grow along a fixed curve: the base weight at age `a` is
//! `round2((a + 10) / 11)`, from 1.00 at age 1 to 10.00 at age 100. A known
//! `(age, weight)` pair scales the whole curve.

use crate::server::{
    error::calculator::WeightError,
    model::weight::{WeightPoint, WeightTable},
};

pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 100;
/// Number of ages shown in a progression.
pub const PROGRESSION_LEN: usize = 10;
/// How far back a progression reaches when it runs out of later ages.
const PROGRESSION_LOOKBACK: u32 = 5;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Base weight at `age` on the growth curve.
pub fn base_weight(age: u32) -> f64 {
    round2((f64::from(age) + 10.0) / 11.0)
}

fn validate(age: i64, weight: f64) -> Result<u32, WeightError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(WeightError::AgeOutOfRange(age));
    }
    if !(weight.is_finite() && weight > 0.0) {
        return Err(WeightError::NonPositiveWeight(weight));
    }
    Ok(age as u32)
}

fn point(age: u32, weight: f64, target: u32) -> WeightPoint {
    WeightPoint {
        age: target,
        weight: round2(base_weight(target) * weight / base_weight(age)),
    }
}

/// Predicts the weight at a single target age.
///
/// # Returns
/// - `Ok(WeightPoint)` - Prediction rounded to two decimals
/// - `Err(WeightError)` - Age, weight or target age out of range
pub fn predict_at(age: i64, weight: f64, target_age: i64) -> Result<WeightPoint, WeightError> {
    let age = validate(age, weight)?;
    if !(MIN_AGE..=MAX_AGE).contains(&target_age) {
        return Err(WeightError::TargetAgeOutOfRange(target_age));
    }
    Ok(point(age, weight, target_age as u32))
}

/// Predicts the weight at every age from 1 to 100.
pub fn predict_all(age: i64, weight: f64) -> Result<WeightTable, WeightError> {
    let current_age = validate(age, weight)?;

    Ok(WeightTable {
        current_age,
        current_weight: weight,
        points: (MIN_AGE as u32..=MAX_AGE as u32)
            .map(|target| point(current_age, weight, target))
            .collect(),
    })
}

/// Predicts up to ten ages around the current one.
///
/// Runs from the current age to ten ages later, capped at 100. Near the cap,
/// up to five earlier ages are added so the table stays useful.
pub fn progression(age: i64, weight: f64) -> Result<WeightTable, WeightError> {
    let current_age = validate(age, weight)?;
    let max_age = MAX_AGE as u32;

    let mut ages: Vec<u32> = (current_age..=(current_age + 10).min(max_age)).collect();
    if ages.len() < PROGRESSION_LEN {
        let earliest = current_age.saturating_sub(PROGRESSION_LOOKBACK).max(1);
        ages.extend(earliest..current_age);
    }
    ages.sort_unstable();
    ages.truncate(PROGRESSION_LEN);

    Ok(WeightTable {
        current_age,
        current_weight: weight,
        points: ages
            .into_iter()
            .map(|target| point(current_age, weight, target))
            .collect(),
    })
}
