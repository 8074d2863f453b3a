use std::collections::BTreeMap;

use crate::model::calculator::WeightResponseDto;

/// Predicted weight at one age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightPoint {
    pub age: u32,
    pub weight: f64,
}

/// Predictions for every age, anchored on a known `(age, weight)`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    pub current_age: u32,
    pub current_weight: f64,
    pub points: Vec<WeightPoint>,
}

impl WeightTable {
    pub fn into_dto(self) -> WeightResponseDto {
        WeightResponseDto {
            current_age: i64::from(self.current_age),
            current_weight: self.current_weight,
            predictions: self
                .points
                .into_iter()
                .map(|point| (point.age, point.weight))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}
