use thiserror::Error;

/// Input errors of the weight predictor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("Age must be between 1 and 100, got {0}")]
    AgeOutOfRange(i64),

    #[error("Weight must be greater than 0, got {0}")]
    NonPositiveWeight(f64),

    #[error("Target age must be between 1 and 100, got {0}")]
    TargetAgeOutOfRange(i64),
}

/// Input errors of the value predictor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    #[error("Current value must be greater than 0, got {0}")]
    NonPositiveValue(f64),

    #[error("Current value must be at most 1e15, got {0}")]
    ValueTooLarge(f64),

    #[error("Time horizon must be between 1 and 365 days, got {0}")]
    HorizonOutOfRange(i64),
}

/// Errors of the arithmetic calculator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Expression is empty")]
    Empty,

    /// A character outside digits, `.`, `+ - * / ( )` was found after normalization.
    #[error("Invalid character '{0}' in expression")]
    InvalidCharacter(char),

    #[error("Malformed expression: {0}")]
    Malformed(String),

    #[error("Division by zero")]
    DivisionByZero,
}
