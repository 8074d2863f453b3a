//! Outcome types of pet name resolution.

use std::fmt;

use crate::{
    model::pet::{PetMatchDto, ResolutionDto},
    server::model::pet::PetRecord,
};

/// Match confidence as an integer percentage, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Confidence(u8);

impl Confidence {
    pub const EXACT: Confidence = Confidence(100);

    /// Clamps to 100.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PetMatch {
    pub record: PetRecord,
    pub confidence: Confidence,
}

impl PetMatch {
    pub fn into_dto(self) -> PetMatchDto {
        PetMatchDto {
            pet: self.record.into_dto(),
            confidence: self.confidence.percent(),
        }
    }
}

/// Three-way result of resolving a query against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Exact key hit, or a fuzzy match clear enough to auto-accept.
    Exact(PetMatch),
    /// Something cleared the floor but nothing was auto-accepted.
    Ambiguous {
        best_guess: PetMatch,
        /// Next-ranked matches after `best_guess`.
        alternatives: Vec<PetMatch>,
    },
    NotFound,
}

impl Resolution {
    /// Converts to the API representation.
    ///
    /// # Arguments
    /// - `examples` - Catalog names reported with `NotFound`
    pub fn into_dto(self, examples: Vec<String>) -> ResolutionDto {
        match self {
            Self::Exact(best) => ResolutionDto::Exact {
                best: best.into_dto(),
            },
            Self::Ambiguous {
                best_guess,
                alternatives,
            } => ResolutionDto::Ambiguous {
                best_guess: best_guess.into_dto(),
                alternatives: alternatives.into_iter().map(PetMatch::into_dto).collect(),
            },
            Self::NotFound => ResolutionDto::NotFound { examples },
        }
    }
}
