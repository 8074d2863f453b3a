use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PetDto {
    pub name: String,
    /// Stored as posted, may be non-numeric such as "N/A".
    pub value: String,
    pub demand: Option<String>,
    pub image_url: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// A pet together with its normalized catalog key.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PetEntryDto {
    pub key: String,
    pub pet: PetDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PetCatalogDto {
    /// Pets in catalog order.
    pub pets: Vec<PetEntryDto>,
    pub count: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePetDto {
    pub name: String,
    /// Defaults to "0".
    #[serde(default)]
    pub value: Option<String>,
    /// Defaults to "Medium".
    #[serde(default)]
    pub demand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Fields to replace. Omitted fields stay unchanged; an empty `demand` or
/// `image_url` clears it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePetDto {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub demand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PetMatchDto {
    pub pet: PetDto,
    /// Match confidence as an integer percentage.
    pub confidence: u8,
}

/// Outcome of resolving a pet name, tagged by `outcome`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionDto {
    Exact {
        best: PetMatchDto,
    },
    Ambiguous {
        best_guess: PetMatchDto,
        alternatives: Vec<PetMatchDto>,
    },
    NotFound {
        /// Catalog names the caller can suggest instead.
        examples: Vec<String>,
    },
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQueryDto {
    /// Pet name to look up
    #[serde(default)]
    pub q: String,
}
