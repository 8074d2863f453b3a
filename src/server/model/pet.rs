//! Pet records and the transient candidates parsed out of postings.

use chrono::{DateTime, Utc};

use crate::{
    model::pet::{CreatePetDto, PetDto, PetEntryDto, UpdatePetDto},
    server::util::text::normalize,
};

/// A stored pet value entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PetRecord {
    /// Canonical display name. Unique once normalized.
    pub name: String,
    /// Value as posted, possibly non-numeric ("N/A").
    pub value: String,
    pub demand: Option<String>,
    /// Only ever set from a single-pet posting.
    pub image_url: Option<String>,
    pub last_updated: DateTime<Utc>,
    /// Discord message that last updated the record.
    pub message_id: Option<String>,
}

impl PetRecord {
    /// Normalized catalog key of this record.
    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    /// Converts the record to a DTO for API responses.
    pub fn into_dto(self) -> PetDto {
        PetDto {
            name: self.name,
            value: self.value,
            demand: self.demand,
            image_url: self.image_url,
            last_updated: self.last_updated,
        }
    }

    /// Converts the record to a DTO carrying its catalog key.
    pub fn into_entry_dto(self) -> PetEntryDto {
        PetEntryDto {
            key: self.key(),
            pet: self.into_dto(),
        }
    }

    /// Converts an entity model to a pet record at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `PetRecord` - The converted domain model
    pub fn from_entity(entity: entity::pet::Model) -> Self {
        Self {
            name: entity.name,
            value: entity.value,
            demand: entity.demand,
            image_url: entity.image_url,
            last_updated: entity.last_updated,
            message_id: entity.message_id,
        }
    }
}

/// A `(name, value, demand)` triple parsed from one posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Cleaned display name.
    pub raw_name: String,
    pub value: String,
    pub demand: Option<String>,
    /// True iff the posting produced exactly one candidate.
    pub is_single_pet_message: bool,
    /// `Image: <url>` field of the posting, lossless quality parameter removed.
    pub image_url: Option<String>,
}

/// Message-level facts the extractor does not see but a merge needs.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestContext {
    pub message_id: Option<String>,
    /// The message's only image attachment or embed image, if it had exactly one.
    pub attachment_image: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A pet added through the admin API.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePetParams {
    pub name: String,
    pub value: String,
    pub demand: Option<String>,
    pub image_url: Option<String>,
}

impl CreatePetParams {
    /// Converts the request body, trimming fields and applying defaults.
    ///
    /// A missing value becomes `"0"` and a missing demand becomes `"Medium"`.
    pub fn from_dto(dto: CreatePetDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            value: non_blank(dto.value).unwrap_or_else(|| DEFAULT_VALUE.to_string()),
            demand: Some(non_blank(dto.demand).unwrap_or_else(|| DEFAULT_DEMAND.to_string())),
            image_url: non_blank(dto.image_url),
        }
    }

    pub fn into_record(self, last_updated: DateTime<Utc>) -> PetRecord {
        PetRecord {
            name: self.name,
            value: self.value,
            demand: self.demand,
            image_url: self.image_url,
            last_updated,
            message_id: None,
        }
    }
}

/// Fields replaced by an admin update.
///
/// `None` leaves a field unchanged. For `demand` and `image_url`, `Some(None)`
/// clears the stored field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePetParams {
    pub value: Option<String>,
    pub demand: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
}

impl UpdatePetParams {
    /// Converts the request body. Blank demand or image strings clear the field.
    pub fn from_dto(dto: UpdatePetDto) -> Self {
        Self {
            value: dto.value.map(|value| value.trim().to_string()),
            demand: dto.demand.map(|demand| non_blank(Some(demand))),
            image_url: dto.image_url.map(|url| non_blank(Some(url))),
        }
    }

    /// Applies the update to a copy of `record`, stamping `last_updated`.
    pub fn apply(self, record: &PetRecord, last_updated: DateTime<Utc>) -> PetRecord {
        PetRecord {
            name: record.name.clone(),
            value: self.value.unwrap_or_else(|| record.value.clone()),
            demand: self.demand.unwrap_or_else(|| record.demand.clone()),
            image_url: self.image_url.unwrap_or_else(|| record.image_url.clone()),
            last_updated,
            message_id: record.message_id.clone(),
        }
    }
}

/// A change made through the admin API, announced to Discord.
#[derive(Debug, Clone, PartialEq)]
pub enum PetChange {
    Added(PetRecord),
    Updated { before: PetRecord, after: PetRecord },
    Deleted(PetRecord),
}

impl PetChange {
    /// The record after the change, or the removed record for a deletion.
    pub fn record(&self) -> &PetRecord {
        match self {
            Self::Added(record) | Self::Deleted(record) => record,
            Self::Updated { after, .. } => after,
        }
    }
}

const DEFAULT_VALUE: &str = "0";
const DEFAULT_DEMAND: &str = "Medium";

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
