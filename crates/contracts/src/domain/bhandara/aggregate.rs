use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier of a bhandara record.
///
/// Opaque by design: whatever string is found in storage round-trips
/// unchanged, so records written by older builds stay addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BhandaraId(String);

impl BhandaraId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BhandaraId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of the browser profile a record was created under.
///
/// Gates deletion only. There is no cryptographic strength behind it and no
/// backend to verify it against; anyone editing local storage can claim any
/// record. Accepted limitation of the backend-less design.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OwnerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// ============================================================================
// Record
// ============================================================================

/// A community food-distribution event.
///
/// Field names match the persisted JSON layout. `image_url` holds a data URI,
/// so a record is fully self-contained and needs no external image storage.
/// Records are immutable once created; the only mutation is deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bhandara {
    pub id: BhandaraId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    pub date_time: DateTime<Utc>,
    pub owner_id: OwnerId,
}

impl Bhandara {
    /// Whether `viewer` may delete this record.
    pub fn is_owned_by(&self, viewer: &OwnerId) -> bool {
        self.owner_id == *viewer
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Creation-form state.
///
/// `date_time` keeps the raw `datetime-local` input value; the frontend
/// converts it to an instant on submit. `image_url` is `None` until the
/// visitor has picked an image.
#[derive(Debug, Clone, Default)]
pub struct BhandaraDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date_time: String,
    pub image_url: Option<String>,
}

impl BhandaraDraft {
    /// Field-level validation, run before a record is constructed.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        if self.location.trim().is_empty() {
            return Err("Location is required".into());
        }
        if self.date_time.trim().is_empty() {
            return Err("Date and time are required".into());
        }
        if self.image_url.is_none() {
            return Err("Please add an image".into());
        }
        Ok(())
    }

    /// Build the record that goes into the store: fresh identifier, ownership
    /// pinned to the caller's identity, the already-parsed event instant.
    pub fn into_record(self, date_time: DateTime<Utc>, owner_id: OwnerId) -> Bhandara {
        Bhandara {
            id: BhandaraId::generate(),
            title: self.title,
            description: self.description,
            location: self.location,
            image_url: self.image_url.unwrap_or_default(),
            date_time,
            owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BhandaraDraft {
        BhandaraDraft {
            title: "Gurudwara langar".to_string(),
            description: "Puri, chhole, kheer".to_string(),
            location: "Sector 18 park".to_string(),
            date_time: "2024-06-01T12:30".to_string(),
            image_url: Some("data:image/png;base64,AAAA".to_string()),
        }
    }

    #[test]
    fn draft_with_all_fields_passes_validation() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn draft_rejects_missing_required_fields() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        assert!(draft.validate().is_err());

        let mut draft = valid_draft();
        draft.location = String::new();
        assert!(draft.validate().is_err());

        let mut draft = valid_draft();
        draft.date_time = String::new();
        assert!(draft.validate().is_err());

        let mut draft = valid_draft();
        draft.image_url = None;
        assert_eq!(draft.validate(), Err("Please add an image".to_string()));
    }

    #[test]
    fn empty_description_is_allowed() {
        let mut draft = valid_draft();
        draft.description = String::new();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn into_record_carries_fields_and_generates_id() {
        let owner = OwnerId::generate();
        let when = "2024-06-01T07:00:00Z".parse::<DateTime<Utc>>().unwrap();

        let a = valid_draft().into_record(when, owner.clone());
        let b = valid_draft().into_record(when, owner.clone());

        assert_eq!(a.title, "Gurudwara langar");
        assert_eq!(a.location, "Sector 18 park");
        assert_eq!(a.date_time, when);
        assert_eq!(a.owner_id, owner);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn ownership_gates_deletion_to_the_creating_identity() {
        let creator = OwnerId::generate();
        let stranger = OwnerId::generate();
        assert_ne!(creator, stranger);

        let when = "2024-06-01T07:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let record = valid_draft().into_record(when, creator.clone());

        assert!(record.is_owned_by(&creator));
        assert!(!record.is_owned_by(&stranger));
    }

    #[test]
    fn ids_round_trip_foreign_values_unchanged() {
        let foreign = OwnerId::from("not-a-uuid-at-all".to_string());
        assert_eq!(foreign.as_str(), "not-a-uuid-at-all");
    }
}
