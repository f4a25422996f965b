use contracts::domain::bhandara::OwnerId;

use crate::shared::storage;

const OWNER_ID_KEY: &str = "ownerId";

/// Return this browser profile's identity, creating and persisting it on
/// first use.
///
/// While localStorage survives, every call returns the same value verbatim.
/// With storage unavailable the id is scoped to the session: the app still
/// works, ownership just does not outlive the page.
pub fn get_or_create() -> OwnerId {
    if let Some(stored) = storage::get_item(OWNER_ID_KEY) {
        if !stored.is_empty() {
            return OwnerId::from(stored);
        }
    }

    let fresh = OwnerId::generate();
    if let Err(e) = storage::set_item(OWNER_ID_KEY, fresh.as_str()) {
        log::warn!("viewer identity will not outlive this session: {e}");
    }
    fresh
}
