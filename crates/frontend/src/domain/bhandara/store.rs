use contracts::domain::bhandara::{
    decode_collection, encode_collection, prune_expired, remove_by_id, Bhandara, BhandaraId,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::date_utils::start_of_today;
use crate::shared::storage;

const EVENTS_KEY: &str = "bhandaras";
const DEFAULT_REFRESH_INTERVAL_MS: u32 = 60_000;
const PERSIST_WARNING: &str = "Changes may not be saved: browser storage is unavailable or full.";

/// Owns the collection of bhandara records: the in-memory signal plus the
/// persisted localStorage payload behind it.
///
/// Constructed once at app start and handed to consumers through context.
/// All mutations run on the single browser thread, so the signal is the only
/// coordination needed. Storage writes replace the whole payload; two tabs
/// racing on the key resolve last-writer-wins.
#[derive(Clone, Copy)]
pub struct BhandaraStore {
    pub events: RwSignal<Vec<Bhandara>>,
    /// Set when a storage write fails. The in-memory collection stays
    /// authoritative for the session either way.
    pub persist_warning: RwSignal<Option<String>>,
    refresh_interval_ms: u32,
    refresh_stopped: RwSignal<bool>,
}

impl BhandaraStore {
    pub fn new() -> Self {
        Self::with_refresh_interval(DEFAULT_REFRESH_INTERVAL_MS)
    }

    pub fn with_refresh_interval(refresh_interval_ms: u32) -> Self {
        Self {
            events: RwSignal::new(Vec::new()),
            persist_warning: RwSignal::new(None),
            refresh_interval_ms,
            refresh_stopped: RwSignal::new(false),
        }
    }

    /// Read the persisted collection, drop records dated before today's
    /// local midnight, and rewrite storage when the sweep removed anything.
    /// An absent or unreadable payload counts as "no data".
    pub fn load(&self) -> Vec<Bhandara> {
        let stored = match storage::get_item(EVENTS_KEY) {
            None => Vec::new(),
            Some(raw) => match decode_collection(&raw) {
                Ok(events) => events,
                Err(e) => {
                    log::warn!("stored events are unreadable, starting empty: {e}");
                    Vec::new()
                }
            },
        };

        let pruned = prune_expired(stored, start_of_today());
        if pruned.removed > 0 {
            log::info!("expiry sweep dropped {} past event(s)", pruned.removed);
            self.persist(&pruned.events);
        }
        self.events.set(pruned.events.clone());
        pruned.events
    }

    /// Append a fully-formed record and persist the whole collection. The
    /// caller is responsible for field validation and identifier assignment.
    pub fn add(&self, record: Bhandara) -> Vec<Bhandara> {
        let mut events = self.events.get_untracked();
        events.push(record);
        self.persist(&events);
        self.events.set(events.clone());
        events
    }

    /// Remove the record with the given id. An unknown id is a no-op, not an
    /// error.
    pub fn remove(&self, id: &BhandaraId) -> Vec<Bhandara> {
        let current = self.events.get_untracked();
        let len_before = current.len();
        let events = remove_by_id(current, id);
        if events.len() != len_before {
            self.persist(&events);
            self.events.set(events.clone());
        }
        events
    }

    /// Re-run `load` every `refresh_interval_ms` so events crossing the
    /// midnight boundary disappear while the page stays open. Convergence
    /// within one interval is all that is promised.
    pub fn start_refresh(&self) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                TimeoutFuture::new(store.refresh_interval_ms).await;
                // Also bail if the owning reactive scope is already gone.
                match store.refresh_stopped.try_get_untracked() {
                    Some(false) => {
                        store.load();
                    }
                    _ => break,
                }
            }
        });
    }

    /// Cancel the refresh loop. Wired to `on_cleanup` of the owning
    /// component; the loop exits on its next tick.
    pub fn stop_refresh(&self) {
        self.refresh_stopped.set(true);
    }

    fn persist(&self, events: &[Bhandara]) {
        let write = encode_collection(events)
            .and_then(|payload| storage::set_item(EVENTS_KEY, &payload));
        match write {
            Ok(()) => self.persist_warning.set(None),
            Err(e) => {
                log::warn!("failed to persist events: {e}");
                self.persist_warning.set(Some(PERSIST_WARNING.to_string()));
            }
        }
    }
}
