pub mod aggregate;
pub mod collection;

pub use aggregate::{Bhandara, BhandaraDraft, BhandaraId, OwnerId};
pub use collection::{decode_collection, encode_collection, prune_expired, remove_by_id, Pruned};
