pub mod event_registry;
pub mod registration;

pub use event_registry::{EventRecord, EventRegistry};
