//! Definiciones de eventos de traza y trait EventStore.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{TraceEvent, TraceEventKind};
