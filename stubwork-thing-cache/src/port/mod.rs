//! Port layer - abstract collaborators the cache depends on.

pub mod thing_service;

pub use thing_service::{Lookup, ThingService};
