pub mod application_service;
pub mod domain;
pub mod infrastructure;
pub mod port;

pub use application_service::thing_cache::{ThingCache, ThingCacheError};
pub use domain::thing::{Thing, ThingId, ThingIdError};
pub use port::thing_service::{Lookup, ThingService};
