pub mod in_memory_thing_service;
pub mod sled_thing_service;

pub use in_memory_thing_service::InMemoryThingService;
pub use sled_thing_service::{SledThingService, SledThingServiceError};
