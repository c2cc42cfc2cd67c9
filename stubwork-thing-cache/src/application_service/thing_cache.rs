use std::collections::HashMap;

use crate::domain::thing::{Thing, ThingId, ThingIdError};
use crate::port::thing_service::{Lookup, ThingService};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThingCacheError {
    #[error("invalid thing id: {0}")]
    InvalidId(#[from] ThingIdError),
}

/// Memoizing front for a `ThingService`.
///
/// - A thing that the service reported as found is stored and never asked for again.
/// - Absence is never stored; the next `get` for that id queries the service again.
/// - Entries are never evicted or invalidated for the lifetime of the cache.
///
/// The cache is single-owner: `get` takes `&mut self`, so concurrent use has to
/// be serialized by the caller (for instance behind a `Mutex`).
pub struct ThingCache<S> {
    service: S,
    things: HashMap<ThingId, Thing>,
}

impl<S> ThingCache<S>
where
    S: ThingService,
{
    pub fn new(service: S) -> Self {
        Self {
            service,
            things: HashMap::new(),
        }
    }

    /// Returns the thing named by `id`, asking the service only on a miss.
    ///
    /// Empty or blank ids are rejected before the service is consulted.
    pub fn get(&mut self, id: &str) -> Result<Option<&Thing>, ThingCacheError> {
        let id = ThingId::parse(id)?;
        Ok(self.get_by_id(&id))
    }

    pub fn get_by_id(&mut self, id: &ThingId) -> Option<&Thing> {
        if self.things.contains_key(id) {
            tracing::debug!("Thing cache hit for {}", id);
            return self.things.get(id);
        }

        match self.service.try_read(id) {
            Lookup::Found(thing) => {
                tracing::debug!("Thing {} resolved by lookup service", id);
                Some(&*self.things.entry(id.clone()).or_insert(thing))
            }
            Lookup::NotFound => {
                tracing::debug!("Thing {} not found by lookup service", id);
                None
            }
        }
    }

    pub fn contains(&self, id: &ThingId) -> bool {
        self.things.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.things.len()
    }

    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
