use std::collections::HashMap;

use crate::domain::thing::{Thing, ThingId};
use crate::port::thing_service::{Lookup, ThingService};

/// Lookup service backed by a fixed in-process table.
///
/// Useful for local runs and for wiring the cache without any storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryThingService {
    things: HashMap<ThingId, Thing>,
}

impl InMemoryThingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thing(mut self, thing: Thing) -> Self {
        self.things.insert(thing.id().clone(), thing);
        self
    }
}

impl FromIterator<Thing> for InMemoryThingService {
    fn from_iter<I: IntoIterator<Item = Thing>>(iter: I) -> Self {
        let things = iter
            .into_iter()
            .map(|thing| (thing.id().clone(), thing))
            .collect();
        Self { things }
    }
}

impl ThingService for InMemoryThingService {
    fn try_read(&self, id: &ThingId) -> Lookup {
        self.things.get(id).cloned().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_configured_thing() {
        let id = ThingId::parse("TheDress").unwrap();
        let service = InMemoryThingService::new()
            .with_thing(Thing::with_payload(id.clone(), b"blue and black".to_vec()));

        match service.try_read(&id) {
            Lookup::Found(thing) => assert_eq!(thing.payload(), b"blue and black"),
            Lookup::NotFound => panic!("expected thing to be found"),
        }
    }

    #[test]
    fn unknown_id_is_not_found() {
        let service: InMemoryThingService = vec![Thing::new(ThingId::parse("a").unwrap())]
            .into_iter()
            .collect();

        assert_eq!(
            service.try_read(&ThingId::parse("b").unwrap()),
            Lookup::NotFound
        );
    }
}
