//! Integration tests for the thing cache wired to the bundled lookup services.

use std::cell::Cell;

use stubwork_thing_cache::infrastructure::{InMemoryThingService, SledThingService};
use stubwork_thing_cache::{Lookup, Thing, ThingCache, ThingCacheError, ThingId, ThingService};

/// Counts calls while delegating to a real lookup service.
struct CountingService<S> {
    inner: S,
    calls: Cell<usize>,
}

impl<S> CountingService<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }
}

impl<S: ThingService> ThingService for CountingService<S> {
    fn try_read(&self, id: &ThingId) -> Lookup {
        self.calls.set(self.calls.get() + 1);
        self.inner.try_read(id)
    }
}

fn thing(id: &str) -> Thing {
    Thing::new(ThingId::parse(id).unwrap())
}

#[test]
fn the_dress_is_served_from_cache_on_second_get() {
    let service = CountingService::new(InMemoryThingService::new().with_thing(thing("TheDress")));
    let mut cache = ThingCache::new(&service);

    let first = cache.get("TheDress").unwrap().cloned();
    let second = cache.get("TheDress").unwrap().cloned();

    assert_eq!(first, Some(thing("TheDress")));
    assert_eq!(first, second);
    assert_eq!(service.calls.get(), 1);
}

#[test]
fn missing_is_asked_every_time() {
    let service = CountingService::new(InMemoryThingService::new());
    let mut cache = ThingCache::new(&service);

    assert_eq!(cache.get("Missing").unwrap(), None);
    assert_eq!(cache.get("Missing").unwrap(), None);

    assert_eq!(service.calls.get(), 2);
    assert!(cache.is_empty());
}

#[test]
fn cache_over_sled_service_remembers_answer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sled_service = SledThingService::open(dir.path().join("things_db")).expect("open sled");
    sled_service
        .put(&Thing::with_payload(
            ThingId::parse("CoolBoots").unwrap(),
            b"size 42".to_vec(),
        ))
        .unwrap();

    let service = CountingService::new(sled_service);
    let mut cache = ThingCache::new(&service);

    let boots = cache.get("CoolBoots").unwrap().cloned().unwrap();
    assert_eq!(boots.payload(), b"size 42");

    // Overwriting the store does not affect an already resolved id.
    service
        .inner
        .put(&Thing::with_payload(
            ThingId::parse("CoolBoots").unwrap(),
            b"size 43".to_vec(),
        ))
        .unwrap();

    let again = cache.get("CoolBoots").unwrap().cloned().unwrap();
    assert_eq!(again.payload(), b"size 42");
    assert_eq!(service.calls.get(), 1);
}

#[test]
fn thing_appearing_later_is_picked_up_after_a_miss() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = SledThingService::open(dir.path().join("things_db")).expect("open sled");
    let mut cache = ThingCache::new(&service);

    assert!(cache.get("Late").unwrap().is_none());

    service.put(&thing("Late")).unwrap();

    assert_eq!(cache.get("Late").unwrap().cloned(), Some(thing("Late")));
    assert!(cache.contains(&ThingId::parse("Late").unwrap()));
}

#[test]
fn blank_id_is_rejected() {
    let service = CountingService::new(InMemoryThingService::new());
    let mut cache = ThingCache::new(&service);

    assert!(matches!(
        cache.get("  "),
        Err(ThingCacheError::InvalidId(_))
    ));
    assert_eq!(service.calls.get(), 0);
}
