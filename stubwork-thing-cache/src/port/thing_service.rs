//! Lookup service contract.

use std::sync::Arc;

use crate::domain::thing::{Thing, ThingId};

/// Outcome of asking the lookup service for a thing.
///
/// Absence is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Thing),
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<Thing> {
        match self {
            Lookup::Found(thing) => Some(thing),
            Lookup::NotFound => None,
        }
    }
}

impl From<Option<Thing>> for Lookup {
    fn from(value: Option<Thing>) -> Self {
        value.map_or(Lookup::NotFound, Lookup::Found)
    }
}

/// Unreliable external source of things.
///
/// Implementations are queried synchronously and must treat a call as a pure
/// read from the caller's point of view.
pub trait ThingService {
    fn try_read(&self, id: &ThingId) -> Lookup;
}

impl<S: ThingService + ?Sized> ThingService for &S {
    fn try_read(&self, id: &ThingId) -> Lookup {
        (**self).try_read(id)
    }
}

impl<S: ThingService + ?Sized> ThingService for Box<S> {
    fn try_read(&self, id: &ThingId) -> Lookup {
        (**self).try_read(id)
    }
}

impl<S: ThingService + ?Sized> ThingService for Arc<S> {
    fn try_read(&self, id: &ThingId) -> Lookup {
        (**self).try_read(id)
    }
}
