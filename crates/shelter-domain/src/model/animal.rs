//! Animal - A resident of the shelter
//!
//! Animal is an Entity: its identity is the `AnimalId` handed out by the
//! Shelter. The kennel it lives in may change (reorganize, moves) but the
//! id never does.
//!
//! Callers never build an `Animal` directly. They describe an arrival as a
//! `NewAnimal`, and the Shelter turns it into an `Animal` on admission.

use super::kennel::KennelId;

/// Unique identifier for an Animal
///
/// Issued from the shelter's monotonically increasing counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimalId(u32);

impl AnimalId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The id that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for AnimalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An animal arriving at the shelter, before it has an id or a kennel
///
/// `kind` and `name` are non-empty and `weight` is positive; the use case
/// layer checks this before the engine ever sees the value.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnimal {
    pub kind: String,
    pub name: String,
    pub weight: f64,
}

impl NewAnimal {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            weight,
        }
    }

    /// Stamp an identity onto this arrival. The result is not yet placed.
    pub fn admit(self, id: AnimalId) -> Animal {
        Animal {
            id,
            kennel_id: None,
            kind: self.kind,
            name: self.name,
            weight: self.weight,
        }
    }
}

impl From<Animal> for NewAnimal {
    fn from(animal: Animal) -> Self {
        Self {
            kind: animal.kind,
            name: animal.name,
            weight: animal.weight,
        }
    }
}

/// A shelter-tracked animal
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    /// Entity identity
    id: AnimalId,
    /// Current placement; `None` until a kennel accepts the animal
    kennel_id: Option<KennelId>,
    /// Species or breed, e.g. "Dog"
    kind: String,
    name: String,
    weight: f64,
}

impl Animal {
    // ========== Getters ==========

    pub fn id(&self) -> AnimalId {
        self.id
    }

    pub fn kennel_id(&self) -> Option<KennelId> {
        self.kennel_id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Copy of this animal placed in `kennel_id`; every other field is kept
    pub fn placed_in(&self, kennel_id: KennelId) -> Self {
        Self {
            kennel_id: Some(kennel_id),
            ..self.clone()
        }
    }
}
