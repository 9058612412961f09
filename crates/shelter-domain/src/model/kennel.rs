//! Kennel - A single-occupant housing slot
//!
//! Kennel is an Entity with a fixed id and size class. It owns the
//! occupancy transitions (Vacant <-> Occupied) and the capacity rule.

use super::animal::{Animal, AnimalId};
use super::kennel_size::KennelSize;

/// Unique identifier for a Kennel (1-based, contiguous within a shelter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KennelId(u32);

impl KennelId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for KennelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a kennel currently houses an animal
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Occupancy {
    #[default]
    Vacant,
    Occupied(Animal),
}

/// Kennel - one slot, at most one animal
#[derive(Debug, Clone, PartialEq)]
pub struct Kennel {
    id: KennelId,
    size: KennelSize,
    occupancy: Occupancy,
}

impl Kennel {
    /// Create a new, vacant Kennel
    pub fn new(id: KennelId, size: KennelSize) -> Self {
        Self {
            id,
            size,
            occupancy: Occupancy::Vacant,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> KennelId {
        self.id
    }

    pub fn size(&self) -> KennelSize {
        self.size
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn occupant(&self) -> Option<&Animal> {
        match &self.occupancy {
            Occupancy::Occupied(animal) => Some(animal),
            Occupancy::Vacant => None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self.occupancy, Occupancy::Occupied(_))
    }

    // ========== Occupancy ==========

    /// Check if the kennel is vacant and the animal is within its weight class
    pub fn can_occupy(&self, animal: &Animal) -> bool {
        !self.is_occupied() && self.size.accepts(animal.weight())
    }

    /// Move an animal in
    ///
    /// On success the stored copy has its kennel id set to this kennel and
    /// is returned. On failure the input comes back untouched.
    pub fn try_add_animal(&mut self, animal: Animal) -> Result<Animal, Animal> {
        if !self.can_occupy(&animal) {
            return Err(animal);
        }

        let placed = animal.placed_in(self.id);
        self.occupancy = Occupancy::Occupied(placed.clone());
        Ok(placed)
    }

    /// Vacate the kennel, returning whoever was in it
    pub fn try_remove_animal(&mut self) -> Option<Animal> {
        match core::mem::take(&mut self.occupancy) {
            Occupancy::Occupied(animal) => Some(animal),
            Occupancy::Vacant => None,
        }
    }

    /// Vacate the kennel only if its occupant has the given id
    pub fn try_remove_animal_with_id(&mut self, id: AnimalId) -> Option<Animal> {
        if self.occupant().is_some_and(|animal| animal.id() == id) {
            self.try_remove_animal()
        } else {
            None
        }
    }
}
