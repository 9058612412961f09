//! Shelter - The kennel allocation engine
//!
//! The Shelter owns a fixed arena of kennels and hands out animal ids:
//! 1. Place: first fit, scanning kennels smallest-first
//! 2. Find / Remove: linear scans in ascending kennel id order
//! 3. Reorganize: one compaction pass pulling animals into lower kennels
//!
//! Kennel ids are dense (1..=N) and laid out in size blocks:
//!
//! ```text
//! id:    1 ........ s | s+1 ........ s+m | s+m+1 ........ N
//! size:  Small        | Medium           | Large
//! ```
//!
//! This is pure domain logic - no I/O, no locking, no logging.

use crate::model::animal::{Animal, AnimalId, NewAnimal};
use crate::model::kennel::{Kennel, KennelId};
use crate::model::kennel_size::KennelSize;

pub const DEFAULT_SMALL_KENNELS: usize = 16;
pub const DEFAULT_MEDIUM_KENNELS: usize = 10;
pub const DEFAULT_LARGE_KENNELS: usize = 8;

/// Errors reported by Shelter operations
///
/// All of these are expected outcomes, not faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ShelterError {
    /// No kennel can take the animal right now; carries the original arrival
    CapacityExhausted { animal: NewAnimal },
    /// No current occupant has this id
    AnimalNotFound { id: AnimalId },
    /// Source not occupied, target not vacant, or target refused the animal
    MovePreconditionFailed { source: KennelId, target: KennelId },
    /// Kennel id outside 1..=N
    UnknownKennel { id: KennelId },
}

impl core::fmt::Display for ShelterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShelterError::CapacityExhausted { animal } => {
                write!(
                    f,
                    "No kennel available for {} '{}' ({})",
                    animal.kind, animal.name, animal.weight
                )
            }
            ShelterError::AnimalNotFound { id } => {
                write!(f, "Animal not found: {}", id)
            }
            ShelterError::MovePreconditionFailed { source, target } => {
                write!(f, "Cannot move animal from kennel {} to kennel {}", source, target)
            }
            ShelterError::UnknownKennel { id } => {
                write!(f, "Kennel not found: {}", id)
            }
        }
    }
}

impl std::error::Error for ShelterError {}

/// Shelter - owns the kennels and the animal id counter
#[derive(Debug, Clone)]
pub struct Shelter {
    /// Arena of kennels; index = id - 1
    kennels: Vec<Kennel>,
    /// Next unused animal id. Only ever moves forward.
    animal_index: AnimalId,
}

impl Default for Shelter {
    fn default() -> Self {
        Self::new(
            DEFAULT_SMALL_KENNELS,
            DEFAULT_MEDIUM_KENNELS,
            DEFAULT_LARGE_KENNELS,
        )
    }
}

impl Shelter {
    /// Create a shelter with `small` Small, `medium` Medium and `large` Large kennels
    pub fn new(small: usize, medium: usize, large: usize) -> Self {
        let sizes = core::iter::repeat(KennelSize::Small)
            .take(small)
            .chain(core::iter::repeat(KennelSize::Medium).take(medium))
            .chain(core::iter::repeat(KennelSize::Large).take(large));

        let kennels = sizes
            .zip(1u32..)
            .map(|(size, id)| Kennel::new(KennelId::new(id), size))
            .collect();

        Self {
            kennels,
            animal_index: AnimalId::new(0),
        }
    }

    // ========== Queries ==========

    /// All kennels, ascending by id
    pub fn kennels(&self) -> &[Kennel] {
        &self.kennels
    }

    /// Vacant kennels, ascending by id
    pub fn available_kennels(&self) -> Vec<&Kennel> {
        self.kennels.iter().filter(|k| !k.is_occupied()).collect()
    }

    pub fn kennel(&self, id: KennelId) -> Option<&Kennel> {
        self.index_of(id).map(|i| &self.kennels[i])
    }

    pub fn total_kennels(&self) -> usize {
        self.kennels.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.kennels.iter().filter(|k| k.is_occupied()).count()
    }

    /// The id the next successful admission will receive
    pub fn next_animal_id(&self) -> AnimalId {
        self.animal_index
    }

    /// Find a resident by id
    pub fn try_get_animal(&self, id: AnimalId) -> Option<&Animal> {
        self.kennels
            .iter()
            .filter_map(Kennel::occupant)
            .find(|animal| animal.id() == id)
    }

    // ========== Mutations ==========

    /// Admit an animal into the first kennel that can hold it
    ///
    /// Kennels are scanned in ascending id order, so small kennels fill before
    /// larger ones. On failure nothing changes and the arrival is handed back
    /// inside the error.
    pub fn try_add_animal(&mut self, animal: NewAnimal) -> Result<Animal, ShelterError> {
        let candidate = animal.admit(self.animal_index);

        let slot = self.kennels.iter().position(|k| k.can_occupy(&candidate));
        let Some(index) = slot else {
            return Err(ShelterError::CapacityExhausted {
                animal: candidate.into(),
            });
        };

        match self.kennels[index].try_add_animal(candidate) {
            Ok(placed) => {
                self.animal_index = self.animal_index.next();
                Ok(placed)
            }
            Err(rejected) => Err(ShelterError::CapacityExhausted {
                animal: rejected.into(),
            }),
        }
    }

    /// Remove a resident by id. Other kennels are left where they are.
    pub fn try_remove_animal(&mut self, id: AnimalId) -> Result<Animal, ShelterError> {
        self.kennels
            .iter_mut()
            .find_map(|k| k.try_remove_animal_with_id(id))
            .ok_or(ShelterError::AnimalNotFound { id })
    }

    /// Move the occupant of `source` into `target`
    ///
    /// Requires an occupied source and a vacant target. If the target turns
    /// the animal away it goes back into the source and the move fails.
    pub fn try_move_animal(
        &mut self,
        source: KennelId,
        target: KennelId,
    ) -> Result<(), ShelterError> {
        let from = self
            .index_of(source)
            .ok_or(ShelterError::UnknownKennel { id: source })?;
        let to = self
            .index_of(target)
            .ok_or(ShelterError::UnknownKennel { id: target })?;

        if !self.kennels[from].is_occupied() || self.kennels[to].is_occupied() {
            return Err(ShelterError::MovePreconditionFailed { source, target });
        }

        let Some(animal) = self.kennels[from].try_remove_animal() else {
            return Err(ShelterError::MovePreconditionFailed { source, target });
        };

        match self.kennels[to].try_add_animal(animal) {
            Ok(_) => Ok(()),
            Err(animal) => {
                let restored = self.kennels[from].try_add_animal(animal);
                debug_assert!(restored.is_ok(), "source kennel must take its occupant back");
                Err(ShelterError::MovePreconditionFailed { source, target })
            }
        }
    }

    /// Run one compaction pass and return every kennel afterwards
    pub fn reorganize(&mut self) -> &[Kennel] {
        self.reorganize_pass();
        &self.kennels
    }

    /// One compaction pass; returns how many animals moved
    ///
    /// Sources are visited from the highest id down. Each occupant is offered
    /// every lower kennel that could take it, lowest first. Only the first
    /// offer can succeed: once the source is empty the remaining attempts
    /// fail their precondition. A single pass is not a fixed point, so an
    /// animal freed up by a later (lower) source is not revisited.
    pub fn reorganize_pass(&mut self) -> usize {
        let mut moves = 0;

        for from in (0..self.kennels.len()).rev() {
            let Some(occupant) = self.kennels[from].occupant().cloned() else {
                continue;
            };
            let source = self.kennels[from].id();

            for to in 0..from {
                if !self.kennels[to].can_occupy(&occupant) {
                    continue;
                }
                let target = self.kennels[to].id();
                if self.try_move_animal(source, target).is_ok() {
                    moves += 1;
                }
            }
        }

        moves
    }

    fn index_of(&self, id: KennelId) -> Option<usize> {
        let index = (id.value() as usize).checked_sub(1)?;
        (index < self.kennels.len()).then_some(index)
    }
}
