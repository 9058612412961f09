//! ShelterService - The operations exposed to transports
//!
//! Every method maps 1:1 to something a client can ask for. The service
//! owns the engine instance; whoever builds it decides how access is
//! serialized.

use shelter_domain::{Animal, AnimalId, Kennel, NewAnimal, Shelter, ShelterError};
use tracing::{debug, info, warn};

use crate::error::{Result, ServiceError};
use crate::validation::AdmissionRequest;

/// Outcome of seeding a shelter with a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub admitted: usize,
    pub turned_away: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ShelterService {
    shelter: Shelter,
}

impl ShelterService {
    pub fn new(shelter: Shelter) -> Self {
        Self { shelter }
    }

    /// Read-only access to the engine
    pub fn shelter(&self) -> &Shelter {
        &self.shelter
    }

    /// Snapshot of every kennel
    pub fn list_kennels(&self) -> Vec<Kennel> {
        self.shelter.kennels().to_vec()
    }

    /// Snapshot of the vacant kennels
    pub fn list_available(&self) -> Vec<Kennel> {
        self.shelter
            .available_kennels()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Run one compaction pass and return the resulting kennels
    pub fn reorganize(&mut self) -> Vec<Kennel> {
        let moves = self.shelter.reorganize_pass();
        info!(moves, "Reorganized kennels");
        self.list_kennels()
    }

    pub fn get_animal(&self, id: AnimalId) -> Result<Animal> {
        match self.shelter.try_get_animal(id) {
            Some(animal) => {
                debug!(%id, kennel = ?animal.kennel_id(), "Found animal");
                Ok(animal.clone())
            }
            None => {
                debug!(%id, "Animal not found");
                Err(ShelterError::AnimalNotFound { id }.into())
            }
        }
    }

    /// Validate and place an arrival
    pub fn admit(&mut self, request: AdmissionRequest) -> Result<Animal> {
        let animal = request.validate().map_err(|errors| {
            warn!(%errors, "Rejected invalid animal");
            ServiceError::Validation(errors)
        })?;

        self.place(animal)
    }

    /// Remove a resident and hand back its last state
    pub fn release(&mut self, id: AnimalId) -> Result<Animal> {
        let animal = self.shelter.try_remove_animal(id).map_err(|e| {
            debug!(%id, "Nothing to release");
            e
        })?;

        info!(
            %id,
            name = animal.name(),
            kennel = ?animal.kennel_id(),
            "Released animal"
        );
        Ok(animal)
    }

    /// Admit a roster in order, skipping anyone who does not fit
    pub fn seed(&mut self, roster: impl IntoIterator<Item = NewAnimal>) -> SeedReport {
        let mut report = SeedReport::default();

        for animal in roster {
            match self.place(animal) {
                Ok(_) => report.admitted += 1,
                Err(_) => report.turned_away += 1,
            }
        }

        info!(
            admitted = report.admitted,
            turned_away = report.turned_away,
            "Seeded shelter"
        );
        report
    }

    fn place(&mut self, animal: NewAnimal) -> Result<Animal> {
        match self.shelter.try_add_animal(animal) {
            Ok(placed) => {
                info!(
                    id = %placed.id(),
                    kind = placed.kind(),
                    name = placed.name(),
                    weight = placed.weight(),
                    kennel = ?placed.kennel_id(),
                    "Admitted animal"
                );
                Ok(placed)
            }
            Err(e) => {
                warn!("{}", e);
                Err(e.into())
            }
        }
    }
}
