//! JSON shapes of the HTTP API
//!
//! Field names are camelCase and kennel sizes are strings, e.g.
//!
//! ```json
//! { "id": 2, "size": "Medium",
//!   "occupant": { "id": 0, "kennelId": 2, "type": "Dog", "name": "Max", "weight": 34.5 } }
//! ```

use serde::{Deserialize, Serialize};
use shelter_domain::{Animal, Kennel, KennelSize, NewAnimal};
use shelter_usecase::AdmissionRequest;

/// A placed animal. `kennelId` is 0 when the animal has no kennel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDto {
    pub id: u32,
    pub kennel_id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub weight: f64,
}

impl From<&Animal> for AnimalDto {
    fn from(animal: &Animal) -> Self {
        Self {
            id: animal.id().value(),
            kennel_id: animal.kennel_id().map(|k| k.value()).unwrap_or(0),
            kind: animal.kind().to_string(),
            name: animal.name().to_string(),
            weight: animal.weight(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KennelSizeDto {
    Small,
    Medium,
    Large,
}

impl From<KennelSize> for KennelSizeDto {
    fn from(size: KennelSize) -> Self {
        match size {
            KennelSize::Small => KennelSizeDto::Small,
            KennelSize::Medium => KennelSizeDto::Medium,
            KennelSize::Large => KennelSizeDto::Large,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KennelDto {
    pub id: u32,
    pub size: KennelSizeDto,
    pub occupant: Option<AnimalDto>,
}

impl From<&Kennel> for KennelDto {
    fn from(kennel: &Kennel) -> Self {
        Self {
            id: kennel.id().value(),
            size: kennel.size().into(),
            occupant: kennel.occupant().map(AnimalDto::from),
        }
    }
}

pub fn kennel_dtos(kennels: &[Kennel]) -> Vec<KennelDto> {
    kennels.iter().map(KennelDto::from).collect()
}

/// Body of `POST /animal`
///
/// Every field is optional here so that missing values reach validation
/// and come back as a 400 listing each problem. `id` and `kennelId` are
/// assigned by the shelter and ignored if sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdmissionDto {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl From<AdmissionDto> for AdmissionRequest {
    fn from(dto: AdmissionDto) -> Self {
        Self {
            kind: dto.kind,
            name: dto.name,
            weight: dto.weight,
        }
    }
}

/// The arrival echoed back when no kennel could take it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAnimalDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub weight: f64,
}

impl From<NewAnimal> for NewAnimalDto {
    fn from(animal: NewAnimal) -> Self {
        Self {
            kind: animal.kind,
            name: animal.name,
            weight: animal.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shelter_domain::Shelter;

    #[test]
    fn test_kennel_json_shape() {
        let mut shelter = Shelter::new(1, 1, 0);
        shelter
            .try_add_animal(NewAnimal::new("Dog", "Max", 34.5))
            .unwrap();

        let value = serde_json::to_value(kennel_dtos(shelter.kennels())).unwrap();

        assert_eq!(
            value,
            json!([
                { "id": 1, "size": "Small", "occupant": null },
                {
                    "id": 2,
                    "size": "Medium",
                    "occupant": { "id": 0, "kennelId": 2, "type": "Dog", "name": "Max", "weight": 34.5 }
                }
            ])
        );
    }

    #[test]
    fn test_admission_ignores_assigned_fields() {
        let dto: AdmissionDto = serde_json::from_value(json!({
            "id": 42, "kennelId": 7, "type": "Cat", "name": "Kitty", "weight": 8.6
        }))
        .unwrap();

        assert_eq!(
            AdmissionRequest::from(dto),
            AdmissionRequest::new("Cat", "Kitty", 8.6)
        );
    }

    #[test]
    fn test_admission_tolerates_missing_and_null() {
        let dto: AdmissionDto = serde_json::from_value(json!({ "name": null })).unwrap();
        assert_eq!(dto, AdmissionDto::default());
    }
}
