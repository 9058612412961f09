//! Admission validation
//!
//! An `AdmissionRequest` is what a client submitted, with every field
//! possibly missing. Validation either yields a `NewAnimal` the engine can
//! trust or a field -> messages map describing what is wrong.

use std::collections::BTreeMap;

use shelter_domain::NewAnimal;

pub const TYPE_FIELD: &str = "Type";
pub const NAME_FIELD: &str = "Name";
pub const WEIGHT_FIELD: &str = "Weight";

pub const WEIGHT_MESSAGE: &str = "Animal weight must be greater than zero";

/// Raw add-animal input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdmissionRequest {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub weight: Option<f64>,
}

impl AdmissionRequest {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self {
            kind: Some(kind.into()),
            name: Some(name.into()),
            weight: Some(weight),
        }
    }

    /// Check every field and collect all problems at once
    pub fn validate(self) -> Result<NewAnimal, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let kind = required(self.kind, TYPE_FIELD, &mut errors);
        let name = required(self.name, NAME_FIELD, &mut errors);

        let weight = self.weight.unwrap_or_default();
        if !(weight.is_finite() && weight > 0.0) {
            errors.add(WEIGHT_FIELD, WEIGHT_MESSAGE);
        }

        match (kind, name) {
            (Some(kind), Some(name)) if errors.is_empty() => Ok(NewAnimal::new(kind, name, weight)),
            _ => Err(errors),
        }
    }
}

fn required(value: Option<String>, field: &str, errors: &mut ValidationErrors) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.add(field, format!("The {} field is required.", field));
            None
        }
    }
}

/// Field name -> list of messages, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.0
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
