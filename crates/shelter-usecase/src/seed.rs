//! Demo roster used to populate a fresh shelter during development

use shelter_domain::NewAnimal;

const NAMED: &[(&str, &str, f64)] = &[
    ("Dog", "Max", 34.5),
    ("Dog", "Sam", 18.4),
    ("Cat", "Kitty", 8.6),
    ("Dog", "Spot", 56.8),
    ("Dog", "Bella", 22.0),
    ("Cat", "Luna", 11.1),
    ("Cat", "Lily", 13.2),
    ("Cat", "Milo", 4.2),
    ("Dog", "Otis", 12.1),
    ("Pig", "Leo", 78.0),
    ("Snake", "Chloe", 8.2),
    ("Pony", "Jasper", 92.9),
    ("Ferret", "Lily", 2.1),
];

/// The demo animals, in admission order
///
/// Thirteen named residents, then ten cats (`Dizzy1`..`Dizzy10`) and
/// ten dogs (`Bob1`..`Bob10`). The default 16/10/8 layout houses all of
/// them and keeps the last Large kennel free.
pub fn demo_roster() -> Vec<NewAnimal> {
    let named = NAMED
        .iter()
        .map(|(kind, name, weight)| NewAnimal::new(*kind, *name, *weight));
    let cats = (1..=10).map(|i| NewAnimal::new("Cat", format!("Dizzy{}", i), 9.1));
    let dogs = (1..=10).map(|i| NewAnimal::new("Dog", format!("Bob{}", i), 34.5));

    named.chain(cats).chain(dogs).collect()
}
