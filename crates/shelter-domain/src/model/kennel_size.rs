//! KennelSize - The capacity class of a kennel
//!
//! KennelSize is a Value Object. Capacity is nested:
//! anything a Small kennel accepts, Medium and Large accept too.

/// Maximum occupant weight for a Small kennel
pub const SMALL_MAX_WEIGHT: f64 = 20.0;

/// Maximum occupant weight for a Medium kennel
pub const MEDIUM_MAX_WEIGHT: f64 = 50.0;

/// The three kennel size classes, declared smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KennelSize {
    /// Up to 20 weight units
    Small,
    /// Up to 50 weight units
    Medium,
    /// No weight limit
    Large,
}

impl KennelSize {
    /// Get the display name of this size
    pub fn display_name(&self) -> &'static str {
        match self {
            KennelSize::Small => "Small",
            KennelSize::Medium => "Medium",
            KennelSize::Large => "Large",
        }
    }

    /// Upper weight bound, or `None` when the class disregards weight
    pub fn max_weight(&self) -> Option<f64> {
        match self {
            KennelSize::Small => Some(SMALL_MAX_WEIGHT),
            KennelSize::Medium => Some(MEDIUM_MAX_WEIGHT),
            KennelSize::Large => None,
        }
    }

    /// Check whether an animal of this weight fits the class
    pub fn accepts(&self, weight: f64) -> bool {
        match self.max_weight() {
            Some(max) => weight <= max,
            None => true,
        }
    }

    /// Get all sizes in block order
    pub fn all() -> &'static [KennelSize] {
        &[KennelSize::Small, KennelSize::Medium, KennelSize::Large]
    }
}

impl core::fmt::Display for KennelSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_inclusive() {
        assert!(KennelSize::Small.accepts(20.0));
        assert!(!KennelSize::Small.accepts(20.01));
        assert!(KennelSize::Medium.accepts(50.0));
        assert!(!KennelSize::Medium.accepts(50.5));
    }

    #[test]
    fn test_large_ignores_weight() {
        assert!(KennelSize::Large.accepts(10_000.0));
        assert_eq!(KennelSize::Large.max_weight(), None);
    }

    #[test]
    fn test_capacity_is_nested() {
        for weight in [0.1, 8.6, 20.0, 34.5, 50.0, 92.9] {
            if KennelSize::Small.accepts(weight) {
                assert!(KennelSize::Medium.accepts(weight));
            }
            if KennelSize::Medium.accepts(weight) {
                assert!(KennelSize::Large.accepts(weight));
            }
        }
    }

    #[test]
    fn test_block_order() {
        assert!(KennelSize::Small < KennelSize::Medium);
        assert!(KennelSize::Medium < KennelSize::Large);
        assert_eq!(KennelSize::all().len(), 3);
    }
}
