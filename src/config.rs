//! Wheel configuration.
//!
//! All constants the algorithms consume are gathered in one explicit value
//! passed at construction. Nothing in the crate reads a global table.

/// Constants governing one [`Wheel`][crate::wheel::Wheel].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelConfig {
    /// Largest number allowed in the universe (numbers live in `1..=max_number`).
    pub max_number: u32,
    /// Size `k` of every generated combination.
    pub combination_size: usize,
    /// Minimum count of distinct input numbers required to generate.
    pub min_input_count: usize,
    /// Upper bound on the size of a reduced selection.
    pub max_reduced_count: usize,
    /// Lower bound a caller may want to enforce on a reduced selection.
    pub min_reduced_count: usize,
    /// Values `min_hits` may take.
    pub allowed_min_hits: Vec<u32>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            max_number: 49,
            combination_size: 6,
            min_input_count: 8,
            max_reduced_count: 3000,
            min_reduced_count: 5,
            allowed_min_hits: vec![3, 4, 5],
        }
    }
}

impl WheelConfig {
    /// Returns whether `min_hits` is one of the allowed guarantee values.
    pub fn allows_min_hits(&self, min_hits: u32) -> bool {
        self.allowed_min_hits.contains(&min_hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WheelConfig::default();
        assert_eq!(config.max_number, 49);
        assert_eq!(config.combination_size, 6);
        assert_eq!(config.min_input_count, 8);
        assert_eq!(config.max_reduced_count, 3000);
        assert_eq!(config.min_reduced_count, 5);
        assert_eq!(config.allowed_min_hits, vec![3, 4, 5]);
    }

    #[test]
    fn test_allows_min_hits() {
        let config = WheelConfig::default();
        assert!(config.allows_min_hits(3));
        assert!(config.allows_min_hits(4));
        assert!(config.allows_min_hits(5));
        assert!(!config.allows_min_hits(2));
        assert!(!config.allows_min_hits(7));
    }
}
