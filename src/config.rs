//! Heap configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How `decrease_key` re-establishes the cached minimum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MinRefresh {
    /// Rescan every top-level root after each `decrease_key`
    ///
    /// Costs O(number of roots) per call. On ties the first lowest root in
    /// forest order becomes the minimum, same as after `extract_min`.
    #[default]
    Rescan,
    /// Compare only the decreased node against the cached minimum
    ///
    /// O(1), which is what the amortized bound for `decrease_key` assumes.
    /// On ties the previously cached minimum is kept.
    Incremental,
}

/// Tunables for [`FibonacciHeap`](crate::FibonacciHeap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeapConfig {
    pub min_refresh: MinRefresh,
    /// Initial node capacity of the heap's arena
    pub capacity: usize,
}

impl HeapConfig {
    pub fn with_min_refresh(mut self, min_refresh: MinRefresh) -> Self {
        self.min_refresh = min_refresh;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rescans() {
        let config = HeapConfig::default();
        assert_eq!(config.min_refresh, MinRefresh::Rescan);
        assert_eq!(config.capacity, 0);
    }

    #[test]
    fn test_builders() {
        let config = HeapConfig::default()
            .with_min_refresh(MinRefresh::Incremental)
            .with_capacity(64);
        assert_eq!(config.min_refresh, MinRefresh::Incremental);
        assert_eq!(config.capacity, 64);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_and_defaults() {
        let json = r#"{"min_refresh":"incremental"}"#;
        let config: HeapConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.min_refresh, MinRefresh::Incremental);
        assert_eq!(config.capacity, 0);

        let back = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<HeapConfig>(&back).unwrap(), config);
    }
}
