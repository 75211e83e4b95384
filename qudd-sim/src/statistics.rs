//! Execution statistics

/// Resource counters captured after a circuit has been applied
#[derive(Debug, Clone, Default)]
pub struct ExecutionStatistics {
    /// Logical operations applied (preparation gates excluded)
    pub operations: usize,

    /// Interned decision-diagram nodes, terminal included
    pub dd_nodes: usize,

    /// Interned exact-complex values
    pub complex_entries: usize,

    /// Addition-cache hits
    pub add_cache_hits: u64,

    /// Addition-cache misses
    pub add_cache_misses: u64,

    /// Multiplication-cache hits
    pub mul_cache_hits: u64,

    /// Multiplication-cache misses
    pub mul_cache_misses: u64,
}

impl ExecutionStatistics {
    /// Fraction of addition lookups served from the cache
    pub fn add_hit_rate(&self) -> f64 {
        let total = self.add_cache_hits + self.add_cache_misses;
        if total == 0 {
            0.0
        } else {
            self.add_cache_hits as f64 / total as f64
        }
    }

    /// Fraction of multiplication lookups served from the cache
    pub fn mul_hit_rate(&self) -> f64 {
        let total = self.mul_cache_hits + self.mul_cache_misses;
        if total == 0 {
            0.0
        } else {
            self.mul_cache_hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rates() {
        let stats = ExecutionStatistics {
            add_cache_hits: 3,
            add_cache_misses: 1,
            ..Default::default()
        };
        assert_eq!(stats.add_hit_rate(), 0.75);
        assert_eq!(stats.mul_hit_rate(), 0.0);
    }
}
