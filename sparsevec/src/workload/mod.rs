//! Random workloads for benchmarking [`SparseVector`] against plain maps.
//!
//! The baselines here compute the same dot product by walking a
//! `HashMap<u32, f64>` directly, which is what the double-array layout of
//! [`SparseVector`] is meant to beat.

pub mod config;

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sparsevec_core::SparseVector;

pub use self::config::{WorkloadConfig, WorkloadConfigError, WorkloadConfigResult};

/// A dense vector plus the same sparse vector in map and double-array form.
#[derive(Debug, Clone)]
pub struct Workload {
    pub dense: Vec<f64>,
    pub map: HashMap<u32, f64>,
    pub sparse: SparseVector,
}

impl Workload {
    /// Generate a workload, rejecting configs that fail [`WorkloadConfig::validate`].
    pub fn generate(config: &WorkloadConfig) -> WorkloadConfigResult<Self> {
        config.validate()?;
        let mut rng = rng_for(config);

        let dense = random_dense(config, &mut rng);
        let map = random_sparse_map(config, &mut rng)?;
        let sparse = SparseVector::from(map.clone());

        log::info!(
            "generated workload: dense_dim={}, stored sparse entries={} (from {} draws)",
            dense.len(),
            sparse.len(),
            config.sparse_draws
        );

        Ok(Workload { dense, map, sparse })
    }
}

/// Seeded when the config carries a seed, otherwise drawn from the OS.
pub fn rng_for(config: &WorkloadConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub fn random_dense<R: Rng + ?Sized>(config: &WorkloadConfig, rng: &mut R) -> Vec<f64> {
    (0..config.dense_dim)
        .map(|_| rng.random::<f64>() * config.max_value)
        .collect()
}

/// Random index → value map drawn from `0..sparse_dim`.
pub fn random_sparse_map<R: Rng + ?Sized>(
    config: &WorkloadConfig,
    rng: &mut R,
) -> WorkloadConfigResult<HashMap<u32, f64>> {
    config.validate()?;

    let mut map = HashMap::with_capacity(config.sparse_draws);
    for _ in 0..config.sparse_draws {
        let index = rng.random_range(0..config.sparse_dim);
        map.insert(index, rng.random::<f64>() * config.max_value);
    }
    Ok(map)
}

/// Dot product by collecting the map's keys, then looking each one up again.
pub fn dot_by_map_keys(map: &HashMap<u32, f64>, dense: &[f64]) -> f64 {
    let keys: Vec<&u32> = map.keys().collect();
    keys.into_iter()
        .filter_map(|index| dense.get(*index as usize).map(|d| map[index] * d))
        .sum()
}

/// Dot product walking the map's entries directly.
pub fn dot_by_map_traversal(map: &HashMap<u32, f64>, dense: &[f64]) -> f64 {
    map.iter()
        .filter_map(|(index, value)| dense.get(*index as usize).map(|d| value * d))
        .sum()
}
