//! Benchmark workloads for cosy.
//!
//! Deterministic, seeded inputs shared by the criterion benches:
//!
//! - [`random_set`]: a set with a given number of scattered segments
//! - [`churn_plan`]: per-round batches of actors to delete and reallocate
//! - [`particle`]: a mid-sized record layout for table benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cosy_core::{ActorId, ActorSet, IntegralSet, Segment};
use cosy_layout::{ActorType, Attribute, LayoutError, RecordType, ScalarType};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a set of `segments` disjoint runs scattered over `[0, span)`.
///
/// Run lengths are 1 to 8 and runs never touch, so the result has exactly
/// `segments` segments.
pub fn random_set(seed: u64, segments: usize, span: u64) -> IntegralSet<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let stride = (span / segments.max(1) as u64).max(10);
    (0..segments as u64)
        .map(|i| {
            let lo = i * stride + 1 + rng.next_u64() % (stride - 9);
            let len = rng.next_u64() % 8;
            Segment::new(lo, lo + len)
        })
        .collect()
}

/// Plan `rounds` rounds of churn over a population with ids
/// `1..=population`.
///
/// Each round deletes `batch` distinct actors, which the bench then
/// reallocates before the next round. Reallocation is smallest-first, so
/// the live set is back to `1..=population` after every round and the
/// victims can be drawn independently.
pub fn churn_plan(seed: u64, population: u64, batch: u64, rounds: usize) -> Vec<ActorSet> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let batch = batch.min(population);
    (0..rounds)
        .map(|_| {
            let mut victims = ActorSet::new();
            while victims.size() < u128::from(batch) {
                let id: ActorId = 1 + rng.next_u64() % population;
                victims.insert(id);
            }
            victims
        })
        .collect()
}

/// A particle: 3D position and velocity, mass, charge and a species tag.
///
/// Size 56, alignment 8.
pub fn particle() -> Result<ActorType<'static>, LayoutError> {
    let record = RecordType::new([
        Attribute::new("species", &ScalarType::U16),
        Attribute::new("x", &ScalarType::F64),
        Attribute::new("y", &ScalarType::F64),
        Attribute::new("z", &ScalarType::F64),
        Attribute::new("vx", &ScalarType::F32),
        Attribute::new("vy", &ScalarType::F32),
        Attribute::new("vz", &ScalarType::F32),
        Attribute::new("mass", &ScalarType::F64),
        Attribute::new("charge", &ScalarType::F32),
    ])?;
    Ok(ActorType::new("particle", record))
}
