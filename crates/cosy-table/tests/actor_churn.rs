//! Integration test: actor churn over a real record layout.
//!
//! Allocates a population of boids, writes each record through its
//! attribute offsets, then churns (delete a slice, reallocate) for many
//! rounds. Asserts that surviving records are untouched, reused ids are
//! the smallest free ones, and the buffer stops growing once the
//! population is stable.

use cosy_core::{ActorId, ActorSet, IntegralSet};
use cosy_table::{Table, TableConfig, TableError};
use cosy_test_utils::fixtures::{boid, fragmented_ids};

fn write_f32(table: &mut Table<'_>, id: ActorId, offset: usize, value: f32) {
    let slot = table.slot_mut(id).unwrap();
    slot[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn read_f32(table: &Table<'_>, id: ActorId, offset: usize) -> f32 {
    let slot = table.slot(id).unwrap();
    f32::from_le_bytes(slot[offset..offset + 4].try_into().unwrap())
}

// ── Record storage ──────────────────────────────────────────────

#[test]
fn records_are_addressed_through_attribute_offsets() {
    let boid = boid().unwrap();
    assert_eq!(boid.size(), 24);
    let x = boid.offset_of("x").unwrap();
    let vy = boid.offset_of("vy").unwrap();

    let mut table = Table::new(&boid);
    let ids = table.new_actors(10).unwrap();
    for id in &ids {
        write_f32(&mut table, id, x, id as f32);
        write_f32(&mut table, id, vy, -(id as f32));
    }
    for id in &ids {
        assert_eq!(read_f32(&table, id, x), id as f32);
        assert_eq!(read_f32(&table, id, vy), -(id as f32));
    }
    assert_eq!(table.buffer_len(), 16 * 24);
}

// ── Churn ───────────────────────────────────────────────────────

#[test]
fn churn_reuses_ids_and_keeps_survivors() {
    let boid = boid().unwrap();
    let x = boid.offset_of("x").unwrap();
    let mut table = Table::new(&boid);

    let population = table.new_actors(200).unwrap();
    for id in &population {
        write_f32(&mut table, id, x, id as f32);
    }
    let settled_capacity = table.capacity();
    assert_eq!(settled_capacity, 256);

    for round in 0..50u64 {
        // Free every other id in a window that moves each round.
        let start = 1 + (round * 7) % 150;
        let victims = fragmented_ids(start, 20);
        table.delete_actors(&victims);
        assert_eq!(table.num_actors(), 180);

        let reborn = table.new_actors(20).unwrap();
        assert_eq!(reborn, victims, "round {round}: smallest free ids reissued");
        for id in &reborn {
            write_f32(&mut table, id, x, id as f32);
        }

        assert_eq!(table.num_actors(), 200);
        assert_eq!(table.capacity(), settled_capacity);
    }

    for id in &population {
        assert_eq!(read_f32(&table, id, x), id as f32, "actor {id}");
    }
}

#[test]
fn single_deletes_and_batch_deletes_agree() {
    let boid = boid().unwrap();
    let mut one_by_one = Table::new(&boid);
    let mut batched = Table::new(&boid);
    one_by_one.new_actors(64).unwrap();
    batched.new_actors(64).unwrap();

    let victims: ActorSet = IntegralSet::from_segments([(3u64, 9), (20, 20), (40, 63)]);
    for id in &victims {
        one_by_one.delete_actor(id);
    }
    batched.delete_actors(&victims);

    assert_eq!(one_by_one.available(), batched.available());
    assert_eq!(one_by_one.num_actors(), batched.num_actors());
    assert_eq!(one_by_one.new_actors(5).unwrap(), batched.new_actors(5).unwrap());
}

// ── Configuration ───────────────────────────────────────────────

#[test]
fn reserved_ids_are_never_issued() {
    let boid = boid().unwrap();
    let config = TableConfig::new().with_first_id(1000).with_initial_capacity(64);
    let mut table = Table::with_config(&boid, config).unwrap();
    assert_eq!(table.buffer_len(), 64 * 24);

    let ids = table.new_actors(3).unwrap();
    assert_eq!(ids, IntegralSet::range(1000, 1002));
    assert!(!table.is_live(999));
    assert_eq!(table.slot(999), None);
}

#[test]
fn exhausted_table_reports_available_count() {
    let boid = boid().unwrap();
    let config = TableConfig::new().with_first_id(ActorId::MAX - 9);
    let mut table = Table::with_config(&boid, config).unwrap();
    table.new_actors(8).unwrap();

    let err = table.new_actors(3).unwrap_err();
    assert_eq!(
        err,
        TableError::Exhausted {
            requested: 3,
            available: 2
        }
    );
    assert_eq!(err.to_string(), "actor ids exhausted: requested 3, available 2");
}
