//! Actor tables: identifier allocation plus record storage for one actor kind.
//!
//! A [`Table`] issues and reclaims unique, non-zero [`ActorId`]s and keeps a
//! byte buffer with one record slot per identifier.
//!
//! # Identifier policy
//!
//! Free identifiers live in an [`ActorSet`] initialised to
//! `[first_id, ActorId::MAX]`. Allocation always takes the *smallest* free
//! identifiers, so ids stay dense as long as frees happen promptly. The
//! table does not track live ids separately: an id in range is live iff
//! it is not in the free set.
//!
//! # Buffer growth
//!
//! Capacity (in record slots) is the smallest power of two at or above the
//! live count, recomputed on every allocation. The buffer never shrinks,
//! so alloc/free churn around a stable population does not reallocate.
//!
//! # Slot addressing
//!
//! The record of `id` lives at byte offset `(id - first_id) * record_size`.
//! Smallest-first issuance means every id below a newly issued one is live
//! at that moment, so the live count (and therefore the capacity) already
//! covers its slot. Capacity never shrinks, so the slot stays in range for
//! as long as the id is live.

use std::fmt;
use std::ops::Range;

use cosy_core::{ActorId, ActorSet};
use cosy_layout::RecordLayout;

use crate::config::TableConfig;
use crate::error::TableError;

/// Allocates actor identifiers and stores one record per live actor.
///
/// Borrows its record layout for `'a`; the layout must outlive the table.
pub struct Table<'a> {
    layout: &'a dyn RecordLayout,
    available_ids: ActorSet,
    first_id: ActorId,
    num_actors: u64,
    /// Record slots backed by `buffer`.
    capacity: u64,
    buffer: Vec<u8>,
}

impl<'a> Table<'a> {
    /// Create an empty table with the default [`TableConfig`].
    pub fn new(layout: &'a dyn RecordLayout) -> Self {
        let first_id = TableConfig::DEFAULT_FIRST_ID;
        Self {
            layout,
            available_ids: ActorSet::range(first_id, ActorId::MAX),
            first_id,
            num_actors: 0,
            capacity: 0,
            buffer: Vec::new(),
        }
    }

    /// Create an empty table with an explicit config.
    ///
    /// Fails if the config is invalid or the initial capacity does not fit
    /// in memory.
    pub fn with_config(
        layout: &'a dyn RecordLayout,
        config: TableConfig,
    ) -> Result<Self, TableError> {
        config.validate()?;
        let mut table = Self {
            layout,
            available_ids: ActorSet::range(config.first_id, ActorId::MAX),
            first_id: config.first_id,
            num_actors: 0,
            capacity: 0,
            buffer: Vec::new(),
        };
        table.reserve_slots(config.initial_capacity)?;
        Ok(table)
    }

    /// Allocate one actor and return its identifier.
    ///
    /// The identifier is the smallest one not currently live.
    pub fn new_actor(&mut self) -> Result<ActorId, TableError> {
        if self.available_ids.is_empty() {
            return Err(self.exhausted(1));
        }
        self.reserve_slots(self.num_actors + 1)?;
        let id = self.available_ids.take_head().map_err(|_| self.exhausted(1))?;
        self.num_actors += 1;

        tracing::trace!(target: "cosy.table", id, live = self.num_actors, "actor allocated");
        Ok(id)
    }

    /// Allocate `n` actors at once and return their identifiers.
    ///
    /// The identifiers are the `n` smallest ones not currently live. The
    /// buffer grows at most once. Fails without allocating anything if
    /// fewer than `n` identifiers are free.
    pub fn new_actors(&mut self, n: u64) -> Result<ActorSet, TableError> {
        if u128::from(n) > self.available_ids.size() {
            return Err(self.exhausted(n));
        }
        // Live + free never exceeds the id range, so this cannot overflow.
        let live = self.num_actors + n;
        self.reserve_slots(live)?;
        let ids = self.available_ids.take_head_n(u128::from(n));
        self.num_actors = live;

        tracing::trace!(target: "cosy.table", count = n, %ids, live, "actors allocated");
        Ok(ids)
    }

    /// Release one actor's identifier for reuse.
    ///
    /// The record slot is left as is; it is overwritten when the id is
    /// issued again.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `id` is not live. Release builds skip the
    /// check; deleting a non-live id there leaves the live count and free
    /// set inconsistent (but never touches memory out of bounds).
    pub fn delete_actor(&mut self, id: ActorId) {
        debug_assert!(self.is_live(id), "delete_actor: actor {id} is not live");
        self.num_actors = self.num_actors.saturating_sub(1);
        self.available_ids.insert(id);

        tracing::trace!(target: "cosy.table", id, live = self.num_actors, "actor deleted");
    }

    /// Release a set of identifiers for reuse.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if any id in `ids` is not live. See
    /// [`Table::delete_actor`] for release-build behaviour.
    pub fn delete_actors(&mut self, ids: &ActorSet) {
        debug_assert!(
            ids.first().is_none_or(|lo| lo >= self.first_id)
                && ids.is_disjoint(&self.available_ids),
            "delete_actors: {ids} contains actors that are not live"
        );
        let count = u64::try_from(ids.size()).unwrap_or(u64::MAX);
        self.num_actors = self.num_actors.saturating_sub(count);
        self.available_ids.merge(ids);

        tracing::trace!(target: "cosy.table", count, live = self.num_actors, "actors deleted");
    }

    /// Number of live actors.
    pub fn num_actors(&self) -> u64 {
        self.num_actors
    }

    /// True if `id` has been issued and not deleted since.
    pub fn is_live(&self, id: ActorId) -> bool {
        id >= self.first_id && !self.available_ids.contains(id)
    }

    /// The free identifier pool.
    pub fn available(&self) -> &ActorSet {
        &self.available_ids
    }

    /// Smallest identifier this table issues.
    pub fn first_id(&self) -> ActorId {
        self.first_id
    }

    /// Record slots currently backed by the buffer.
    ///
    /// Always a power of two (or 0 before the first allocation, and for
    /// zero-sized records).
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Size of the record buffer in bytes.
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// The record layout of this table's actors.
    pub fn layout(&self) -> &'a dyn RecordLayout {
        self.layout
    }

    /// The record bytes of a live actor.
    ///
    /// Returns `None` if `id` is not live.
    pub fn slot(&self, id: ActorId) -> Option<&[u8]> {
        let range = self.slot_range(id)?;
        Some(&self.buffer[range])
    }

    /// Mutable record bytes of a live actor. See [`Table::slot`].
    pub fn slot_mut(&mut self, id: ActorId) -> Option<&mut [u8]> {
        let range = self.slot_range(id)?;
        Some(&mut self.buffer[range])
    }

    fn slot_range(&self, id: ActorId) -> Option<Range<usize>> {
        if !self.is_live(id) {
            return None;
        }
        let record_size = self.layout.size();
        let index = id - self.first_id;
        if record_size == 0 {
            return Some(0..0);
        }
        debug_assert!(index < self.capacity, "slot of actor {id} past capacity");
        if index >= self.capacity {
            return None;
        }
        let start = usize::try_from(index).ok()? * record_size;
        Some(start..start + record_size)
    }

    /// Grow the buffer so that it holds at least `live` records.
    fn reserve_slots(&mut self, live: u64) -> Result<(), TableError> {
        let record_size = self.layout.size();
        if record_size == 0 || live <= self.capacity {
            return Ok(());
        }

        let overflow = TableError::CapacityOverflow {
            slots: live,
            record_size,
        };
        let slots = live.checked_next_power_of_two().ok_or(overflow.clone())?;
        let bytes = usize::try_from(slots)
            .ok()
            .and_then(|s| s.checked_mul(record_size))
            .ok_or(overflow)?;

        tracing::debug!(
            target: "cosy.table",
            old_capacity = self.capacity,
            new_capacity = slots,
            bytes,
            "growing record buffer"
        );
        self.buffer.resize(bytes, 0);
        self.capacity = slots;
        Ok(())
    }

    fn exhausted(&self, requested: u64) -> TableError {
        let available = self.available_ids.size();
        tracing::debug!(target: "cosy.table", requested, %available, "actor ids exhausted");
        TableError::Exhausted {
            requested,
            available,
        }
    }
}

impl fmt::Debug for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("record_size", &self.layout.size())
            .field("first_id", &self.first_id)
            .field("num_actors", &self.num_actors)
            .field("capacity", &self.capacity)
            .field("available_ids", &format_args!("{}", self.available_ids))
            .finish_non_exhaustive()
    }
}
