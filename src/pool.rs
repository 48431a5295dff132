//! Fixed-capacity counter storage with handle-based access.
//!
//! [`CounterPool`] is the allocator for [`TickCounter`]s on targets without
//! a heap: `N` slots are reserved up front and [`create`](CounterPool::create)
//! fails with [`CounterError::AllocationFailure`] once every slot is in use.
//! Callers receive a move-only [`CounterHandle`]; passing it to
//! [`destroy`](CounterPool::destroy) consumes it, so a released handle cannot
//! be used again.
//!
//! # Example
//!
//! ```rust
//! use tick_elapsed::{CounterError, CounterPool};
//! use tick_elapsed::hal::MockTickSource;
//!
//! let source = MockTickSource::new(1000);
//! let mut pool: CounterPool<_, 1> = CounterPool::new(&source);
//!
//! let handle = pool.create().unwrap();
//! assert_eq!(pool.create().unwrap_err(), CounterError::AllocationFailure);
//!
//! source.advance(250);
//! assert_eq!(pool.get_elapsed_ms(Some(&handle)), Ok(250));
//!
//! pool.destroy(Some(handle));
//! assert_eq!(pool.live(), 0);
//! ```

use core::sync::atomic::{AtomicU32, Ordering};

use heapless::Vec;
use log::{debug, error, trace};

use crate::config::{short_string, ShortString, TickConfig};
use crate::counter::TickCounter;
use crate::error::CounterError;
use crate::traits::TickSource;

/// Opaque reference to a counter stored in a [`CounterPool`].
///
/// Not `Clone`: the handle is owned by whoever created the counter and is
/// consumed by [`CounterPool::destroy`].
#[derive(Debug, PartialEq, Eq)]
pub struct CounterHandle {
    pool_id: u32,
    index: usize,
    generation: u32,
}

/// Source of pool identities; every pool gets a distinct id.
static NEXT_POOL_ID: AtomicU32 = AtomicU32::new(0);

impl CounterHandle {
    /// Slot index inside the pool.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug)]
struct Slot {
    counter: Option<TickCounter>,
    generation: u32,
}

/// Pool of up to `N` tick counters sharing one [`TickSource`].
///
/// The source is read once per successful [`create`](Self::create) and once
/// per successful elapsed-time query; failed calls never read it.
///
/// Handles carry the id of the pool that issued them and are rejected by
/// any other pool.
#[derive(Debug)]
pub struct CounterPool<S: TickSource, const N: usize> {
    id: u32,
    label: ShortString,
    source: S,
    slots: Vec<Slot, N>,
    live: usize,
}

impl<S: TickSource, const N: usize> CounterPool<S, N> {
    /// Creates an empty pool reading ticks from `source`.
    pub fn new(source: S) -> Self {
        Self::with_label(source, "tick")
    }

    /// Creates an empty pool labelled from `config` for diagnostics.
    pub fn from_config(source: S, config: &TickConfig) -> Self {
        Self::with_label(source, config.label.as_str())
    }

    fn with_label(source: S, label: &str) -> Self {
        Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            label: short_string(label),
            source,
            slots: Vec::new(),
            live: 0,
        }
    }

    /// Name used in this pool's log messages.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// The tick source counters are measured against.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Maximum number of simultaneously live counters.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of live counters.
    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    /// Returns true if [`create`](Self::create) would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.live == N
    }

    /// Allocates a counter and captures the current tick as its origin.
    ///
    /// # Errors
    ///
    /// [`CounterError::AllocationFailure`] if every slot is occupied. The
    /// tick source is not read in that case.
    pub fn create(&mut self) -> Result<CounterHandle, CounterError> {
        let index = match self.free_slot() {
            Some(index) => index,
            None => {
                error!(
                    "{}: failed creating tick counter: all {} slots in use",
                    self.label, N
                );
                return Err(CounterError::AllocationFailure);
            }
        };

        let counter = TickCounter::start(&self.source);
        let slot = &mut self.slots[index];
        slot.counter = Some(counter);
        self.live += 1;

        debug!(
            "{}: counter {} created at tick {}",
            self.label,
            index,
            counter.origin_tick()
        );

        Ok(CounterHandle {
            pool_id: self.id,
            index,
            generation: slot.generation,
        })
    }

    /// Releases the counter behind `handle`.
    ///
    /// `None` is a no-op. A handle that does not refer to a live counter in
    /// this pool is ignored.
    pub fn destroy(&mut self, handle: Option<CounterHandle>) {
        let Some(handle) = handle else {
            return;
        };

        let Some(slot) = self.slot_mut(&handle) else {
            trace!(
                "{}: counter {} not live in this pool, ignored",
                self.label,
                handle.index
            );
            return;
        };

        slot.counter = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.live -= 1;

        debug!("{}: counter {} destroyed", self.label, handle.index);
    }

    /// Returns the counter behind `handle`, if it is live in this pool.
    pub fn counter(&self, handle: &CounterHandle) -> Option<&TickCounter> {
        if handle.pool_id != self.id {
            return None;
        }
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.counter.as_ref())
    }

    /// Milliseconds elapsed since the counter behind `handle` was created.
    ///
    /// Reads the tick source once.
    ///
    /// # Errors
    ///
    /// [`CounterError::InvalidArgument`] if `handle` is `None` or does not
    /// refer to a live counter in this pool.
    pub fn get_elapsed_ms(&self, handle: Option<&CounterHandle>) -> Result<u64, CounterError> {
        let counter = self.resolve(handle)?;
        Ok(counter.elapsed_ms(&self.source))
    }

    /// Writes the elapsed milliseconds for `handle` into `out`.
    ///
    /// Output-slot form of [`get_elapsed_ms`](Self::get_elapsed_ms) for
    /// callers that keep the result in caller-owned storage.
    ///
    /// # Errors
    ///
    /// [`CounterError::InvalidArgument`] if either argument is absent or the
    /// handle is not live. `out` is left untouched and the tick source is not
    /// read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tick_elapsed::{CounterError, CounterPool};
    /// use tick_elapsed::hal::MockTickSource;
    ///
    /// let source = MockTickSource::new(100);
    /// let mut pool: CounterPool<_, 2> = CounterPool::new(&source);
    /// let handle = pool.create().unwrap();
    ///
    /// let mut elapsed = 0;
    /// source.advance(5);
    /// pool.read_elapsed_into(Some(&handle), Some(&mut elapsed)).unwrap();
    /// assert_eq!(elapsed, 50);
    ///
    /// assert_eq!(
    ///     pool.read_elapsed_into(Some(&handle), None),
    ///     Err(CounterError::InvalidArgument)
    /// );
    /// ```
    pub fn read_elapsed_into(
        &self,
        handle: Option<&CounterHandle>,
        out: Option<&mut u64>,
    ) -> Result<(), CounterError> {
        let Some(out) = out else {
            error!(
                "{}: tick counter failed: invalid arguments (no output slot)",
                self.label
            );
            return Err(CounterError::InvalidArgument);
        };

        *out = self.get_elapsed_ms(handle)?;
        Ok(())
    }

    fn resolve(&self, handle: Option<&CounterHandle>) -> Result<&TickCounter, CounterError> {
        let Some(handle) = handle else {
            error!(
                "{}: tick counter failed: invalid arguments (no handle)",
                self.label
            );
            return Err(CounterError::InvalidArgument);
        };

        self.counter(handle).ok_or_else(|| {
            error!(
                "{}: tick counter failed: invalid arguments (handle {} is not live)",
                self.label, handle.index
            );
            CounterError::InvalidArgument
        })
    }

    fn slot_mut(&mut self, handle: &CounterHandle) -> Option<&mut Slot> {
        if handle.pool_id != self.id {
            return None;
        }
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation && slot.counter.is_some())
    }

    fn free_slot(&mut self) -> Option<usize> {
        if let Some(index) = self.slots.iter().position(|slot| slot.counter.is_none()) {
            return Some(index);
        }

        let index = self.slots.len();
        self.slots
            .push(Slot {
                counter: None,
                generation: 0,
            })
            .ok()?;
        Some(index)
    }
}
