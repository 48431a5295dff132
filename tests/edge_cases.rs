//! Edge case and boundary condition tests for tick counters

use tick_elapsed::{
    hal::{FallbackTickSource, MockTickSource},
    ticks_between, CounterError, CounterPool, TickConfig, TickCounter, TickSource,
};

// ============================================================================
// Boundary Value Tests
// ============================================================================

#[test]
fn zero_elapsed_right_after_create() {
    let source = MockTickSource::new(100);
    source.set(u32::MAX);
    let counter = TickCounter::start(&source);

    assert_eq!(counter.elapsed_ticks(&source), 0);
    assert_eq!(counter.elapsed_ms(&source), 0);
}

#[test]
fn origin_at_max_wraps_to_zero() {
    let source = MockTickSource::new(1000);
    source.set(u32::MAX);
    let counter = TickCounter::start(&source);

    source.advance(1);
    assert_eq!(source.peek(), 0);
    assert_eq!(counter.elapsed_ms(&source), 1);
}

#[test]
fn largest_representable_interval() {
    let source = MockTickSource::new(1000);
    source.set(12_345);
    let counter = TickCounter::start(&source);

    source.advance(u32::MAX);
    assert_eq!(counter.elapsed_ticks(&source), u32::MAX);
    assert_eq!(counter.elapsed_ms(&source), u32::MAX as u64);
}

#[test]
fn interval_of_exactly_two_pow_32_aliases_to_zero() {
    let source = MockTickSource::new(1000);
    let counter = TickCounter::start(&source);

    source.advance(u32::MAX);
    source.advance(1);
    assert_eq!(counter.elapsed_ms(&source), 0);
}

#[test]
fn high_frequency_tick_keeps_precision() {
    // 32.768 kHz RTC: 1500 ticks = 45.776 ms
    let source = MockTickSource::new(32_768);
    let counter = TickCounter::start(&source);

    source.advance(1500);
    assert_eq!(counter.elapsed_ms(&source), 45);
}

#[test]
fn one_hz_tick() {
    let source = MockTickSource::new(1);
    source.set(u32::MAX - 1);
    let counter = TickCounter::start(&source);

    source.advance(3);
    assert_eq!(counter.elapsed_ms(&source), 3000);
}

#[test]
fn ticks_between_is_forward_distance() {
    for origin in [0, 1, 333, u32::MAX / 2, u32::MAX - 1300, u32::MAX] {
        for delta in [0, 1, 1200, u32::MAX / 3, u32::MAX] {
            assert_eq!(ticks_between(origin, origin.wrapping_add(delta)), delta);
        }
    }
}

// ============================================================================
// Pool Behavior
// ============================================================================

#[test]
fn counters_in_pool_measure_independently() {
    let source = MockTickSource::new(100);
    let mut pool: CounterPool<_, 3> = CounterPool::new(&source);

    let a = pool.create().unwrap();
    source.advance(10);
    let b = pool.create().unwrap();
    source.advance(10);
    let c = pool.create().unwrap();
    source.advance(10);

    assert_eq!(pool.get_elapsed_ms(Some(&a)), Ok(300));
    assert_eq!(pool.get_elapsed_ms(Some(&b)), Ok(200));
    assert_eq!(pool.get_elapsed_ms(Some(&c)), Ok(100));

    pool.destroy(Some(b));
    assert_eq!(pool.live(), 2);
    assert_eq!(pool.get_elapsed_ms(Some(&a)), Ok(300));
    assert_eq!(pool.get_elapsed_ms(Some(&c)), Ok(100));
}

#[test]
fn freed_slot_gets_new_origin() {
    let source = MockTickSource::new(100);
    let mut pool: CounterPool<_, 1> = CounterPool::new(&source);

    let first = pool.create().unwrap();
    source.advance(500);
    pool.destroy(Some(first));

    let second = pool.create().unwrap();
    source.advance(1);
    assert_eq!(pool.get_elapsed_ms(Some(&second)), Ok(10));
}

#[test]
fn handle_from_another_pool_is_rejected() {
    let source = MockTickSource::new(100);
    let mut ours: CounterPool<_, 1> = CounterPool::new(&source);
    let mut theirs: CounterPool<_, 1> = CounterPool::new(&source);

    // Same slot index and generation in both pools
    let own = ours.create().unwrap();
    let foreign = theirs.create().unwrap();
    assert_eq!(own.index(), foreign.index());

    assert_eq!(
        ours.get_elapsed_ms(Some(&foreign)),
        Err(CounterError::InvalidArgument)
    );
    assert!(ours.counter(&foreign).is_none());

    ours.destroy(Some(foreign));
    assert_eq!(ours.live(), 1);
    assert_eq!(theirs.live(), 1);

    source.advance(3);
    assert_eq!(ours.get_elapsed_ms(Some(&own)), Ok(30));
}

#[test]
fn capacity_reports_const_parameter() {
    let source = MockTickSource::new(100);
    let pool: CounterPool<_, 8> = CounterPool::new(&source);
    assert_eq!(pool.capacity(), 8);
    assert_eq!(pool.live(), 0);
}

// ============================================================================
// Fallback Source
// ============================================================================

#[test]
fn fallback_source_is_deterministic() {
    let source = FallbackTickSource::new();
    let mut pool: CounterPool<_, 1> = CounterPool::new(&source);
    let handle = pool.create().unwrap();

    // 100 ticks per read at 100 Hz
    assert_eq!(pool.get_elapsed_ms(Some(&handle)), Ok(1000));
    assert_eq!(pool.get_elapsed_ms(Some(&handle)), Ok(2000));
}

#[test]
fn fallback_source_from_config() {
    let config = TickConfig::default().with_tick_hz(1000);
    let source = FallbackTickSource::from_config(&config);
    let counter = TickCounter::start(&source);

    assert_eq!(source.tick_hz().get(), 1000);
    assert_eq!(counter.elapsed_ms(&source), 100);
}

#[test]
fn mock_source_from_config() {
    let config = TickConfig::default().with_tick_hz(250);
    let source = MockTickSource::from_config(&config);
    let counter = TickCounter::start(&source);

    source.advance(250);
    assert_eq!(counter.elapsed_ms(&source), 1000);
}
