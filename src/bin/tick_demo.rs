//! Desktop stopwatch over the std tick source.
//!
//! Starts a millisecond tick counter a few ticks short of `u32::MAX`, so
//! every run crosses the wrap point, then reports elapsed time from a pool
//! of counters started at staggered moments.
//!
//! # Build
//!
//! ```bash
//! RUST_LOG=debug cargo run --features demo --bin tick_demo
//! ```

use std::thread;
use std::time::Duration;

use tick_elapsed::hal::StdTickSource;
use tick_elapsed::{CounterPool, TickSource};

/// Number of counters started by the demo.
const COUNTERS: usize = 3;

/// Delay between starting counters and between reports.
const INTERVAL_MS: u64 = 40;

/// Ticks before the source wraps.
const WRAP_LEAD_TICKS: u32 = 60;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let source = StdTickSource::with_offset(u32::MAX - WRAP_LEAD_TICKS);
    log::info!(
        "tick source at {} Hz, starting at tick {}",
        source.tick_hz(),
        source.now_ticks()
    );

    let mut pool: CounterPool<_, COUNTERS> = CounterPool::new(source);
    let mut handles = Vec::with_capacity(COUNTERS);
    for _ in 0..COUNTERS {
        handles.push(pool.create()?);
        thread::sleep(Duration::from_millis(INTERVAL_MS));
    }

    // Pool is full; this is the allocation failure path.
    if let Err(e) = pool.create() {
        log::warn!("extra counter rejected: {}", e);
    }

    for round in 1..=3 {
        thread::sleep(Duration::from_millis(INTERVAL_MS));
        for handle in &handles {
            let elapsed = pool.get_elapsed_ms(Some(handle))?;
            println!(
                "round {} counter {}: {} ms (tick {})",
                round,
                handle.index(),
                elapsed,
                pool.source().now_ticks()
            );
        }
    }

    for handle in handles {
        pool.destroy(Some(handle));
    }
    log::info!("{} counters live after teardown", pool.live());

    Ok(())
}
