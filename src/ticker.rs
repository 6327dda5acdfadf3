//! Live debt ticker: advances a displayed "current debt" value at a fixed
//! wall-clock cadence
//!
//! This is a cosmetic simulated-realtime effect layered on top of the same
//! seed value the other components use. The increment is a fixed constant,
//! deliberately decoupled from the projection math, and the ticker never
//! reads projection parameters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use log::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::series::Series;

/// Added to the counter on every tick, in local currency units
pub const DEFAULT_TICK_INCREMENT: f64 = 100_000.0;

/// Wall-clock interval between ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Counter state owned by a running ticker
///
/// `current_value` is in local currency units (not billions). The state is
/// the deterministic core of the ticker; the worker thread only drives it
/// on a timer.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveCounterState {
    pub current_value: f64,
    pub increment_per_tick: f64,
    pub tick_interval: Duration,
}

impl LiveCounterState {
    pub fn new(seed: f64, increment_per_tick: f64, tick_interval: Duration) -> Self {
        Self {
            current_value: seed,
            increment_per_tick,
            tick_interval,
        }
    }

    /// Advance the counter by one tick
    pub fn tick(&mut self) {
        self.current_value += self.increment_per_tick;
    }
}

/// Handle to a running live ticker
///
/// The timer is an owned resource: it starts with the handle and is
/// guaranteed to stop when the handle is stopped or dropped, on every exit
/// path. `stop` is idempotent. A stopped ticker cannot resume; restarting
/// means constructing a fresh ticker re-seeded from the series store.
#[derive(Debug)]
pub struct LiveTicker {
    value_bits: Arc<AtomicU64>,
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl LiveTicker {
    /// Start ticking from a seed value in local currency units
    pub fn start(seed: f64, increment_per_tick: f64, tick_interval: Duration) -> Self {
        let value_bits = Arc::new(AtomicU64::new(seed.to_bits()));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let worker_bits = Arc::clone(&value_bits);
        let handle = std::thread::spawn(move || {
            let mut state = LiveCounterState::new(seed, increment_per_tick, tick_interval);
            loop {
                match stop_rx.recv_timeout(state.tick_interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        state.tick();
                        worker_bits.store(state.current_value.to_bits(), Ordering::Release);
                    }
                    // Stop requested, or the handle was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        info!(
            "live ticker started: seed={seed}, +{increment_per_tick} every {:?}",
            tick_interval
        );

        Self {
            value_bits,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Start with the default cadence, seeded from the latest snapshot of a
    /// series (total debt converted from billions to base currency units)
    pub fn from_series(series: &Series) -> EngineResult<Self> {
        let last = series.last().ok_or_else(|| {
            EngineError::PreconditionFailed("cannot seed ticker from an empty series".into())
        })?;
        Ok(Self::start(
            last.total_debt * 1e9,
            DEFAULT_TICK_INCREMENT,
            DEFAULT_TICK_INTERVAL,
        ))
    }

    /// Latest counter value published by the worker
    pub fn current_value(&self) -> f64 {
        f64::from_bits(self.value_bits.load(Ordering::Acquire))
    }

    /// Whether the worker is still ticking
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the timer; no further mutation occurs after this returns.
    /// Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            // Worker may have already exited; either way it is stopping
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("live ticker stopped at {}", self.current_value());
        }
    }
}

impl Drop for LiveTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::series::DebtRecord;

    #[test]
    fn test_counter_state_ticks_deterministically() {
        let mut state =
            LiveCounterState::new(11_000.0 * 1e9, DEFAULT_TICK_INCREMENT, DEFAULT_TICK_INTERVAL);
        state.tick();
        state.tick();
        state.tick();
        assert_relative_eq!(state.current_value, 11_000.0 * 1e9 + 300_000.0);
    }

    #[test]
    fn test_ticker_advances_and_stops() {
        let mut ticker = LiveTicker::start(0.0, 1.0, Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(60));
        assert!(ticker.current_value() > 0.0);

        ticker.stop();
        let stopped_at = ticker.current_value();
        std::thread::sleep(Duration::from_millis(30));
        // No mutation after stop
        assert_relative_eq!(ticker.current_value(), stopped_at);
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ticker = LiveTicker::start(0.0, 1.0, Duration::from_millis(5));
        ticker.stop();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_seeds_from_latest_snapshot() {
        let series = Series::from_records(vec![
            DebtRecord::synthesized(2000, 346.88),
            DebtRecord::synthesized(2025, 11_000.0),
        ])
        .unwrap();

        let mut ticker = LiveTicker::from_series(&series).unwrap();
        // Seed is the latest total debt in base currency units; ticks only
        // ever add to it
        assert!(ticker.current_value() >= 11_000.0 * 1e9);
        ticker.stop();
    }

    #[test]
    fn test_empty_series_cannot_seed() {
        assert!(matches!(
            LiveTicker::from_series(&Series::new()),
            Err(EngineError::PreconditionFailed(_))
        ));
    }

    #[test]
    fn test_restart_reseeds_from_store() {
        let mut series = Series::from_records(vec![DebtRecord::synthesized(2025, 100.0)]).unwrap();

        let mut first = LiveTicker::from_series(&series).unwrap();
        first.stop();

        // Store advanced while idle; a new activation reflects it
        series.insert(DebtRecord::synthesized(2026, 200.0));
        let mut second = LiveTicker::from_series(&series).unwrap();
        assert!(second.current_value() >= 200.0 * 1e9);
        second.stop();
    }
}
