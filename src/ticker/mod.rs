//! Cosmetic block counter for the status widget.
//!
//! The displayed number only approximates the chain head: it advances once per
//! interval on its own and snaps to the latest authoritative value whenever a
//! fresh network status arrives. It never fetches anything itself.

use std::time::Duration;

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};

pub const BLOCK_INTERVAL: Duration = Duration::from_millis(1500);

pub fn next_tick(current: u64) -> u64 {
    current.saturating_add(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTicker {
    current: u64,
}

impl BlockTicker {
    pub fn new(initial: u64) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn tick(&mut self) -> u64 {
        self.current = next_tick(self.current);
        self.current
    }

    /// Adopts an authoritative block number, even if it is behind the
    /// simulated one.
    pub fn reset(&mut self, authoritative: u64) {
        self.current = authoritative;
    }
}

/// Handle to a running ticker task. Dropping it stops the task.
#[derive(Debug)]
pub struct TickerHandle {
    resets: mpsc::UnboundedSender<u64>,
    display: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    pub fn current(&self) -> u64 {
        *self.display.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.display.clone()
    }

    pub fn reset(&self, authoritative: u64) {
        // Only fails once the task is gone, and then nobody is watching.
        let _ = self.resets.send(authoritative);
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Starts a ticker at `initial`. The first increment lands one full `period`
/// after start; late ticks are delayed rather than replayed in a burst.
pub fn spawn_ticker(initial: u64, period: Duration) -> TickerHandle {
    let (resets, mut reset_rx) = mpsc::unbounded_channel::<u64>();
    let (display_tx, display) = watch::channel(initial);

    let task = tokio::spawn(async move {
        let mut ticker = BlockTicker::new(initial);
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    ticker.tick();
                }
                reset = reset_rx.recv() => match reset {
                    Some(block) => ticker.reset(block),
                    None => break,
                },
            }

            if display_tx.send(ticker.current()).is_err() {
                break;
            }
        }
    });

    TickerHandle {
        resets,
        display,
        task,
    }
}

/// Groups digits in threes with `,`, e.g. `40000000` → `40,000,000`.
pub fn format_block_number(block: u64) -> String {
    let digits = block.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_tick_increments() {
        assert_eq!(next_tick(0), 1);
        assert_eq!(next_tick(2_500_000), 2_500_001);
        assert_eq!(next_tick(u64::MAX), u64::MAX);
    }

    #[test]
    fn ticker_counts_and_resets() {
        let mut ticker = BlockTicker::new(100);
        assert_eq!(ticker.tick(), 101);
        assert_eq!(ticker.tick(), 102);

        ticker.reset(90);
        assert_eq!(ticker.current(), 90);
        assert_eq!(ticker.tick(), 91);
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_block_number(0), "0");
        assert_eq!(format_block_number(999), "999");
        assert_eq!(format_block_number(1000), "1,000");
        assert_eq!(format_block_number(2_500_000), "2,500,000");
        assert_eq!(format_block_number(40_000_000), "40,000,000");
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_ticker_advances_once_per_period() {
        let handle = spawn_ticker(100, BLOCK_INTERVAL);
        let mut display = handle.subscribe();
        let started = Instant::now();

        display.changed().await.unwrap();
        assert_eq!(*display.borrow_and_update(), 101);
        assert_eq!(started.elapsed(), BLOCK_INTERVAL);

        display.changed().await.unwrap();
        assert_eq!(*display.borrow_and_update(), 102);
        assert_eq!(handle.current(), 102);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_takes_the_authoritative_value() {
        let handle = spawn_ticker(100, BLOCK_INTERVAL);
        let mut display = handle.subscribe();

        handle.reset(5_000);
        display.changed().await.unwrap();
        assert_eq!(*display.borrow_and_update(), 5_000);

        display.changed().await.unwrap();
        assert_eq!(*display.borrow_and_update(), 5_001);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let handle = spawn_ticker(1, BLOCK_INTERVAL);
        let mut display = handle.subscribe();
        drop(handle);

        // The sender lives in the aborted task, so the channel closes.
        assert!(display.changed().await.is_err());
    }
}
