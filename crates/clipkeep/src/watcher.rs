//! The background clipboard watcher.
//!
//! One tick: sample the clipboard source, run the two-stage duplicate
//! check (in-memory last-seen, then store lookback inside the engine's
//! record path), persist genuinely new text, and notify subscribers.
//!
//! Every tick is an isolated unit of work. Clipboard read failures are
//! transient (logged at warn, next tick proceeds); store failures are loud
//! (logged at error) but still do not kill the loop - a history tool that
//! dies on a disk hiccup loses more than one that keeps sampling.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, warn};

use clipkeep_clipboard::ClipboardSource;
use clipkeep_core::ChangeTracker;
use clipkeep_store::Store;

use crate::engine::{HistoryEngine, RecordOutcome};

/// The sampling loop over a clipboard source.
///
/// Owns the process-local [`ChangeTracker`]: single-writer state that is
/// reset only when the process restarts.
pub struct Watcher<S: Store, C: ClipboardSource> {
    engine: Arc<HistoryEngine<S>>,
    source: C,
    tracker: ChangeTracker,
}

impl<S: Store, C: ClipboardSource> Watcher<S, C> {
    /// Create a watcher feeding the given engine from the given source.
    pub fn new(engine: Arc<HistoryEngine<S>>, source: C) -> Self {
        Self {
            engine,
            source,
            tracker: ChangeTracker::new(),
        }
    }

    /// Run one sampling tick.
    ///
    /// Public so tests can drive the cadence deterministically. Never
    /// returns an error: all failures are contained here.
    pub async fn tick(&mut self) {
        let sample = match self.source.read_text() {
            Ok(Some(text)) => text,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "clipboard read failed, skipping tick");
                return;
            }
        };

        // Stage one: same content as a previous tick is not re-processed.
        let Some(text) = self.tracker.observe(&sample) else {
            return;
        };

        // Stage two happens inside record: text already persisted by a
        // foreground save is not inserted again.
        match self.engine.record(&text).await {
            Ok(RecordOutcome::Recorded(id)) => {
                debug!(%id, "persisted clipboard change");
                self.engine.notify_change(&text);
            }
            Ok(RecordOutcome::DuplicateOfLatest) => {
                debug!("clipboard text already persisted by another path");
            }
            Ok(RecordOutcome::Empty) => {}
            Err(e) => {
                error!(error = %e, "failed to persist clipboard change");
            }
        }
    }
}

impl<S, C> Watcher<S, C>
where
    S: Store + 'static,
    C: ClipboardSource + 'static,
{
    /// Start the sampling loop on the current runtime.
    ///
    /// Ticks at the given cadence until the handle is aborted. A slow tick
    /// delays the next one rather than bursting to catch up.
    pub fn spawn(mut self, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                self.tick().await;
            }
        })
    }
}
