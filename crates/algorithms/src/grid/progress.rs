//! Side-channel progress and milestone reporting
//!
//! Events travel over an optional `crossbeam_channel` sender so callers
//! can drive progress bars or logs without the pipeline knowing about
//! any UI. Sends are best-effort; a dropped receiver never stalls or
//! fails a pass.

use crossbeam_channel::Sender;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Notification emitted by a partition pass
#[derive(Debug, Clone)]
pub enum PartitionEvent {
    /// Milestone text (dataset bounds, grid dimensions, final cell count)
    Message(String),
    /// Emitted after each cell. In a parallel pass events may arrive out
    /// of order, but `processed` itself is monotonic.
    Progress { processed: usize, total: usize },
}

/// Shared progress state for one pass; cheap to reference from worker
/// threads.
pub(crate) struct Reporter<'a> {
    events: Option<&'a Sender<PartitionEvent>>,
    processed: AtomicUsize,
    total: usize,
}

impl<'a> Reporter<'a> {
    pub fn new(events: Option<&'a Sender<PartitionEvent>>, total: usize) -> Self {
        Self {
            events,
            processed: AtomicUsize::new(0),
            total,
        }
    }

    pub fn message(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::info!("{}", text);
        if let Some(tx) = self.events {
            let _ = tx.send(PartitionEvent::Message(text));
        }
    }

    pub fn cell_done(&self) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(tx) = self.events {
            let _ = tx.send(PartitionEvent::Progress {
                processed,
                total: self.total,
            });
        }
    }
}
