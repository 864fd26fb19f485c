//! Opaque record id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Issues string ids that are unique for the process lifetime and
/// non-decreasing with creation order.
///
/// Clock-only ids collide when two records are created within the same
/// millisecond, so a process-wide sequence number is appended: the call rate
/// never matters.
#[derive(Debug, Default)]
pub struct IdGenerator {
    seq: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            seq: AtomicU64::new(0),
        }
    }

    /// Next id: millisecond timestamp plus the sequence number.
    pub fn next_id(&self) -> String {
        let millis = Utc::now().timestamp_millis();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        format!("{millis}-{seq:06}")
    }
}
