use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerState;

/// Every state change in the session timer produces an Event.
/// The presentation layer polls for events; the notify module maps the
/// completion events onto user-facing notices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    BlockStarted {
        block_index: usize,
        is_break: bool,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// The running block counted down to zero.
    BlockCompleted {
        block_index: usize,
        is_break: bool,
        at: DateTime<Utc>,
    },
    /// The user skipped the active block.
    BlockSkipped {
        from_block: usize,
        to_block: usize,
        at: DateTime<Utc>,
    },
    /// Every block in the plan has been completed or skipped.
    PlanCompleted {
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        block_index: usize,
        block_name: String,
        is_break: bool,
        remaining_secs: u64,
        total_secs: u64,
        plan_progress_pct: f64,
        at: DateTime<Utc>,
    },
}
