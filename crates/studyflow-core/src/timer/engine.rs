//! Session timer implementation.
//!
//! The session timer is a countdown state machine over the generated
//! plan. It does not use internal threads or wall-clock reads - the
//! caller owns the one-second interval and calls `tick()` once per
//! second while the timer is running. The interval must be stopped
//! whenever the timer leaves `Running`; stray ticks in any other state
//! are ignored.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> ... -> Completed
//! ```
//!
//! Completing or skipping a block advances the cursor and parks the
//! timer in `Idle` on the next block, waiting for an explicit start.
//! `Completed` is terminal.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::scheduler::ScheduledBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Countdown state machine driving one scheduled block at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimer {
    blocks: Vec<ScheduledBlock>,
    state: TimerState,
    block_index: usize,
    /// Remaining time in seconds for the current block.
    remaining_secs: u64,
}

impl SessionTimer {
    /// Create a new timer bound to the first block of the plan.
    pub fn new(blocks: Vec<ScheduledBlock>) -> Self {
        let remaining_secs = blocks.first().map(ScheduledBlock::duration_secs).unwrap_or(0);
        let state = if blocks.is_empty() {
            TimerState::Completed
        } else {
            TimerState::Idle
        };
        Self {
            blocks,
            state,
            block_index: 0,
            remaining_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn block_index(&self) -> usize {
        self.block_index
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn current_block(&self) -> Option<&ScheduledBlock> {
        self.blocks.get(self.block_index)
    }

    pub fn blocks(&self) -> &[ScheduledBlock] {
        &self.blocks
    }

    /// Full duration of the current block in seconds.
    pub fn total_secs(&self) -> u64 {
        self.current_block().map(ScheduledBlock::duration_secs).unwrap_or(0)
    }

    /// 0.0 .. 1.0 progress within the current block.
    pub fn block_progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / total as f64)
    }

    /// 0.0 .. 100.0 progress across the entire plan.
    pub fn plan_progress_pct(&self) -> f64 {
        let total: u64 = self.blocks.iter().map(ScheduledBlock::duration_secs).sum();
        if total == 0 {
            return 0.0;
        }
        let completed: u64 = self
            .blocks
            .iter()
            .take(self.block_index)
            .map(ScheduledBlock::duration_secs)
            .sum();
        let current_elapsed = self.total_secs().saturating_sub(self.remaining_secs);
        ((completed + current_elapsed) as f64 / total as f64 * 100.0).min(100.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let block = self.current_block();
        Event::StateSnapshot {
            state: self.state,
            block_index: self.block_index,
            block_name: block.map(|b| b.name.clone()).unwrap_or_default(),
            is_break: block.map(|b| b.is_break).unwrap_or(false),
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            plan_progress_pct: self.plan_progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the current block, or resume it when paused.
    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle => {
                let block = self.current_block()?;
                let event = Event::BlockStarted {
                    block_index: self.block_index,
                    is_break: block.is_break,
                    duration_secs: block.duration_secs(),
                    at: Utc::now(),
                };
                self.state = TimerState::Running;
                Some(event)
            }
            TimerState::Paused => {
                self.state = TimerState::Running;
                Some(Event::TimerResumed {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            TimerState::Running | TimerState::Completed => None,
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    pub fn resume(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Paused => self.start(),
            _ => None,
        }
    }

    /// Advance one second of countdown. Returns
    /// `Some(Event::BlockCompleted)` when the running block reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        let completed = self.current_block()?;
        let block_index = self.block_index;
        let is_break = completed.is_break;

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        self.advance();
        Some(Event::BlockCompleted {
            block_index,
            is_break,
            at: Utc::now(),
        })
    }

    /// Skip the active block without finishing its countdown.
    pub fn skip(&mut self) -> Option<Event> {
        if self.state == TimerState::Completed {
            return None;
        }
        let from_block = self.block_index;
        self.advance();
        let at = Utc::now();
        if self.state == TimerState::Completed {
            Some(Event::PlanCompleted { at })
        } else {
            Some(Event::BlockSkipped {
                from_block,
                to_block: self.block_index,
                at,
            })
        }
    }

    /// Rewind the walkthrough to the first block.
    pub fn reset(&mut self) -> Option<Event> {
        if self.blocks.is_empty() {
            return None;
        }
        self.state = TimerState::Idle;
        self.block_index = 0;
        self.remaining_secs = self.blocks.first().map(ScheduledBlock::duration_secs).unwrap_or(0);
        Some(Event::TimerReset { at: Utc::now() })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn advance(&mut self) {
        self.block_index += 1;
        match self.blocks.get(self.block_index) {
            Some(next) => {
                // Await an explicit start on the next block.
                self.state = TimerState::Idle;
                self.remaining_secs = next.duration_secs();
            }
            None => {
                self.state = TimerState::Completed;
                self.remaining_secs = 0;
            }
        }
    }
}
