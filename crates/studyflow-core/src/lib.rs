//! # Studyflow Core Library
//!
//! This library provides the core logic for Studyflow, a mood-aware study
//! planner: it turns a user's task list and self-reported mood into an
//! ordered daily schedule with interleaved breaks, then walks the user
//! through that schedule with a countdown session timer. The hosting UI
//! is a thin layer over this crate; nothing here touches a screen, a
//! speaker, or the network.
//!
//! ## Architecture
//!
//! - **Scheduler**: a pure planner that orders tasks by priority (easier
//!   work first on ties when tired), computes session durations from
//!   difficulty and mood, and interleaves rest breaks
//! - **Session Timer**: a countdown state machine that requires the
//!   caller to drive a one-second `tick()` while running
//! - **Storage**: TOML-based configuration and the key-value handoff
//!   channel that carries tasks, mood, and timer state across screens
//! - **Notify**: completion notices and the chime cue, delivered through
//!   a callback trait the host implements
//!
//! ## Key Components
//!
//! - [`StudyPlanner`]: schedule generation
//! - [`SessionTimer`]: countdown state machine
//! - [`PlanHandoff`]: typed facade over the injected key-value store
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod notify;
pub mod scheduler;
pub mod storage;
pub mod suggestions;
pub mod task;
pub mod timer;

pub use error::{ConfigError, CoreError, HandoffError, Result, ScheduleError, ValidationError};
pub use events::Event;
pub use notify::{dispatch, Chime, NoopNotifier, Notice, Notifier, Tone};
pub use scheduler::{summarize, PlanSummary, PlannerConfig, ScheduledBlock, StudyPlanner};
pub use storage::{Config, KeyValueStore, MemoryStore, PlanHandoff};
pub use task::{Difficulty, Mood, Priority, Task};
pub use timer::{SessionTimer, TimerState};
