//! Mood-aware schedule generation.
//!
//! This module turns the user's task list into an ordered daily plan:
//! - Orders tasks by priority, with a difficulty tie-break when tired
//! - Computes session durations from difficulty, shortened when tired
//! - Interleaves rest breaks between sessions
//! - Assigns start times from a running clock beginning at the day start

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::task::{Difficulty, Mood, Priority, Task};

/// A single item on the generated plan: either a study session tied to a
/// task or a rest break. Identity is positional; the sequence order is
/// the execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledBlock {
    pub name: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub priority: Priority,
    pub deadline: String,
    /// Wall-clock start, `HH:MM`.
    pub start_time: String,
    pub duration_minutes: u64,
    pub is_break: bool,
    /// Set when a tired-mood session was shortened below the medium base.
    pub adjusted_for_mood: bool,
}

impl ScheduledBlock {
    fn study(task: &Task, start_time: String, duration_minutes: u64, adjusted: bool) -> Self {
        Self {
            name: task.name.clone(),
            subject: task.subject.clone(),
            difficulty: task.difficulty,
            priority: task.priority,
            deadline: task.deadline.clone(),
            start_time,
            duration_minutes,
            is_break: false,
            adjusted_for_mood: adjusted,
        }
    }

    fn rest(start_time: String, duration_minutes: u64) -> Self {
        Self {
            name: "Break Time".to_string(),
            subject: "Rest".to_string(),
            difficulty: Difficulty::Easy,
            priority: Priority::High,
            deadline: String::new(),
            start_time,
            duration_minutes,
            is_break: true,
            adjusted_for_mood: false,
        }
    }

    /// Block duration in seconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_secs(&self) -> u64 {
        self.duration_minutes.saturating_mul(60)
    }
}

/// Planner configuration.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// First session start, `HH:MM`.
    pub day_start: String,
    /// Base session minutes per difficulty.
    pub hard_minutes: u64,
    pub medium_minutes: u64,
    pub easy_minutes: u64,
    /// Break minutes between sessions.
    pub short_break_minutes: u64,
    /// Break minutes between sessions when tired.
    pub tired_break_minutes: u64,
    /// Percentage applied to session durations when tired.
    pub tired_scale_pct: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            day_start: "09:00".to_string(),
            hard_minutes: 90,
            medium_minutes: 45,
            easy_minutes: 30,
            short_break_minutes: 15,
            tired_break_minutes: 20,
            tired_scale_pct: 70,
        }
    }
}

/// Mood-aware study planner.
pub struct StudyPlanner {
    config: PlannerConfig,
}

impl StudyPlanner {
    /// Create a new planner with default config.
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Generate the daily plan for `tasks` under `mood`.
    ///
    /// Tasks are ordered by priority descending; when tired, ties break
    /// toward easier work first and every session is shortened. A rest
    /// break follows every session except the last. Start times advance
    /// on an exact running clock from the configured day start.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::EmptyTaskList`] when no tasks are given
    /// and [`ScheduleError::InvalidDayStart`] when the configured day
    /// start is not a valid clock time.
    pub fn generate_schedule(
        &self,
        tasks: &[Task],
        mood: Mood,
    ) -> Result<Vec<ScheduledBlock>, ScheduleError> {
        if tasks.is_empty() {
            return Err(ScheduleError::EmptyTaskList);
        }
        let mut clock = parse_clock(&self.config.day_start).ok_or_else(|| {
            ScheduleError::InvalidDayStart {
                value: self.config.day_start.clone(),
            }
        })?;

        let mut ordered = tasks.to_vec();
        sort_tasks(&mut ordered, mood);

        let break_minutes = if mood == Mood::Tired {
            self.config.tired_break_minutes
        } else {
            self.config.short_break_minutes
        };

        let mut blocks = Vec::with_capacity(ordered.len() * 2 - 1);
        for (index, task) in ordered.iter().enumerate() {
            let base = self.base_minutes(task.difficulty);
            let (minutes, adjusted) = if mood == Mood::Tired {
                let scaled = scale_round_half_up(base, self.config.tired_scale_pct);
                // The flag keys off the medium base, so a shortened hard
                // session that still runs past it is not marked.
                (scaled, scaled < self.config.medium_minutes)
            } else {
                (base, false)
            };

            blocks.push(ScheduledBlock::study(
                task,
                format_clock(clock),
                minutes,
                adjusted,
            ));
            clock = clock + Duration::minutes(minutes as i64);

            if index + 1 < ordered.len() {
                blocks.push(ScheduledBlock::rest(format_clock(clock), break_minutes));
                clock = clock + Duration::minutes(break_minutes as i64);
            }
        }

        Ok(blocks)
    }

    fn base_minutes(&self, difficulty: Difficulty) -> u64 {
        match difficulty {
            Difficulty::Hard => self.config.hard_minutes,
            Difficulty::Medium => self.config.medium_minutes,
            Difficulty::Easy => self.config.easy_minutes,
        }
    }
}

impl Default for StudyPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Totals for the plan overview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub study_sessions: usize,
    pub break_count: usize,
    pub total_minutes: u64,
}

/// Compute session/break counts and the total planned minutes.
pub fn summarize(blocks: &[ScheduledBlock]) -> PlanSummary {
    PlanSummary {
        study_sessions: blocks.iter().filter(|b| !b.is_break).count(),
        break_count: blocks.iter().filter(|b| b.is_break).count(),
        total_minutes: blocks.iter().map(|b| b.duration_minutes).sum(),
    }
}

/// Order tasks by priority descending; under a tired mood, ties resolve
/// toward lower difficulty first. The sort is stable, so equal keys keep
/// input order.
fn sort_tasks(tasks: &mut [Task], mood: Mood) {
    tasks.sort_by(|a, b| {
        match b.priority.weight().cmp(&a.priority.weight()) {
            std::cmp::Ordering::Equal if mood == Mood::Tired => {
                a.difficulty.weight().cmp(&b.difficulty.weight())
            }
            ordering => ordering,
        }
    });
}

/// `minutes * pct / 100`, rounded half-up in integer arithmetic.
fn scale_round_half_up(minutes: u64, pct: u64) -> u64 {
    (minutes.saturating_mul(pct) + 50) / 100
}

fn parse_clock(value: &str) -> Option<NaiveTime> {
    let (hour, minute) = value.split_once(':')?;
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

fn format_clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
