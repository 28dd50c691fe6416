//! User-facing notices for walkthrough transitions.
//!
//! The session timer only returns events; this module maps those events
//! onto toast-style notices and the audible cue, and defines the
//! [`Notifier`] seam the host implements to render them. The core never
//! touches a speaker or a screen.

use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::scheduler::ScheduledBlock;
use crate::timer::{SessionTimer, TimerState};

/// One synthesized tone within a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: u32,
    /// Offset from the start of the cue.
    pub start_delay_ms: u64,
    pub duration_ms: u64,
}

/// An audible cue described as data; the host synthesizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chime {
    pub tones: Vec<Tone>,
}

impl Chime {
    /// Three short ascending tones played when a block finishes.
    pub fn ascending() -> Self {
        Self {
            tones: vec![
                Tone {
                    frequency_hz: 800,
                    start_delay_ms: 0,
                    duration_ms: 500,
                },
                Tone {
                    frequency_hz: 800,
                    start_delay_ms: 200,
                    duration_ms: 500,
                },
                Tone {
                    frequency_hz: 1000,
                    start_delay_ms: 400,
                    duration_ms: 500,
                },
            ],
        }
    }
}

/// A user-visible notice emitted at a walkthrough transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub chime: Option<Chime>,
}

impl Notice {
    /// Completion wording for a finished block, break vs session.
    pub fn block_complete(block: &ScheduledBlock) -> Self {
        if block.is_break {
            Self {
                title: "Break Complete!".to_string(),
                body: "Time to get back to studying!".to_string(),
                chime: Some(Chime::ascending()),
            }
        } else {
            Self {
                title: "Session Complete!".to_string(),
                body: "Great work! Time for a break.".to_string(),
                chime: Some(Chime::ascending()),
            }
        }
    }

    /// Announce the upcoming block after an advance.
    pub fn moving_on(next: &ScheduledBlock) -> Self {
        Self {
            title: "Moving to next activity".to_string(),
            body: format!("Starting: {}", next.name),
            chime: None,
        }
    }

    /// The whole plan has been walked through.
    pub fn plan_complete() -> Self {
        Self {
            title: "All activities complete!".to_string(),
            body: "Great work on completing your study plan!".to_string(),
            chime: None,
        }
    }
}

/// Callback seam for toasts and sound. Implementations decide rendering;
/// every method defaults to a no-op so hosts override only what they use.
pub trait Notifier {
    fn on_block_complete(&mut self, _notice: &Notice) {}
    fn on_advance(&mut self, _notice: &Notice) {}
    fn on_plan_complete(&mut self, _notice: &Notice) {}
}

/// Notifier that drops every notice.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {}

/// Fan a timer event out to the notifier hooks.
///
/// Countdown completion raises the block-complete notice (with the
/// chime), then either the plan-complete notice or the announcement of
/// the next block. A skip advances quietly without the completion cue.
pub fn dispatch(event: &Event, timer: &SessionTimer, notifier: &mut dyn Notifier) {
    match event {
        Event::BlockCompleted { block_index, .. } => {
            if let Some(block) = timer.blocks().get(*block_index) {
                notifier.on_block_complete(&Notice::block_complete(block));
            }
            if timer.state() == TimerState::Completed {
                notifier.on_plan_complete(&Notice::plan_complete());
            } else if let Some(next) = timer.current_block() {
                notifier.on_advance(&Notice::moving_on(next));
            }
        }
        Event::BlockSkipped { .. } => {
            if let Some(next) = timer.current_block() {
                notifier.on_advance(&Notice::moving_on(next));
            }
        }
        Event::PlanCompleted { .. } => {
            notifier.on_plan_complete(&Notice::plan_complete());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Difficulty, Priority};

    fn block(name: &str, is_break: bool) -> ScheduledBlock {
        ScheduledBlock {
            name: name.to_string(),
            subject: "Rest".to_string(),
            difficulty: Difficulty::Easy,
            priority: Priority::High,
            deadline: String::new(),
            start_time: "09:00".to_string(),
            duration_minutes: 1,
            is_break,
            adjusted_for_mood: false,
        }
    }

    #[derive(Default)]
    struct Recording {
        titles: Vec<String>,
    }

    impl Notifier for Recording {
        fn on_block_complete(&mut self, notice: &Notice) {
            self.titles.push(notice.title.clone());
        }
        fn on_advance(&mut self, notice: &Notice) {
            self.titles.push(notice.title.clone());
        }
        fn on_plan_complete(&mut self, notice: &Notice) {
            self.titles.push(notice.title.clone());
        }
    }

    #[test]
    fn chime_is_three_ascending_tones() {
        let chime = Chime::ascending();
        assert_eq!(chime.tones.len(), 3);
        assert!(chime.tones[2].frequency_hz > chime.tones[0].frequency_hz);
        assert!(chime.tones[1].start_delay_ms < chime.tones[2].start_delay_ms);
    }

    #[test]
    fn completion_wording_distinguishes_breaks_from_sessions() {
        let session = Notice::block_complete(&block("Read notes", false));
        assert_eq!(session.title, "Session Complete!");
        assert!(session.chime.is_some());

        let rest = Notice::block_complete(&block("Break Time", true));
        assert_eq!(rest.title, "Break Complete!");
        assert_eq!(rest.body, "Time to get back to studying!");
    }

    #[test]
    fn countdown_completion_raises_both_notices() {
        let mut timer = SessionTimer::new(vec![block("a", false), block("b", true)]);
        timer.start();
        let mut event = None;
        for _ in 0..60 {
            if let Some(e) = timer.tick() {
                event = Some(e);
                break;
            }
        }
        let mut recording = Recording::default();
        dispatch(&event.unwrap(), &timer, &mut recording);
        assert_eq!(
            recording.titles,
            ["Session Complete!", "Moving to next activity"]
        );
    }

    #[test]
    fn final_completion_announces_the_finished_plan() {
        let mut timer = SessionTimer::new(vec![block("only", false)]);
        timer.start();
        let mut event = None;
        for _ in 0..60 {
            if let Some(e) = timer.tick() {
                event = Some(e);
                break;
            }
        }
        let mut recording = Recording::default();
        dispatch(&event.unwrap(), &timer, &mut recording);
        assert_eq!(
            recording.titles,
            ["Session Complete!", "All activities complete!"]
        );
    }

    #[test]
    fn skip_advances_without_the_completion_cue() {
        let mut timer = SessionTimer::new(vec![block("a", false), block("b", true)]);
        let event = timer.skip().unwrap();
        let mut recording = Recording::default();
        dispatch(&event, &timer, &mut recording);
        assert_eq!(recording.titles, ["Moving to next activity"]);
    }
}
