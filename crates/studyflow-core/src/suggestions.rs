//! Mood-driven coaching copy.
//!
//! Small pure helpers the host renders alongside the plan. The wording
//! is part of the product surface, so tests pin the routing rather than
//! the full strings.

use crate::task::Mood;

/// Encouragement shown at the top of the plan screen.
pub fn motivational_message(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => {
            "You're in a great mood! Let's make the most of this positive \
             energy and achieve amazing things today!"
        }
        Mood::Neutral => {
            "Consistency is key to success. One step at a time, you're \
             building the future you want. Keep going!"
        }
        Mood::Tired => {
            "It's okay to feel tired. Remember, even small progress is \
             still progress. Be kind to yourself today."
        }
    }
}

/// Planning advice from mood and how loaded the task list already is.
///
/// A heavy list reads as overwhelm regardless of mood.
pub fn daily_suggestion(mood: Mood, task_count: usize) -> &'static str {
    const HEAVY_LOAD: usize = 5;
    if mood == Mood::Tired || task_count >= HEAVY_LOAD {
        return "You seem overwhelmed. Let's prioritize and schedule lighter \
                tasks for today. Consider delegating or postponing non-urgent \
                items.";
    }
    match mood {
        Mood::Happy => {
            "Great energy! Consider tackling your high-priority tasks first. \
             You're in the perfect mindset for challenging work."
        }
        _ => {
            "Steady pace! Mix challenging and easier tasks. Don't forget to \
             take breaks every 45 minutes."
        }
    }
}

/// Shown on break blocks in the timeline.
pub fn break_tip() -> &'static str {
    "Take a proper break! Stretch, hydrate, or take a short walk."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_follows_mood() {
        assert!(motivational_message(Mood::Happy).contains("great mood"));
        assert!(motivational_message(Mood::Neutral).contains("Consistency"));
        assert!(motivational_message(Mood::Tired).contains("okay to feel tired"));
    }

    #[test]
    fn tired_or_heavy_load_reads_as_overwhelm() {
        assert!(daily_suggestion(Mood::Tired, 0).contains("overwhelmed"));
        assert!(daily_suggestion(Mood::Happy, 5).contains("overwhelmed"));
        assert!(daily_suggestion(Mood::Neutral, 7).contains("overwhelmed"));
    }

    #[test]
    fn light_load_suggestions_follow_mood() {
        assert!(daily_suggestion(Mood::Happy, 2).contains("Great energy"));
        assert!(daily_suggestion(Mood::Neutral, 4).contains("Steady pace"));
    }
}
