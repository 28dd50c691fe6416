//! Property tests for schedule generation.
//!
//! These pin the plan shape over arbitrary task lists: interleaving,
//! priority ordering, exact start-time accumulation, and the tired-mood
//! duration scaling.

use proptest::prelude::*;

use studyflow_core::{Difficulty, Mood, Priority, StudyPlanner, Task};

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard])
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop::sample::select(vec![Priority::Low, Priority::Medium, Priority::High])
}

fn mood_strategy() -> impl Strategy<Value = Mood> {
    prop::sample::select(vec![Mood::Happy, Mood::Neutral, Mood::Tired])
}

/// Tasks named by input position so ordering properties can refer back
/// to where each task started out.
fn tasks_strategy() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec((difficulty_strategy(), priority_strategy()), 1..8).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (difficulty, priority))| Task {
                name: format!("task {i}"),
                subject: "Mathematics".to_string(),
                difficulty,
                priority,
                deadline: "2026-08-10".to_string(),
            })
            .collect()
    })
}

fn input_position(name: &str) -> usize {
    name.trim_start_matches("task ").parse().unwrap()
}

proptest! {
    #[test]
    fn plan_interleaves_sessions_and_breaks(tasks in tasks_strategy(), mood in mood_strategy()) {
        let blocks = StudyPlanner::new().generate_schedule(&tasks, mood).unwrap();
        prop_assert_eq!(blocks.len(), tasks.len() * 2 - 1);
        for (i, block) in blocks.iter().enumerate() {
            prop_assert_eq!(block.is_break, i % 2 == 1);
        }
        prop_assert!(!blocks.last().unwrap().is_break);
    }

    #[test]
    fn sessions_are_ordered_by_priority_then_mood(tasks in tasks_strategy(), mood in mood_strategy()) {
        let blocks = StudyPlanner::new().generate_schedule(&tasks, mood).unwrap();
        let sessions: Vec<_> = blocks.iter().filter(|b| !b.is_break).collect();

        for pair in sessions.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.priority.weight() >= b.priority.weight());
            if a.priority == b.priority {
                if mood == Mood::Tired {
                    prop_assert!(a.difficulty.weight() <= b.difficulty.weight());
                    if a.difficulty == b.difficulty {
                        prop_assert!(input_position(&a.name) < input_position(&b.name));
                    }
                } else {
                    // Stable sort: equal priorities keep input order.
                    prop_assert!(input_position(&a.name) < input_position(&b.name));
                }
            }
        }
    }

    #[test]
    fn start_times_accumulate_without_drift(tasks in tasks_strategy(), mood in mood_strategy()) {
        let blocks = StudyPlanner::new().generate_schedule(&tasks, mood).unwrap();
        let mut clock_minutes: u64 = 9 * 60;
        for block in &blocks {
            let expected = format!("{:02}:{:02}", (clock_minutes / 60) % 24, clock_minutes % 60);
            prop_assert_eq!(&block.start_time, &expected);
            clock_minutes += block.duration_minutes;
        }
    }

    #[test]
    fn generation_is_idempotent(tasks in tasks_strategy(), mood in mood_strategy()) {
        let planner = StudyPlanner::new();
        let first = planner.generate_schedule(&tasks, mood).unwrap();
        let second = planner.generate_schedule(&tasks, mood).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tired_scaling_is_exact(tasks in tasks_strategy()) {
        let blocks = StudyPlanner::new().generate_schedule(&tasks, Mood::Tired).unwrap();
        for session in blocks.iter().filter(|b| !b.is_break) {
            let expected = match session.difficulty {
                Difficulty::Hard => 63,
                Difficulty::Medium => 32,
                Difficulty::Easy => 21,
            };
            prop_assert_eq!(session.duration_minutes, expected);
        }
        for rest in blocks.iter().filter(|b| b.is_break) {
            prop_assert_eq!(rest.duration_minutes, 20);
        }
    }
}

#[test]
fn worked_example_high_hard_then_low_easy() {
    let tasks = vec![
        Task {
            name: "Revise calculus".to_string(),
            subject: "Mathematics".to_string(),
            difficulty: Difficulty::Hard,
            priority: Priority::High,
            deadline: "2026-08-10".to_string(),
        },
        Task {
            name: "Flashcards".to_string(),
            subject: "French".to_string(),
            difficulty: Difficulty::Easy,
            priority: Priority::Low,
            deadline: "2026-08-14".to_string(),
        },
    ];

    let blocks = StudyPlanner::new()
        .generate_schedule(&tasks, Mood::Neutral)
        .unwrap();

    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].name, "Revise calculus");
    assert_eq!(blocks[0].start_time, "09:00");
    assert_eq!(blocks[0].duration_minutes, 90);
    assert!(blocks[1].is_break);
    assert_eq!(blocks[1].duration_minutes, 15);
    assert_eq!(blocks[2].name, "Flashcards");
    assert_eq!(blocks[2].start_time, "10:45");
    assert_eq!(blocks[2].duration_minutes, 30);
}
