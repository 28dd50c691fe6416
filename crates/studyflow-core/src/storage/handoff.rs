//! Cross-screen handoff channel.
//!
//! The task list and mood are entered on one screen and consumed on the
//! next; they cross that boundary through an injected key-value store
//! with string-serialized values. The session timer can park its state
//! in the same channel so a walkthrough survives the screen change. The
//! concrete store is the host's concern; the core only sees the trait.

use std::collections::HashMap;

use crate::error::{HandoffError, Result, ValidationError};
use crate::task::{Mood, Task};
use crate::timer::SessionTimer;

const TASKS_KEY: &str = "study_tasks";
const MOOD_KEY: &str = "user_mood";
const TIMER_KEY: &str = "session_timer";

/// String-keyed store the host injects (browser storage, a file, a map).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and single-process hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Typed facade over the handoff store.
pub struct PlanHandoff<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PlanHandoff<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Hand the underlying store back, e.g. to cross a screen boundary.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Validate and stash the task list.
    ///
    /// # Errors
    ///
    /// Rejects an empty list and any task with missing required fields;
    /// nothing is written on failure.
    pub fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        if tasks.is_empty() {
            return Err(ValidationError::EmptyCollection("tasks".to_string()).into());
        }
        for task in tasks {
            task.validate()?;
        }
        let json = serde_json::to_string(tasks)?;
        self.store.set(TASKS_KEY, &json);
        Ok(())
    }

    /// Load the task list stashed by the entry screen.
    pub fn load_tasks(&self) -> Result<Vec<Task>, HandoffError> {
        let raw = self.store.get(TASKS_KEY).ok_or_else(|| HandoffError::Missing {
            key: TASKS_KEY.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|source| HandoffError::Decode {
            key: TASKS_KEY.to_string(),
            source,
        })
    }

    pub fn save_mood(&mut self, mood: Mood) -> Result<()> {
        let json = serde_json::to_string(&mood)?;
        self.store.set(MOOD_KEY, &json);
        Ok(())
    }

    /// Load the stashed mood; an absent value reads as neutral.
    pub fn load_mood(&self) -> Result<Mood, HandoffError> {
        match self.store.get(MOOD_KEY) {
            None => Ok(Mood::default()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| HandoffError::Decode {
                key: MOOD_KEY.to_string(),
                source,
            }),
        }
    }

    pub fn save_timer(&mut self, timer: &SessionTimer) -> Result<()> {
        let json = serde_json::to_string(timer)?;
        self.store.set(TIMER_KEY, &json);
        Ok(())
    }

    /// Load a parked walkthrough, if one was stashed.
    pub fn load_timer(&self) -> Result<Option<SessionTimer>, HandoffError> {
        match self.store.get(TIMER_KEY) {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| HandoffError::Decode {
                    key: TIMER_KEY.to_string(),
                    source,
                }),
        }
    }
}
