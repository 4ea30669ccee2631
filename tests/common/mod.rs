//! Shared test helpers

#![allow(dead_code)]

pub mod mock_runner;

pub use mock_runner::{Call, GLAB_PATH, MockRunner, fail, ok};

use glab_git_id::Reporter;
use std::sync::Mutex;

/// Reporter that keeps every message, tagged by level
#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(&self, level: &str) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: &'static str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn log(&self, message: &str) {
        self.push("log", message);
    }

    fn warn(&self, message: &str) {
        self.push("warn", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }

    fn debug(&self, message: &str) {
        self.push("debug", message);
    }
}

pub const ADA_RECORD: &str = r#"{"id":42,"username":"ada","name":"Ada Lovelace","email":"ada@example.com","state":"active"}"#;
