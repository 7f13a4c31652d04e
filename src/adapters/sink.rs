use crate::domain::ports::StatusSink;
use std::sync::{Arc, Mutex};

/// Production sink: one status line per call, straight to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn status(&self, line: &str) {
        println!("{}", line);
    }
}

/// In-memory sink that records every line in order. Clones share the same
/// buffer, so one recorder can be handed to several components and still
/// observe their combined output sequence.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("status sink poisoned").clone()
    }
}

impl StatusSink for MemorySink {
    fn status(&self, line: &str) {
        self.lines
            .lock()
            .expect("status sink poisoned")
            .push(line.to_string());
    }
}
