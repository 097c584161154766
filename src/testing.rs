//! Recording fakes shared by unit tests

use crate::domain::ports::{DiagnosticSink, DispatchResult, QueuePort, ServicePort};
use crate::logging::LogLevel;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub tag: String,
    pub message: String,
}

/// Sink that keeps every line in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn logged(&self, tag: &str, message: &str) -> bool {
        self.count(LogLevel::Log, tag, message) > 0
    }

    pub fn errored(&self, tag: &str, message: &str) -> bool {
        self.count(LogLevel::Error, tag, message) > 0
    }

    pub fn count(&self, level: LogLevel, tag: &str, message: &str) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == level && e.tag == tag && e.message == message)
            .count()
    }

    fn push(&self, level: LogLevel, tag: &str, message: &str) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, tag: &str, message: &str) {
        self.push(LogLevel::Log, tag, message);
    }

    fn error(&self, tag: &str, message: &str) {
        self.push(LogLevel::Error, tag, message);
    }
}

/// Port fake that answers with a fixed result and records its inputs
#[derive(Debug)]
pub struct FakePort {
    result: DispatchResult,
    calls: Mutex<Vec<String>>,
}

impl FakePort {
    pub fn returning(result: DispatchResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, payload: &str) -> DispatchResult {
        self.calls.lock().unwrap().push(payload.to_string());
        self.result.clone()
    }
}

#[async_trait]
impl ServicePort for FakePort {
    async fn call(&self, payload: &str) -> DispatchResult {
        self.record(payload)
    }
}

#[async_trait]
impl QueuePort for FakePort {
    async fn publish(&self, payload: &str) -> DispatchResult {
        self.record(payload)
    }
}
