use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::{EventRecord, PayloadError};

/// Append-only log of the events a cart has digested.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Journal {
    id: String,
    version: u64,
    events: Vec<EventRecord>,
    #[serde(skip, default)]
    replaying: bool,
    timestamp: SystemTime,
}

impl Default for Journal {
    fn default() -> Self {
        Journal {
            id: String::new(),
            version: 0,
            events: Vec::new(),
            replaying: false,
            timestamp: SystemTime::now(),
        }
    }
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Journal {
            id: id.into(),
            ..Journal::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Append an event. No-op while replaying, so replay handlers can reuse
    /// the same code paths as live commands.
    pub fn digest<T: Serialize + ?Sized>(
        &mut self,
        name: impl Into<String>,
        payload: &T,
    ) -> Result<(), PayloadError> {
        if self.replaying {
            return Ok(());
        }

        let sequence = self.events.len() as u64 + 1;
        let record = EventRecord::encode(name, payload, sequence)?;
        self.events.push(record);
        self.version = sequence;
        self.timestamp = SystemTime::now();
        Ok(())
    }

    /// True while an aggregate is being rebuilt from this journal.
    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Toggled by `hydrate_into` around a replay.
    pub fn set_replaying(&mut self, replaying: bool) {
        self.replaying = replaying;
    }
}
