use std::fmt;
use std::time::SystemTime;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Failure encoding or decoding an event payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadError {
    pub message: String,
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payload error: {}", self.message)
    }
}

impl std::error::Error for PayloadError {}

impl From<bitcode::Error> for PayloadError {
    fn from(err: bitcode::Error) -> Self {
        PayloadError {
            message: err.to_string(),
        }
    }
}

/// One digested event. The payload is bitcode; JSON renders it as base64.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct EventRecord {
    pub event_name: String,
    #[serde(with = "payload_serde")]
    pub payload: Vec<u8>,
    pub sequence: u64,
    pub timestamp: SystemTime,
}

mod payload_serde {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(payload: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        STANDARD.encode(payload).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

impl EventRecord {
    pub fn new(event_name: impl Into<String>, payload: Vec<u8>, sequence: u64) -> Self {
        EventRecord {
            event_name: event_name.into(),
            payload,
            sequence,
            timestamp: SystemTime::now(),
        }
    }

    /// Encode `payload` and wrap it in a record.
    pub fn encode<T: Serialize + ?Sized>(
        event_name: impl Into<String>,
        payload: &T,
        sequence: u64,
    ) -> Result<Self, PayloadError> {
        let bytes = bitcode::serialize(payload)?;
        Ok(EventRecord::new(event_name, bytes, sequence))
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, PayloadError> {
        Ok(bitcode::deserialize(&self.payload)?)
    }
}
