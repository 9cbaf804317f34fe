mod event_record;
mod journal;

pub use event_record::{EventRecord, PayloadError};
pub use journal::Journal;
