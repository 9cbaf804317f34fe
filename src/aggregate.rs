use std::fmt;

use crate::error::CartError;
use crate::journal::{EventRecord, Journal};

/// A state object rebuilt by replaying its journal.
pub trait Aggregate: Sized + Default {
    type ReplayError: fmt::Display;

    fn new_empty() -> Self {
        Self::default()
    }
    fn journal(&self) -> &Journal;
    fn journal_mut(&mut self) -> &mut Journal;
    fn replay_event(&mut self, event: &EventRecord) -> Result<(), Self::ReplayError>;
}

#[macro_export]
macro_rules! impl_aggregate {
    ($ty:ty, $journal:ident, $replay:ident) => {
        $crate::impl_aggregate!($ty, $journal, $replay, String);
    };
    ($ty:ty, $journal:ident, $replay:ident, $err:ty) => {
        impl $crate::Aggregate for $ty {
            type ReplayError = $err;

            fn journal(&self) -> &$crate::Journal {
                &self.$journal
            }

            fn journal_mut(&mut self) -> &mut $crate::Journal {
                &mut self.$journal
            }

            fn replay_event(
                &mut self,
                event: &$crate::EventRecord,
            ) -> Result<(), Self::ReplayError> {
                Self::$replay(self, event)
            }
        }
    };
}

/// Rebuild a default-constructed aggregate from `journal`.
pub fn hydrate<A: Aggregate>(journal: Journal) -> Result<A, CartError> {
    hydrate_into(A::new_empty(), journal)
}

/// Replay `journal` on top of a pre-configured, empty aggregate.
pub fn hydrate_into<A: Aggregate>(mut aggregate: A, journal: Journal) -> Result<A, CartError> {
    *aggregate.journal_mut() = journal;

    let events = aggregate.journal().events().to_vec();
    aggregate.journal_mut().set_replaying(true);
    for event in &events {
        if let Err(err) = aggregate.replay_event(event) {
            aggregate.journal_mut().set_replaying(false);
            return Err(CartError::Replay(err.to_string()));
        }
    }
    aggregate.journal_mut().set_replaying(false);

    Ok(aggregate)
}
