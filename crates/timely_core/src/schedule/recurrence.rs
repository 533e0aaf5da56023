//! Recurrence expansion into concrete occurrences.
//!
//! # Responsibility
//! - Materialize a bounded run of event occurrences from one recurrence
//!   request.
//!
//! # Invariants
//! - Every occurrence of one `expand` call shares one fresh group id.
//! - The end date is inclusive; an end before the start yields zero
//!   occurrences, not an error.
//! - Expansion never assigns event ids; the store owns identity.

use crate::clock;
use crate::model::event::{EventDraft, RecurrenceStep};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

/// Transient expansion request; only the produced occurrences persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub title: String,
    pub start: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
    pub step: RecurrenceStep,
    /// Last date an occurrence may land on, inclusive. Callers must supply
    /// a concrete bound; the loop terminates on it.
    pub end: NaiveDate,
}

/// One materialized occurrence awaiting id assignment by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub draft: EventDraft,
    pub recurring_id: Uuid,
    pub recurring_type: RecurrenceStep,
}

/// Expands `rule` into one occurrence per step while the date stays within
/// the inclusive end bound.
///
/// Occurrence dates are reproducible for identical inputs; the shared
/// `recurring_id` is fresh on every call.
pub fn expand(rule: &RecurrenceRule) -> Vec<Occurrence> {
    let recurring_id = Uuid::new_v4();
    let mut occurrences = Vec::new();
    let mut current = rule.start;

    while current <= rule.end {
        occurrences.push(Occurrence {
            draft: EventDraft {
                title: rule.title.clone(),
                date: current,
                time: rule.time,
                duration: rule.duration,
            },
            recurring_id,
            recurring_type: rule.step,
        });

        match step_from(current, rule.step) {
            Some(next) => current = next,
            None => break,
        }
    }

    occurrences
}

fn step_from(date: NaiveDate, step: RecurrenceStep) -> Option<NaiveDate> {
    match step {
        RecurrenceStep::Daily => clock::next_day(date),
        RecurrenceStep::Weekly => clock::next_week(date),
        RecurrenceStep::Monthly => clock::next_month(date),
    }
}
