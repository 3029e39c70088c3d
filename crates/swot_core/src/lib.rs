//! SWOT entry & aggregation engine: draft-row editing, the submit
//! transaction, per-category running totals, and the derived verdict.
//!
//! This crate is the state container behind the SWOT analysis screen. It
//! is synchronous and single-writer: every mutation happens in direct
//! response to one UI action, and the presentation layer only ever sees a
//! read-only projection (draft rows, committed entries, totals, verdict).

pub mod domain;
pub mod engine;

pub use domain::{Category, CommittedEntry, DraftEntry, FieldEdit, Totals, Verdict};
pub use engine::{parse_score, SwotEngine};

#[cfg(test)]
mod tests;
