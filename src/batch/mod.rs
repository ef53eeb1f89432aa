//! Batch operations over employee populations and record sets.
//!
//! This module contains the batch generator that fans payroll generation out
//! across an employee population, and the bulk status updater that applies
//! one lifecycle transition to a set of records with per-record outcomes.

mod bulk_update;
mod generator;

pub use bulk_update::{BulkFailure, BulkOutcome, bulk_transition};
pub use generator::{BatchFailure, BatchRequest, BatchRun, GeneratedRecord, generate_batch};
