//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for the operator commands:
//! batch generation, single-record lifecycle transitions, and bulk
//! transitions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BulkTransitionBody, GenerateBatchBody, TransitionBody};
pub use response::{ApiError, PayrollRecordView};
pub use state::AppState;
