//! Employee snapshot model.
//!
//! The engine does not own employee master data; it consumes a read-only
//! snapshot supplied by the employee service alongside the salary structure
//! and attendance summary for a period.

use serde::{Deserialize, Serialize};

/// A read-only snapshot of an employee as supplied by the employee service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to, used for batch filtering.
    pub department: String,
    /// Whether the employee is currently active. Inactive employees are
    /// excluded from batch generation unless explicitly included.
    pub is_active: bool,
}
