use serde::Serialize;

use crate::domain::clinical::{ChileanPatient, LabResult, PriorityScore, ValidationResult};

/// Sample record set served on the public demo page.
#[derive(Debug, Serialize)]
pub struct DemoResponse {
    pub patient: ChileanPatient,
    pub results: Vec<LabResult>,
    pub priority: PriorityScore,
    pub validation: ValidationResult,
}
