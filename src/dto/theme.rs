use serde::{Deserialize, Serialize};

use crate::domain::theme::Hsla;

/// Color conversion request; exactly one of the two fields must be set.
#[derive(Debug, Deserialize)]
pub struct ConvertColorRequest {
    pub hex: Option<String>,
    pub hsla: Option<Hsla>,
}

/// Both representations of the converted color.
#[derive(Debug, Serialize)]
pub struct ConvertColorResponse {
    pub hex: String,
    pub hsla: Hsla,
}
