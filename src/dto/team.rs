use serde::Deserialize;
use validator::Validate;

use crate::domain::team::{UpsertTeamAiConfig, UpsertTeamPortal};

#[derive(Debug, Deserialize, Validate)]
pub struct SaveAiConfigRequest {
    #[validate(length(min = 1))]
    pub provider: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(url)]
    pub api_base: Option<String>,
    #[validate(range(min = 0.0, max = 2.0))]
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_temperature() -> f64 {
    0.7
}

impl From<SaveAiConfigRequest> for UpsertTeamAiConfig {
    fn from(request: SaveAiConfigRequest) -> Self {
        Self {
            provider: request.provider,
            model: request.model,
            api_base: request.api_base,
            temperature: request.temperature,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SavePortalRequest {
    pub enabled: bool,
    pub domain: Option<String>,
    /// Hex color; parsed and validated at the route.
    pub accent_color: Option<String>,
}

impl From<SavePortalRequest> for UpsertTeamPortal {
    fn from(request: SavePortalRequest) -> Self {
        Self {
            enabled: request.enabled,
            domain: request.domain,
            accent_color: request.accent_color,
        }
    }
}
