//! HTTP route handlers.
//!
//! Every error leaves the API in one envelope: `{"error": {"code", "message"}}`
//! with a matching HTTP status. Handlers return `Result<HttpResponse, ApiError>`
//! and rely on the `From` conversions below.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

pub mod accounts;
pub mod ai;
pub mod boards;
pub mod cms;
pub mod documents;
pub mod leads;
pub mod messages;
pub mod opportunities;
pub mod outreach;
pub mod plans;
pub mod quotes;
pub mod schema_builder;
pub mod teams;
pub mod theme;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Insufficient permissions")]
    Forbidden,
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    Conflict(String),
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Forbidden => "forbidden",
            ApiError::NotFound => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::Internal => "internal",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        }))
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApiError::NotFound,
            RepositoryError::ConstraintViolation(message) => ApiError::Conflict(message),
            RepositoryError::ValidationError(message) => ApiError::BadRequest(message),
            other => {
                log::error!("Repository error: {other}");
                ApiError::Internal
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            // The caller is authenticated but lacks the role.
            ServiceError::Unauthorized => ApiError::Forbidden,
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Validation(message) => ApiError::BadRequest(message),
            ServiceError::Repository(repo_err) => repo_err.into(),
            ServiceError::Ai(ai_err) => {
                log::error!("AI provider error: {ai_err}");
                ApiError::Internal
            }
            ServiceError::Template(tera_err) => {
                log::error!("Template error: {tera_err}");
                ApiError::Internal
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Rejects callers missing the given role.
pub fn ensure_role(user: &AuthenticatedUser, role: &str) -> Result<(), ApiError> {
    if user.has_role(role) {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn envelope_carries_code_and_message() {
        let response = ApiError::NotFound.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "not_found");
        assert!(value["error"]["message"].is_string());
    }

    #[test]
    fn repository_errors_map_to_statuses() {
        assert_eq!(
            ApiError::from(RepositoryError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(RepositoryError::ConstraintViolation("dup".to_string())).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn missing_role_is_forbidden() {
        let user = AuthenticatedUser {
            sub: "1".to_string(),
            email: "x@y.z".to_string(),
            name: "X".to_string(),
            hub_id: 1,
            roles: vec!["crm".to_string()],
            exp: 0,
        };
        assert!(ensure_role(&user, "crm").is_ok());
        assert!(matches!(
            ensure_role(&user, "crm_admin"),
            Err(ApiError::Forbidden)
        ));
    }
}
