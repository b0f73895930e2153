// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        if err.is_slug_conflict() {
            tracing::info!(slug = ?err.taken_slug(), error = %err, "slug conflict returned to client");
        }
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => Self::internal(&msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        let status = match &err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Conflict(_)
            | DomainError::DuplicateSlug(_)
            | DomainError::SlugSpaceExhausted { .. } => StatusCode::CONFLICT,
            DomainError::Persistence(msg) => return Self::internal(msg),
        };
        Self::new(status, err.to_string())
    }

    fn internal(detail: &str) -> Self {
        tracing::error!(error = %detail, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    }

    pub const fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApplicationError) -> StatusCode {
        HttpError::from_error(err).status()
    }

    #[test]
    fn slug_failures_map_to_conflict() {
        assert_eq!(
            status_of(DomainError::DuplicateSlug("a".into()).into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(
                DomainError::SlugSpaceExhausted {
                    base: "a".into(),
                    attempts: 1001
                }
                .into()
            ),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn persistence_details_are_hidden() {
        let err = HttpError::from_error(DomainError::Persistence("syntax error at $1".into()).into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "internal server error");
        assert_eq!(
            status_of(DomainError::Validation("bad".into()).into()),
            StatusCode::BAD_REQUEST
        );
    }
}
