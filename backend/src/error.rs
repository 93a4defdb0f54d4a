use crate::store::StoreError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use common::model::id::DocId;
use common::model::ValidationError;
use thiserror::Error;

/// Body sent when an error carries no message of its own.
pub const DEFAULT_MESSAGE: &str = "Something went wrong!!";

/// What every route handler returns. Any `Err` is turned into a response by
/// `ResponseError` and then passes through the error middleware chain.
pub type HandlerResult = Result<HttpResponse, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// A record the handler depends on is missing and the route has no guard
    /// for it.
    #[error("Cannot resolve {what} {id}")]
    Unresolved { what: &'static str, id: DocId },

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    /// Short name of the failure, used when logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFoundError",
            AppError::Unresolved { .. } => "UnresolvedError",
            AppError::Validation(_) => "ValidationError",
            AppError::Store(e) => e.kind(),
            AppError::Template(_) => "TemplateError",
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        plain_text(self.status_code(), &self.to_string())
    }
}

/// `status` with `message` as a plain-text body, or `DEFAULT_MESSAGE` when
/// `message` is blank.
pub fn plain_text(status: StatusCode, message: &str) -> HttpResponse {
    let message = if message.trim().is_empty() {
        DEFAULT_MESSAGE
    } else {
        message
    };
    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(message.to_string())
}

/// Routes malformed form bodies into `AppError` instead of actix's own 400.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

/// Same as `form_config`, for query strings.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn not_found_is_a_plain_404() {
        let res = AppError::not_found("Product not found!").error_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            res.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
        let body = to_bytes(res.into_body()).await.unwrap();
        assert_eq!(body, "Product not found!");
    }

    #[actix_web::test]
    async fn everything_else_is_a_500_with_its_message() {
        let err = AppError::from(ValidationError::new("category", "bad value"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        assert_eq!(body, "category: bad value");
    }

    #[actix_web::test]
    async fn blank_messages_fall_back_to_the_default() {
        let res = plain_text(StatusCode::INTERNAL_SERVER_ERROR, "  ");
        let body = to_bytes(res.into_body()).await.unwrap();
        assert_eq!(body, DEFAULT_MESSAGE);
    }

    #[test]
    fn store_failures_report_the_store_kind() {
        let err = AppError::from(StoreError::Poisoned);
        assert_eq!(err.kind(), "ConnectionError");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
