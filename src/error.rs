use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::services::eligibility::EligibilityError;

/// Сбой хранилища при чтении. Наружу не раскрывается.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Все исходы запроса к отелям, кроме успеха. Текст `Display` уходит клиенту как есть.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Ineligible(#[from] EligibilityError),

    #[error("cannot find hotel")]
    NotFound,

    #[error("server error")]
    Unexpected(#[from] GatewayError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Ineligible(EligibilityError::NoTicket) => StatusCode::NOT_FOUND,
            AppError::Ineligible(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Unexpected(cause) = &self {
            error!(error = %cause, "Hotel request failed");
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
