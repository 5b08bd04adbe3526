use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use log::error;
use payout_engine::{OrderApiError, PayoutApiError, VendorApiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("Could not read request path: {0}")]
    InvalidRequestPath(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    AuthenticationError(#[from] AuthError),
    #[error("{0}")]
    NoRecordFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRequestPath(_) => StatusCode::BAD_REQUEST,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::AuthenticationError(e) => match e {
                AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
                AuthError::TokenIssueError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Server-side failures are logged in full, but the client only ever sees a generic message.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!("💻️ {self}");
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };
        HttpResponse::build(status)
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "message": message }).to_string())
    }
}

#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Authentication token missing")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Could not issue an access token. {0}")]
    TokenIssueError(String),
}

impl From<VendorApiError> for ServerError {
    fn from(e: VendorApiError) -> Self {
        match e {
            VendorApiError::EmailAlreadyRegistered(_) => Self::Conflict("Email is already registered".into()),
            VendorApiError::DatabaseError(_) | VendorApiError::CredentialError(_) => {
                Self::BackendError(e.to_string())
            },
        }
    }
}

impl From<OrderApiError> for ServerError {
    fn from(e: OrderApiError) -> Self {
        match e {
            OrderApiError::OrderAlreadyExists(_) => Self::Conflict("Order already exists".into()),
            OrderApiError::OrderNotFound(_) => Self::NoRecordFound("Order not found".into()),
            OrderApiError::VendorNotFound(_) => Self::NoRecordFound("Vendor not found".into()),
            OrderApiError::DatabaseError(_) => Self::BackendError(e.to_string()),
        }
    }
}

impl From<PayoutApiError> for ServerError {
    fn from(e: PayoutApiError) -> Self {
        match e {
            PayoutApiError::VendorNotFound => Self::NoRecordFound(e.to_string()),
            PayoutApiError::DatabaseError(_) => Self::BackendError(e.to_string()),
        }
    }
}
