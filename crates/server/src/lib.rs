use api_types::error::ErrorResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use ledger::LedgerError;

pub use auth::{AuthError, Claims, JwtService};
pub use errors::{ErrorCode, error_message};
pub use server::{router, run_with_listener};

mod auth;
mod budgets;
mod currencies;
mod debt_accounts;
mod errors;
mod expense_categories;
mod extract;
mod savings_accounts;
mod server;
mod tokens;

/// Failures a handler can return.
///
/// Only [`ServerError::BadRequest`] says something about the request, the
/// others are logged and reported as a general error.
#[derive(Debug)]
pub enum ServerError {
    Ledger(LedgerError),
    Token(jsonwebtoken::errors::Error),
    BadRequest(String),
}

fn error_body(code: ErrorCode) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error_code: code.code(),
        error_message: error_message(code.code()).to_string(),
    })
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match self {
            ServerError::Ledger(err) => {
                tracing::error!("ledger error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::GeneralError)
            }
            ServerError::Token(err) => {
                tracing::error!("token error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::GeneralError)
            }
            ServerError::BadRequest(detail) => {
                tracing::warn!("bad request: {detail}");
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidRequest)
            }
        };

        (status, error_body(code)).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}

impl From<jsonwebtoken::errors::Error> for ServerError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::Token(value)
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use sea_orm::DbErr;

    use super::*;

    async fn body(res: axum::response::Response) -> ErrorResponse {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn ledger_database_error_maps_to_500() {
        let err = LedgerError::Database(DbErr::Custom("boom".to_string()));
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn ledger_no_rows_maps_to_500() {
        let res = ServerError::from(LedgerError::NoRows("pr_GetCurrencies")).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let res = ServerError::BadRequest("missing field".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let err = LedgerError::Database(DbErr::Custom("secret table name".to_string()));
        let body = body(ServerError::from(err).into_response()).await;
        assert_eq!(body.error_code, 10);
        assert_eq!(
            body.error_message,
            "A general error occurred against which no details can be collected."
        );
    }

    #[tokio::test]
    async fn bad_request_body_has_code_11() {
        let body = body(ServerError::BadRequest("x".to_string()).into_response()).await;
        assert_eq!(body.error_code, 11);
        assert_eq!(
            body.error_message,
            "The request is malformed or is missing required fields."
        );
    }
}
