//! Anonymous endpoint handing out a bearer token, for trying the API out.

use axum::extract::State;

use crate::{ServerError, server::ServerState};

const TEST_TOKEN_EMAIL: &str = "fake@email.com";

/// Generate a token for a placeholder account. The body is the raw token,
/// sent as plain text.
pub async fn get_random_token(State(state): State<ServerState>) -> Result<String, ServerError> {
    tracing::info!("GetRandomToken start.");
    let token = state.jwt.generate_security_token(TEST_TOKEN_EMAIL)?;
    tracing::info!("GetRandomToken end.");
    Ok(token)
}
