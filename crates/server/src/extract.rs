//! Extractors that turn axum's rejections into [`ServerError::BadRequest`],
//! so binding failures get the JSON error body and a 400 status.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::ServerError;

/// JSON request body.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ServerError::BadRequest(rejection.body_text())),
        }
    }
}

/// Path parameters, e.g. `PathIds<(Uuid, Uuid)>` for `/{userId}/.../{id}`.
#[derive(Debug)]
pub struct PathIds<T>(pub T);

impl<S, T> FromRequestParts<S> for PathIds<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ServerError::BadRequest(rejection.body_text())),
        }
    }
}
