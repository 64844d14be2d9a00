//! Custom Axum extractors

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::server::error::Error;

/// Path parameters for ID routes.
///
/// Works like [`Path`], but an ID segment that does not parse as an `i32` is rejected as
/// [`Error::InvalidPath`] so the client gets a 404 in the usual JSON error shape.
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;

        Ok(Self(value))
    }
}
