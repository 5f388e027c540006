//! JSON body extractor with API-shaped rejections

use crate::ApiError;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but a missing, malformed or mistyped body is
/// rejected as an [`ApiError`] so clients always get the JSON error shape.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(JsonBody(value))
        }
    }
}
