//! User id path segment extractor

use crate::ApiError;

use cm_core::parse_user_id;

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// The `{id}` segment parsed as a user id.
///
/// Undecodable segments and non-UUID ids are both rejected as a
/// `VALIDATION_ERROR` on field `id`.
pub struct PathId(pub Uuid);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
            Ok(PathId(parse_user_id(&raw)?))
        }
    }
}
