use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use sahayak_types::models::describe_validation;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiError;

/// JSON body that has passed `validator` checks.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;
        value.validate().map_err(|e| ApiError::InvalidRequest(describe_validation(&e)))?;
        Ok(Self(value))
    }
}
