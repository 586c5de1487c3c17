use axum::http::{HeaderMap, header, request::Parts};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::{App, error::AppError, forum::store::StoreError, schema::auth_tokens};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("Authentication required, but no bearer token found in the `Authorization` header.")]
    NoToken,

    #[error(
        "Unauthorized, the access token may have expired or become invalid. \
         Please log in again to get a fresh one."
    )]
    Unauthorized,
}

/// Requester identity resolved from a bearer token. Token issuance and user
/// management live outside this service; this lookup is the whole seam.
pub struct AuthUser(pub String);

impl axum::extract::FromRequestParts<App> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &App) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthenticationError::NoToken)?;

        let mut conn = state.pool.get().await.map_err(StoreError::from)?;

        let username = auth_tokens::table
            .filter(auth_tokens::token.eq(token))
            .filter(auth_tokens::expires_at.gt(diesel::dsl::now))
            .select(auth_tokens::username)
            .first::<String>(&mut conn)
            .await
            .optional()
            .map_err(StoreError::from)?;

        match username {
            Some(username) => Ok(AuthUser(username)),
            None => Err(AuthenticationError::Unauthorized.into()),
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
