use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::config::JwtConfig;

/// Проверенный пользователь из bearer-токена
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub exp: usize,
}

/// Подписывает токен для пользователя (HS256, срок из `JwtConfig`).
pub fn issue_token(user_id: i32, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = Utc::now() + Duration::hours(config.expires_in_hours);
    // срок до 1970 года в `exp` не выразить
    let exp = usize::try_from(exp.timestamp()).map_err(|_| ErrorKind::ExpiredSignature)?;
    let claims = Claims { user_id, exp };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

// Bearer auth extractor
impl FromRequestParts<Arc<crate::AppState>> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let claims = verify_token(token, &state.config.jwt).map_err(|e| {
            debug!("Rejected bearer token: {}", e);
            StatusCode::UNAUTHORIZED
        })?;

        Ok(AuthUser {
            user_id: claims.user_id,
        })
    }
}
