//! Authentication service - Token issuing and verification.
//!
//! Owns every contact point with the token library: login signs a token
//! for a verified user, `verify_token` decodes and checks one. Password
//! hashing lives in the domain `Password` value object.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, BEARER_TOKEN_PREFIX};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed JWT bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Username the token was issued for
    #[schema(example = "dijkstra")]
    pub username: String,
    /// Display name of the user
    #[schema(example = "Edsger Dijkstra")]
    pub name: String,
}

/// Extract the raw token from an Authorization header value.
///
/// Anything other than a `Bearer `-prefixed value yields `None`.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    header.and_then(|value| value.strip_prefix(BEARER_TOKEN_PREFIX))
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and return a signed token
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a JWT token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a JWT token for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        token,
        username: user.username.clone(),
        name: user.name.clone(),
    })
}

/// Verify a JWT token and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.users.find_by_username(&username).await?;

        // SECURITY: Perform password verification even if the user doesn't
        // exist so unknown usernames are not timing-distinguishable.
        let dummy_hash = "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Only succeed if both user exists AND password is valid
        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // user_exists was checked above, so the option is populated
        generate_token(user_result.as_ref().ok_or(AppError::InvalidCredentials)?, &self.config)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}
