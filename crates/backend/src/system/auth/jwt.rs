use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use contracts::system::auth::{TokenClaims, UserInfo};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;
const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 30;
const SECRET_SETTING_KEY: &str = "jwt_secret";

fn claims_for(user: &UserInfo) -> TokenClaims {
    let now = Utc::now();
    TokenClaims {
        sub: user.id.clone(),
        username: user.username.clone(),
        is_admin: user.is_admin,
        exp: (now + Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    }
}

fn encode_claims(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode access token")
}

fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode access token")?;
    Ok(data.claims)
}

pub async fn generate_access_token(user: &UserInfo) -> Result<String> {
    let secret = get_jwt_secret().await?;
    encode_claims(&claims_for(user), &secret)
}

pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret().await?;
    decode_claims(token, &secret)
}

/// Opaque refresh token; only its sha256 is stored
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn refresh_token_expiration() -> String {
    (Utc::now() + Duration::days(REFRESH_TOKEN_LIFETIME_DAYS)).to_rfc3339()
}

/// Signing secret from `sys_settings`, created on first use
pub async fn get_jwt_secret() -> Result<String> {
    if let Some(secret) = load_secret().await? {
        return Ok(secret);
    }
    let secret = generate_secret();
    store_secret(&secret).await?;
    tracing::info!("Generated a new token signing secret");
    Ok(secret)
}

fn generate_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    general_purpose::STANDARD.encode(bytes)
}

async fn load_secret() -> Result<Option<String>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [SECRET_SETTING_KEY.into()],
        ))
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn store_secret(secret: &str) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR IGNORE INTO sys_settings (key, value, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                SECRET_SETTING_KEY.into(),
                secret.to_string().into(),
                "Token signing secret".into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await
        .context("Failed to store token signing secret")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            username: "admin".into(),
            full_name: None,
            email: None,
            is_admin: true,
        }
    }

    #[test]
    fn test_claims_survive_signing() {
        let token = encode_claims(&claims_for(&admin()), "secreto").unwrap();
        let claims = decode_claims(&token, "secreto").unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.username, "admin");
        assert!(claims.is_admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = encode_claims(&claims_for(&admin()), "secreto").unwrap();
        assert!(decode_claims(&token, "otro").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut claims = claims_for(&admin());
        claims.iat -= 3 * 24 * 3600;
        claims.exp = claims.iat + 60;
        let token = encode_claims(&claims, "secreto").unwrap();
        assert!(decode_claims(&token, "secreto").is_err());
    }

    #[test]
    fn test_generated_secret_is_256_bits() {
        use base64::{engine::general_purpose, Engine as _};
        let decoded = general_purpose::STANDARD.decode(generate_secret()).unwrap();
        assert_eq!(decoded.len(), 32);
    }
}
