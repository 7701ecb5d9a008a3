use anyhow::{anyhow, Result};
use chrono::Utc;
use contracts::shared::validation;
use contracts::system::users::{CreateUserDto, User};

use super::repository;
use crate::system::auth::password;

/// Create an account, returns its id
pub async fn create(dto: CreateUserDto) -> Result<String> {
    let username = dto.username.trim().to_string();
    validation::required(&username, "Usuario").map_err(|e| anyhow!(e))?;

    if repository::get_by_username(&username).await?.is_some() {
        return Err(anyhow!("El usuario '{}' ya existe", username));
    }

    let email = validation::optional_text(&dto.email);
    if let Some(email) = &email {
        validation::email(email, "Correo").map_err(|e| anyhow!(e))?;
    }

    password::validate_password_strength(&dto.password)?;
    let password_hash = password::hash_password(&dto.password)?;

    let now = Utc::now().to_rfc3339();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username,
        email,
        full_name: validation::optional_text(&dto.full_name),
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };
    repository::create_with_password(&user, &password_hash).await?;

    Ok(user.id)
}

pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

/// `None` for unknown users, inactive accounts and wrong passwords
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<User>> {
    let Some(user) = repository::get_by_username(username).await? else {
        return Ok(None);
    };
    if !user.is_active {
        tracing::warn!("Login attempt on inactive account '{}'", username);
        return Ok(None);
    }

    let hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| anyhow!("Password hash not found for '{}'", username))?;
    if !password::verify_password(password, &hash)? {
        return Ok(None);
    }

    if let Err(e) = repository::update_last_login(&user.id).await {
        tracing::warn!("Could not record last login: {:#}", e);
    }
    Ok(Some(user))
}
