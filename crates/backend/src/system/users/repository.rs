use anyhow::{Context, Result};
use contracts::system::users::User;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

use crate::shared::data::db::get_connection;

const USER_COLUMNS: &str =
    "id, username, email, full_name, is_active, is_admin, created_at, updated_at, last_login_at";

fn from_row(row: &QueryResult) -> Result<User> {
    Ok(User {
        id: row.try_get("", "id")?,
        username: row.try_get("", "username")?,
        email: row.try_get("", "email")?,
        full_name: row.try_get("", "full_name")?,
        is_active: row.try_get::<i32>("", "is_active")? != 0,
        is_admin: row.try_get::<i32>("", "is_admin")? != 0,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
        last_login_at: row.try_get("", "last_login_at")?,
    })
}

async fn find_one(filter_column: &str, value: &str) -> Result<Option<User>> {
    let sql = format!("SELECT {} FROM sys_users WHERE {} = ?", USER_COLUMNS, filter_column);
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            [value.into()],
        ))
        .await?;
    row.as_ref().map(from_row).transpose()
}

pub async fn create_with_password(user: &User, password_hash: &str) -> Result<()> {
    let sql = format!(
        "INSERT INTO sys_users ({}, password_hash) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        USER_COLUMNS
    );
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            [
                user.id.clone().into(),
                user.username.clone().into(),
                user.email.clone().into(),
                user.full_name.clone().into(),
                i32::from(user.is_active).into(),
                i32::from(user.is_admin).into(),
                user.created_at.clone().into(),
                user.updated_at.clone().into(),
                user.last_login_at.clone().into(),
                password_hash.to_string().into(),
            ],
        ))
        .await
        .context("Failed to insert user")?;
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    find_one("id", id).await
}

pub async fn get_by_username(username: &str) -> Result<Option<User>> {
    find_one("username", username).await
}

pub async fn get_password_hash(user_id: &str) -> Result<Option<String>> {
    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_users WHERE id = ?",
            [user_id.into()],
        ))
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "password_hash")?)),
        None => Ok(None),
    }
}

pub async fn update_last_login(id: &str) -> Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_users SET last_login_at = ? WHERE id = ?",
            [chrono::Utc::now().to_rfc3339().into(), id.to_string().into()],
        ))
        .await
        .context("Failed to update last login")?;
    Ok(())
}

pub async fn count_users() -> Result<usize> {
    let row = get_connection()
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS count FROM sys_users".to_string(),
        ))
        .await?;
    match row {
        Some(row) => Ok(row.try_get::<i64>("", "count")? as usize),
        None => Ok(0),
    }
}
