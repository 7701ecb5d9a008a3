use anyhow::{Context, Result};
use contracts::system::users::CreateUserDto;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::domain::{a001_category, a002_client, a003_supplier, a004_vendor, a005_sale, a006_expense};
use crate::shared::config::Config;
use crate::shared::data::db::get_connection;
use crate::system::users::{repository as user_repository, service as user_service};

const AUTH_MIGRATION: &str = include_str!("../../migrations/auth_system.sql");

/// Statements of a SQL script with comment lines and blanks removed
fn split_statements(script: &str) -> Vec<String> {
    script
        .split(';')
        .map(|statement| {
            statement
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .filter(|statement| !statement.is_empty())
        .collect()
}

/// Create the account, token and settings tables. Idempotent.
pub async fn apply_auth_migration() -> Result<()> {
    let conn = get_connection();
    for (idx, statement) in split_statements(AUTH_MIGRATION).iter().enumerate() {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("{};", statement),
        ))
        .await
        .with_context(|| {
            format!(
                "Failed to execute auth migration statement #{}: {}",
                idx,
                statement.lines().next().unwrap_or_default()
            )
        })?;
    }
    tracing::info!("Auth tables ready");
    Ok(())
}

/// On an empty `sys_users` table create `admin/admin` (administrator) and
/// `vendedor/vendedor` (sales clerk)
pub async fn ensure_default_users() -> Result<()> {
    if user_repository::count_users().await? > 0 {
        return Ok(());
    }

    let defaults = [
        ("admin", "Administrador", true),
        ("vendedor", "Vendedor de turno", false),
    ];
    for (username, full_name, is_admin) in defaults {
        user_service::create(CreateUserDto {
            username: username.into(),
            password: username.into(),
            email: None,
            full_name: Some(full_name.into()),
            is_admin,
        })
        .await
        .with_context(|| format!("Failed to create default user '{}'", username))?;
        tracing::warn!(
            "Default user '{}' created with password '{}'. Change it before going live.",
            username,
            username
        );
    }
    Ok(())
}

/// Fill every empty aggregate table with sample records when
/// `[seed] mock_data` is on. Sales come last so the client and vendor
/// totals can be recalculated from them.
pub async fn seed_mock_data(config: &Config) -> Result<()> {
    if !config.seed.mock_data {
        tracing::info!("Mock data seeding disabled");
        return Ok(());
    }

    if a001_category::repository::count_all().await? == 0 {
        a001_category::service::insert_test_data().await?;
        tracing::info!("Seeded sample categories");
    }
    if a002_client::repository::count_all().await? == 0 {
        a002_client::service::insert_test_data().await?;
        tracing::info!("Seeded sample clients");
    }
    if a003_supplier::repository::count_all().await? == 0 {
        a003_supplier::service::insert_test_data().await?;
        tracing::info!("Seeded sample suppliers");
    }
    if a004_vendor::repository::count_all().await? == 0 {
        a004_vendor::service::insert_test_data().await?;
        tracing::info!("Seeded sample vendors");
    }
    if a005_sale::repository::count_all().await? == 0 {
        a005_sale::service::insert_test_data().await?;
        tracing::info!("Seeded sample sales");
    }
    if a006_expense::repository::count_all().await? == 0 {
        a006_expense::service::insert_test_data().await?;
        tracing::info!("Seeded sample expenses");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_statements_skips_comments() {
        let statements = split_statements(
            "-- header\nCREATE TABLE a (id TEXT);\n\n-- second\nCREATE INDEX i ON a(id);\n",
        );
        assert_eq!(
            statements,
            vec!["CREATE TABLE a (id TEXT)", "CREATE INDEX i ON a(id)"]
        );
    }

    #[test]
    fn test_auth_migration_has_all_tables() {
        let statements = split_statements(AUTH_MIGRATION);
        assert_eq!(statements.len(), 4);
        for table in ["sys_users", "sys_refresh_tokens", "sys_settings"] {
            assert!(statements.iter().any(|s| s.contains(table)));
        }
    }
}
