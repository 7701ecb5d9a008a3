use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Columns every aggregate table starts with
const BASE_COLUMNS: &str = r#"
    id TEXT PRIMARY KEY NOT NULL,
    code TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL,
    comment TEXT,
    is_deleted INTEGER NOT NULL DEFAULT 0,
    created_at TEXT,
    updated_at TEXT,
    version INTEGER NOT NULL DEFAULT 0
"#;

/// (table, aggregate specific columns)
const AGGREGATE_TABLES: &[(&str, &str)] = &[
    (
        "a001_category",
        r#"
    product_count INTEGER NOT NULL DEFAULT 0,
    status TEXT NOT NULL DEFAULT 'activo'
"#,
    ),
    (
        "a002_client",
        r#"
    document_id TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    address TEXT,
    client_type TEXT NOT NULL DEFAULT 'persona',
    status TEXT NOT NULL DEFAULT 'activo',
    total_purchases REAL NOT NULL DEFAULT 0
"#,
    ),
    (
        "a003_supplier",
        r#"
    tax_id TEXT NOT NULL,
    contact_name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    address TEXT,
    supplied_category TEXT,
    status TEXT NOT NULL DEFAULT 'activo'
"#,
    ),
    (
        "a004_vendor",
        r#"
    document_id TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    commission_rate REAL NOT NULL DEFAULT 5,
    hire_date TEXT NOT NULL,
    total_sales REAL NOT NULL DEFAULT 0,
    status TEXT NOT NULL DEFAULT 'activo'
"#,
    ),
    (
        "a005_sale",
        r#"
    sale_date TEXT NOT NULL,
    client_name TEXT NOT NULL,
    vendor_name TEXT NOT NULL,
    total REAL NOT NULL DEFAULT 0,
    payment_method TEXT NOT NULL DEFAULT 'efectivo',
    status TEXT NOT NULL DEFAULT 'pendiente'
"#,
    ),
    (
        "a006_expense",
        r#"
    expense_date TEXT NOT NULL,
    category TEXT NOT NULL DEFAULT 'otros',
    amount REAL NOT NULL DEFAULT 0,
    payment_method TEXT NOT NULL DEFAULT 'efectivo',
    responsible TEXT NOT NULL
"#,
    ),
];

fn create_table_sql(table: &str, columns: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({},{});",
        table,
        BASE_COLUMNS.trim_end(),
        columns.trim_end()
    )
}

fn code_index_sql(table: &str) -> String {
    format!(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_{0}_code ON {0} (code);",
        table
    )
}

fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Windows paths need forward slashes and a leading slash before the drive
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

/// Open the SQLite file (created when missing) and bootstrap the aggregate
/// tables. Must be called once before any repository is used.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for (table, columns) in AGGREGATE_TABLES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_table_sql(table, columns),
        ))
        .await?;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            code_index_sql(table),
        ))
        .await?;
        tracing::debug!("Table {} ready", table);
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_sql() {
        let sql = create_table_sql("a001_category", AGGREGATE_TABLES[0].1);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS a001_category ("));
        assert!(sql.contains("id TEXT PRIMARY KEY NOT NULL"));
        assert!(sql.contains("version INTEGER NOT NULL DEFAULT 0,"));
        assert!(sql.contains("product_count INTEGER"));
        assert!(sql.ends_with(");"));
    }

    #[test]
    fn test_code_index_sql() {
        assert_eq!(
            code_index_sql("a005_sale"),
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_a005_sale_code ON a005_sale (code);"
        );
    }

    #[test]
    fn test_every_aggregate_has_a_table() {
        let names: Vec<&str> = AGGREGATE_TABLES.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            names,
            [
                "a001_category",
                "a002_client",
                "a003_supplier",
                "a004_vendor",
                "a005_sale",
                "a006_expense"
            ]
        );
    }

    #[test]
    fn test_sqlite_url() {
        let url = sqlite_url(Path::new("/var/data/tienda.db")).unwrap();
        assert_eq!(url, "sqlite:///var/data/tienda.db?mode=rwc");
    }
}
