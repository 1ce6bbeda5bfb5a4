//! Schema migrations, applied in order and recorded by name

use crate::error::{Result, StorageError};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

struct Migration {
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "001_history",
        sql: r#"
            -- Sidebar history; row id gives insertion order
            CREATE TABLE IF NOT EXISTS history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                composite_explore_id TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at DATETIME NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_history_entry
                ON history(composite_explore_id, message);
        "#,
    },
    Migration {
        name: "002_settings",
        sql: r#"
            CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
        "#,
    },
];

/// Bring the schema up to date. Safe to call on every open.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS migrations (
            name TEXT PRIMARY KEY,
            applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );",
    )?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        if is_applied(conn, migration.name)? {
            continue;
        }

        debug!("Applying migration {}", migration.name);
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(migration.sql).map_err(|e| {
            StorageError::MigrationFailed(format!("{}: {}", migration.name, e))
        })?;
        tx.execute(
            "INSERT INTO migrations (name) VALUES (?1)",
            params![migration.name],
        )?;
        tx.commit()?;
        applied += 1;
    }

    if applied > 0 {
        info!("Applied {} migration(s)", applied);
    }
    Ok(())
}

fn is_applied(conn: &Connection, name: &str) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM migrations WHERE name = ?1",
            params![name],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        let names = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<String>, _>>()
            .unwrap();
        names
    }

    #[test]
    fn test_creates_history_and_settings_tables() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let tables = table_names(&conn);
        assert!(tables.iter().any(|t| t == "history"));
        assert!(tables.iter().any(|t| t == "settings"));
    }

    #[test]
    fn test_rerun_applies_nothing_new() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let recorded: i64 = conn
            .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(recorded, MIGRATIONS.len() as i64);
    }
}
