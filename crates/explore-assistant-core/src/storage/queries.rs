//! Database query implementations

use crate::error::Result;
use crate::store::Effect;
use crate::types::{HistoryItem, SidebarSettings, SIDEBAR_SETTINGS_KEY};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

// ===== History Queries =====

/// Append a history item as the newest entry
pub fn insert_history_item(conn: &Connection, item: &HistoryItem) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO history (composite_explore_id, message, created_at)
        VALUES (?, ?, ?)
        "#,
        params![
            item.composite_explore_id,
            item.message,
            chrono::Utc::now().to_rfc3339(),
        ],
    )?;

    Ok(())
}

/// List history in insertion order, oldest first
pub fn list_history(conn: &Connection) -> Result<Vec<HistoryItem>> {
    let mut stmt =
        conn.prepare("SELECT composite_explore_id, message FROM history ORDER BY id ASC")?;

    let items = stmt
        .query_map([], |row| {
            Ok(HistoryItem {
                composite_explore_id: row.get(0)?,
                message: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(items)
}

/// Remove every entry matching the item's explore id and message
pub fn remove_history_item(conn: &Connection, item: &HistoryItem) -> Result<usize> {
    let removed = conn.execute(
        "DELETE FROM history WHERE composite_explore_id = ? AND message = ?",
        params![item.composite_explore_id, item.message],
    )?;
    Ok(removed)
}

/// Keep only the newest `keep` entries
pub fn trim_history(conn: &Connection, keep: usize) -> Result<usize> {
    let removed = conn.execute(
        r#"
        DELETE FROM history
        WHERE id NOT IN (SELECT id FROM history ORDER BY id DESC LIMIT ?)
        "#,
        params![keep as i64],
    )?;
    Ok(removed)
}

pub fn clear_history(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM history", [])?;
    Ok(())
}

/// Persist the effects produced by the store reducer
pub fn apply_effects(conn: &Connection, effects: &[Effect]) -> Result<()> {
    if effects.is_empty() {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    for effect in effects {
        match effect {
            Effect::HistoryAppended { item, keep } => {
                remove_history_item(&tx, item)?;
                insert_history_item(&tx, item)?;
                let trimmed = trim_history(&tx, *keep)?;
                if trimmed > 0 {
                    debug!("Trimmed {} old history entries", trimmed);
                }
            }
            Effect::HistoryCleared => clear_history(&tx)?,
        }
    }
    tx.commit()?;

    Ok(())
}

// ===== Settings Queries =====

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?",
            [key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(value)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
        params![key, value],
    )?;

    Ok(())
}

/// Load sidebar settings, falling back to defaults for a missing or bad row
pub fn load_sidebar_settings(conn: &Connection) -> Result<SidebarSettings> {
    let Some(raw) = get_setting(conn, SIDEBAR_SETTINGS_KEY)? else {
        return Ok(SidebarSettings::default());
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!("Ignoring unreadable sidebar settings: {}", e);
            Ok(SidebarSettings::default())
        }
    }
}

pub fn save_sidebar_settings(conn: &Connection, settings: &SidebarSettings) -> Result<()> {
    let raw = serde_json::to_string(settings)?;
    set_setting(conn, SIDEBAR_SETTINGS_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::storage::run_migrations(&conn).unwrap();
        conn
    }

    fn item(id: &str, message: &str) -> HistoryItem {
        HistoryItem::new(id, message)
    }

    #[test]
    fn test_history_crud() {
        let conn = setup_db();

        insert_history_item(&conn, &item("m/a", "q1")).unwrap();
        insert_history_item(&conn, &item("m/b", "q2")).unwrap();
        assert_eq!(
            list_history(&conn).unwrap(),
            vec![item("m/a", "q1"), item("m/b", "q2")]
        );

        assert_eq!(remove_history_item(&conn, &item("m/a", "q1")).unwrap(), 1);
        assert_eq!(list_history(&conn).unwrap(), vec![item("m/b", "q2")]);

        clear_history(&conn).unwrap();
        assert!(list_history(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_trim_history_keeps_newest() {
        let conn = setup_db();
        for n in 0..5 {
            insert_history_item(&conn, &item("m/e", &format!("q{}", n))).unwrap();
        }

        assert_eq!(trim_history(&conn, 2).unwrap(), 3);
        assert_eq!(
            list_history(&conn).unwrap(),
            vec![item("m/e", "q3"), item("m/e", "q4")]
        );
    }

    #[test]
    fn test_apply_effects_mirrors_reducer() {
        use crate::store::{Action, AssistantState, AssistantStore, Dispatch};

        let conn = setup_db();
        let mut store = AssistantStore::new(AssistantState {
            max_history: 2,
            ..AssistantState::default()
        });

        store.dispatch(Action::AddToHistory(item("m/a", "q1")));
        store.dispatch(Action::AddToHistory(item("m/b", "q2")));
        store.dispatch(Action::AddToHistory(item("m/a", "q1")));
        store.dispatch(Action::AddToHistory(item("m/c", "q3")));
        apply_effects(&conn, &store.take_effects()).unwrap();

        assert_eq!(list_history(&conn).unwrap(), store.state().history);

        store.dispatch(Action::ClearHistory);
        apply_effects(&conn, &store.take_effects()).unwrap();
        assert!(list_history(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_settings() {
        let conn = setup_db();

        set_setting(&conn, "theme", "light").unwrap();
        set_setting(&conn, "theme", "dark").unwrap();
        assert_eq!(get_setting(&conn, "theme").unwrap(), Some("dark".to_string()));
        assert!(get_setting(&conn, "nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_sidebar_settings_round_trip() {
        let conn = setup_db();
        assert_eq!(load_sidebar_settings(&conn).unwrap(), SidebarSettings::default());

        let settings = SidebarSettings {
            transition_delay_ms: 180,
            start_expanded: false,
            max_history: 10,
        };
        save_sidebar_settings(&conn, &settings).unwrap();
        assert_eq!(load_sidebar_settings(&conn).unwrap(), settings);
    }

    #[test]
    fn test_unreadable_sidebar_settings_fall_back() {
        let conn = setup_db();
        set_setting(&conn, SIDEBAR_SETTINGS_KEY, "not json").unwrap();
        assert_eq!(load_sidebar_settings(&conn).unwrap(), SidebarSettings::default());
    }
}
