use rusqlite::Connection;
use timely_core::db::migrations::{apply_migrations, latest_version};
use timely_core::db::{open_db_in_memory, DbError};

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn fresh_connection_is_migrated_to_latest_version() {
    let conn = open_db_in_memory().unwrap();

    assert!(latest_version() > 0);
    assert_eq!(user_version(&conn), latest_version());

    // The events table is usable right away.
    conn.execute(
        "INSERT INTO events (id, title, date, time, duration) \
         VALUES ('00000000-0000-4000-8000-000000000001', 'Probe', '2024-03-04', '09:00', 30);",
        [],
    )
    .unwrap();
}

#[test]
fn reapplying_migrations_is_a_noop() {
    let mut conn = open_db_in_memory().unwrap();

    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    assert_eq!(user_version(&conn), latest_version());
}

#[test]
fn newer_database_schema_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        latest_version() + 1
    ))
    .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version, latest_supported }
            if db_version == latest_version() + 1 && latest_supported == latest_version()
    ));
}

#[test]
fn snapshot_state_table_exists_after_migration() {
    let conn = open_db_in_memory().unwrap();

    conn.execute(
        "INSERT INTO snapshot_state (key, value) VALUES ('snapshot_present', '1');",
        [],
    )
    .unwrap();

    let value: String = conn
        .query_row(
            "SELECT value FROM snapshot_state WHERE key = 'snapshot_present';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "1");
}
