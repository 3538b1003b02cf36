//! SQLite persistence for monitoring records.
//!
//! Each write is a single self-contained insert + commit, so the two
//! monitoring threads can share one [`Database`] without coordination.
//! Failed writes are logged and dropped; monitoring never stops for a
//! persistence error.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result as SqlResult};
use std::path::Path;
use std::sync::Mutex;

/// Write-only persistence sink consumed by the monitoring units.
///
/// Implementations must tolerate concurrent calls and transient failure:
/// a failed insert is logged and the record dropped, never propagated.
pub trait RecordSink: Send + Sync {
    /// Records one aggregate interaction count for a sampling window.
    fn record_interaction(
        &self,
        machine_id: &str,
        description: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        count: u64,
    );

    /// Records one closed activity segment.
    #[allow(clippy::too_many_arguments)]
    fn record_usage(
        &self,
        machine_id: &str,
        program: Option<&str>,
        title: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_secs: f64,
        category: &str,
    );

    /// Records one focus session derived from a closed segment.
    fn record_focus_session(
        &self,
        machine_id: &str,
        program: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_secs: f64,
    );
}

/// Database wrapper with a thread-safe connection.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Opens or creates the database at `path`.
    pub fn open(path: &Path) -> SqlResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        tracing::info!(path = ?path, "Opening database");

        let conn = Connection::open(path)?;

        // Enable WAL mode for better crash safety
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;

        Ok(db)
    }

    /// Opens an in-memory database (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> SqlResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Initializes the database schema.
    fn init_schema(&self) -> SqlResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch(
            r#"
            -- Aggregate key/click counts per sampling window
            CREATE TABLE IF NOT EXISTS interactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                machine_id TEXT NOT NULL,
                description TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                count INTEGER NOT NULL
            );

            -- Closed activity segments
            CREATE TABLE IF NOT EXISTS usage (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                machine_id TEXT NOT NULL,
                program TEXT,
                window_title TEXT,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                duration_secs REAL NOT NULL,
                category TEXT NOT NULL
            );

            -- Segments long enough to count as sustained focus
            CREATE TABLE IF NOT EXISTS focus_sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                machine_id TEXT NOT NULL,
                program TEXT,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                duration_secs REAL NOT NULL
            );

            -- Indexes for date queries
            CREATE INDEX IF NOT EXISTS idx_interactions_start ON interactions(start_time);
            CREATE INDEX IF NOT EXISTS idx_usage_start ON usage(start_time);
            CREATE INDEX IF NOT EXISTS idx_focus_start ON focus_sessions(start_time);
            "#,
        )?;

        tracing::debug!("Database schema initialized");
        Ok(())
    }

    fn insert_interaction(
        &self,
        machine_id: &str,
        description: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        count: u64,
    ) -> SqlResult<i64> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO interactions (machine_id, description, start_time, end_time, count)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                machine_id,
                description,
                start.to_rfc3339(),
                end.to_rfc3339(),
                count as i64,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    #[allow(clippy::too_many_arguments)]
    fn insert_usage(
        &self,
        machine_id: &str,
        program: Option<&str>,
        title: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_secs: f64,
        category: &str,
    ) -> SqlResult<i64> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO usage (machine_id, program, window_title, start_time, end_time, duration_secs, category)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                machine_id,
                program,
                title,
                start.to_rfc3339(),
                end.to_rfc3339(),
                duration_secs,
                category,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn insert_focus_session(
        &self,
        machine_id: &str,
        program: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_secs: f64,
    ) -> SqlResult<i64> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO focus_sessions (machine_id, program, start_time, end_time, duration_secs)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                machine_id,
                program,
                start.to_rfc3339(),
                end.to_rfc3339(),
                duration_secs,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    #[cfg(test)]
    fn count_rows(&self, table: &str) -> i64 {
        let conn = self.conn.lock().unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
            .unwrap()
    }
}

impl RecordSink for Database {
    fn record_interaction(
        &self,
        machine_id: &str,
        description: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        count: u64,
    ) {
        if let Err(e) = self.insert_interaction(machine_id, description, start, end, count) {
            tracing::warn!(?e, description, "Failed to save interaction record");
        }
    }

    fn record_usage(
        &self,
        machine_id: &str,
        program: Option<&str>,
        title: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_secs: f64,
        category: &str,
    ) {
        if let Err(e) = self.insert_usage(
            machine_id,
            program,
            title,
            start,
            end,
            duration_secs,
            category,
        ) {
            tracing::warn!(?e, program, "Failed to save usage record");
        }
    }

    fn record_focus_session(
        &self,
        machine_id: &str,
        program: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_secs: f64,
    ) {
        if let Err(e) = self.insert_focus_session(machine_id, program, start, end, duration_secs) {
            tracing::warn!(?e, program, "Failed to save focus session record");
        }
    }
}
