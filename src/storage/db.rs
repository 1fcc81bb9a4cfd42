use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::{
    error::Result,
    mess::types::MealKind,
    storage::models::{ClaimRecord, JournalStats},
};

pub struct Journal {
    conn: Connection,
}

impl Journal {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let journal = Self { conn };
        journal.init_schema()?;
        Ok(journal)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS claims (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                meal TEXT NOT NULL,
                claim_id TEXT NOT NULL,
                claimed_on TEXT NOT NULL,
                claimed_at TEXT NOT NULL,
                note TEXT NOT NULL
            )",
            [],
        )?;

        // One lookup per claim attempt, keyed by meal and IST date
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_claims_meal_day ON claims(meal, claimed_on)",
            [],
        )?;

        Ok(())
    }

    pub fn save_claim(&self, record: &ClaimRecord) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO claims (meal, claim_id, claimed_on, claimed_at, note)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.meal.to_string(),
                record.claim_id,
                record.claimed_on.to_string(),
                record.claimed_at.to_rfc3339(),
                record.note,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// The journaled claim for `meal` on `day`, if this tool made one
    pub fn claim_for(&self, meal: MealKind, day: NaiveDate) -> Result<Option<ClaimRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT id, meal, claim_id, claimed_on, claimed_at, note
                 FROM claims WHERE meal = ?1 AND claimed_on = ?2
                 ORDER BY id DESC LIMIT 1",
                params![meal.to_string(), day.to_string()],
                Self::row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    pub fn get_history(&self, limit: Option<usize>) -> Result<Vec<ClaimRecord>> {
        let limit = limit.unwrap_or(50);
        let mut stmt = self.conn.prepare(
            "SELECT id, meal, claim_id, claimed_on, claimed_at, note
             FROM claims ORDER BY id DESC LIMIT ?1",
        )?;

        let records = stmt
            .query_map(params![limit as i64], Self::row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    pub fn get_stats(&self) -> Result<JournalStats> {
        let count_for = |meal: &str| -> Result<u64> {
            let n: i64 = self.conn.query_row(
                "SELECT COUNT(*) FROM claims WHERE meal = ?1",
                params![meal],
                |row| row.get(0),
            )?;
            Ok(n as u64)
        };

        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM claims", [], |row| row.get(0))?;

        let (first, last): (Option<String>, Option<String>) = self.conn.query_row(
            "SELECT MIN(claimed_at), MAX(claimed_at) FROM claims",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(JournalStats {
            total_claims: total as u64,
            breakfast_claims: count_for("Breakfast")?,
            lunch_claims: count_for("Lunch")?,
            snacks_claims: count_for("Snacks")?,
            dinner_claims: count_for("Dinner")?,
            first_claim_at: first.and_then(|s| s.parse().ok()),
            last_claim_at: last.and_then(|s| s.parse().ok()),
        })
    }

    fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<ClaimRecord> {
        let meal: String = row.get(1)?;
        let claimed_on: String = row.get(3)?;
        let claimed_at: String = row.get(4)?;
        Ok(ClaimRecord {
            id: row.get(0)?,
            meal: meal.parse().unwrap_or(MealKind::Breakfast),
            claim_id: row.get(2)?,
            claimed_on: claimed_on.parse().unwrap_or_default(),
            claimed_at: claimed_at.parse().unwrap_or_default(),
            note: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::NamedTempFile;

    fn open_journal() -> (Journal, NamedTempFile) {
        let file = NamedTempFile::new().unwrap();
        let journal = Journal::new(file.path().to_str().unwrap()).unwrap();
        (journal, file)
    }

    fn record(meal: MealKind, day: &str, claim_id: &str) -> ClaimRecord {
        ClaimRecord {
            id: 0,
            meal,
            claim_id: claim_id.to_string(),
            claimed_on: day.parse().unwrap(),
            claimed_at: Utc::now(),
            note: "test".to_string(),
        }
    }

    #[test]
    fn test_save_and_lookup_by_day() {
        let (journal, _file) = open_journal();
        journal
            .save_claim(&record(MealKind::Lunch, "2025-03-10", "abc123"))
            .unwrap();

        let day = "2025-03-10".parse().unwrap();
        let found = journal.claim_for(MealKind::Lunch, day).unwrap();
        assert_eq!(found.unwrap().claim_id, "abc123");

        assert!(journal.claim_for(MealKind::Dinner, day).unwrap().is_none());
        let other_day = "2025-03-11".parse().unwrap();
        assert!(journal.claim_for(MealKind::Lunch, other_day).unwrap().is_none());
    }

    #[test]
    fn test_history_is_newest_first() {
        let (journal, _file) = open_journal();
        journal
            .save_claim(&record(MealKind::Breakfast, "2025-03-10", "first"))
            .unwrap();
        journal
            .save_claim(&record(MealKind::Lunch, "2025-03-10", "second"))
            .unwrap();

        let history = journal.get_history(Some(10)).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].claim_id, "second");
        assert_eq!(history[1].claim_id, "first");

        let limited = journal.get_history(Some(1)).unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn test_stats_counts_per_meal() {
        let (journal, _file) = open_journal();
        journal
            .save_claim(&record(MealKind::Breakfast, "2025-03-10", "a"))
            .unwrap();
        journal
            .save_claim(&record(MealKind::Breakfast, "2025-03-11", "b"))
            .unwrap();
        journal
            .save_claim(&record(MealKind::Dinner, "2025-03-11", "c"))
            .unwrap();

        let stats = journal.get_stats().unwrap();
        assert_eq!(stats.total_claims, 3);
        assert_eq!(stats.breakfast_claims, 2);
        assert_eq!(stats.lunch_claims, 0);
        assert_eq!(stats.dinner_claims, 1);
        assert!(stats.first_claim_at.is_some());
        assert!(stats.last_claim_at.is_some());
    }
}
