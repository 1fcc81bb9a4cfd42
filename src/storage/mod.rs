pub mod db;
pub mod models;

pub use db::Journal;
pub use models::{ClaimRecord, JournalStats};
