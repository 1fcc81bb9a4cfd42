pub mod backend;
pub mod claim;
pub mod config;
pub mod error;
pub mod mess;
pub mod storage;
pub mod utils;

pub use claim::{MealAvailability, WindowEvaluator};
pub use config::Config;
pub use error::{ClaimError, Result};
pub use mess::{MealDefinition, MealKind, TimeOfDay, STANDARD_MEALS};
