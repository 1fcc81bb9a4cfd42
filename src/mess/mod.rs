pub mod catalog;
pub mod clock;
pub mod types;

pub use catalog::{find_meal, validate_catalog, STANDARD_MEALS};
pub use clock::{ist_date, ist_now, ist_time_of_day, to_ist};
pub use types::{MealDefinition, MealKind, TimeOfDay};
