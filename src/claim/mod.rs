pub mod engine;
pub mod window;

pub use engine::{ClaimEngine, ClaimOutcome};
pub use window::{MealAvailability, WindowEvaluator};
