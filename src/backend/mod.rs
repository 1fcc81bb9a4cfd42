pub mod client;
pub mod types;

pub use client::MessApiClient;
pub use types::{ApiResponse, ClaimData, ClaimRequest};
