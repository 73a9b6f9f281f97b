mod client;
mod error;
mod types;

pub use client::GenderizeClient;
pub use error::FetchError;
pub use types::{GenderGuess, GenderInference};
