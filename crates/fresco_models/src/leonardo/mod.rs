//! Leonardo image generation client (submit/poll).

mod client;
mod types;

pub use client::LeonardoClient;
pub(crate) use types::{LeonardoGenerationRequest, LeonardoJobResponse, LeonardoPollResponse};
