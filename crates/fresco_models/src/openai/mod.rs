//! OpenAI chat-completions vision client.

mod client;
mod types;

pub use client::OpenAiVisionClient;
pub(crate) use types::{
    OpenAiContentPart, OpenAiImageUrl, OpenAiMessage, OpenAiRequest, OpenAiResponse,
};
