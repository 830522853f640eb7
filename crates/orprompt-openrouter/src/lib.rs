mod adapter;
mod provider_impl_chat;

pub use adapter::{
    API_KEY_ENV, APP_TITLE_ENV, OpenRouterAdapter, OpenRouterAdapterBuilder, REFERER_ENV,
};
pub mod api_v1;
mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenRouterClient};
