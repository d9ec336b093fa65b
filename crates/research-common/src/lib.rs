pub mod anthropic;
pub mod api;
