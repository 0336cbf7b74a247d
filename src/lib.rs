pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod feeds;
pub mod format;
pub mod state;
pub mod view;
