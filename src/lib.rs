pub mod app;
pub mod cli;
pub mod config;
pub mod quotes;
pub mod store;
pub mod sync;
pub mod transfer;
pub mod view;
pub mod watch;
