pub mod action;
pub mod api;
pub mod cli;
pub mod config;
pub mod identity;
pub mod logging;
pub mod saga;
pub mod shutdown;
pub mod ui;
