pub mod commands;
pub mod config;
pub mod scorecard;
pub mod store;
pub mod totals;
pub mod tui;
