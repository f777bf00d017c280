//! Terminal to-do list.
//!
//! Tasks with deadlines are added, completed, edited and deleted through a
//! `ratatui` interface. The list can be filtered by completion status and is
//! grouped by deadline date, with deadlines colored by urgency.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod store;
pub mod ui;
pub mod utils;
