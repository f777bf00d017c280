//! View session state module.
//!
//! This module contains the transient state of one terminal session, including:
//! - Main `State` struct holding scratch buffers, edit session and selection
//! - Navigation types (Focus, Mode, FormField)
//! - Form scratch buffers (TaskForm, EditSession)
//! - Derived view computations (filtering, grouping, deadline status)

pub mod derived;
mod form;
mod navigation;

pub use form::{EditSession, TaskForm};
pub use navigation::{Focus, FormField, Mode};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
