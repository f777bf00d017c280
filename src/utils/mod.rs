//! Utility functions shared by the store, the derived view and the renderer.

pub mod datetime;
