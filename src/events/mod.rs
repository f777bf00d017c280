//! Event handling module.
//!
//! Terminal events: key input read on a polling thread and periodic ticks
//! that keep deadline colors in step with the clock.

pub mod terminal;
