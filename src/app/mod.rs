//! Core application logic: state and event handling.

pub mod event;
pub mod handler;
pub mod state;
