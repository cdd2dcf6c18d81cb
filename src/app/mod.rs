//! Core application logic: UI state, event handling, and effect dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod integration;
pub mod state;
