//! Perfect Context: a consent-first meeting companion for the terminal.
//!
//! The [`store`] holds people, meetings and consent settings behind a pure
//! reducer. [`app`] maps key presses onto store actions and view state, and
//! [`ui`] draws it all with ratatui.

pub mod app;
pub mod config;
pub mod export;
pub mod logging;
pub mod store;
pub mod ui;
