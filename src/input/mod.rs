//! Input adapters: surfaces that receive user actions and translate them
//! into session operations.

#[cfg(feature = "gui")]
pub mod gui;
