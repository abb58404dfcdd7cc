//! Windowed surface for interactive exploration.
//!
//! winit owns the window and event loop, pixels owns the 600x600
//! framebuffer, and egui draws the control panel (variant selection, reset,
//! save). A left click on the canvas zooms in at the clicked point. All
//! interactive controls stay disabled while a render pass is in flight.

pub mod app;
pub mod commands;
pub mod events;
pub mod ports;
