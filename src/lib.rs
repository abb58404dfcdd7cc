mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use crate::controllers::explorer::data::render_request::RenderRequest;
pub use crate::controllers::explorer::session::{CLICK_ZOOM_SCALE, DEFAULT_DISPLAY_SIZE};
pub use crate::controllers::explorer::{ExplorerController, ExplorerSession};
pub use crate::controllers::render_to_file::render_to_file_controller;
pub use crate::core::actions::render_pass::{compute_row, compute_rows, render_pass};
pub use crate::core::data::frame_buffer::FrameBuffer;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::variant::{BOUNDED, FractalVariant, MAX_ITERATIONS};
pub use crate::presenters::file::png::PngFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
