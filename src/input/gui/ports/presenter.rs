use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        display_size: usize,
    ) -> Self;

    /// The controller-facing adapter that receives render events.
    fn share_adapter(&self) -> Arc<dyn ExplorerPresenterPort>;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize_surface(&mut self, width: u32, height: u32);

    /// Maps a physical window position to a framebuffer pixel, or `None`
    /// when the position falls outside the canvas.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<(usize, usize)>;

    /// The most recently presented frame, kept for export.
    fn latest_frame(&self) -> Option<&FrameBuffer>;

    fn last_render_duration(&self) -> Option<Duration>;

    fn last_error_message(&self) -> Option<&str>;
}
