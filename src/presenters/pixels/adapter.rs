use std::sync::Mutex;

use winit::event_loop::EventLoopProxy;

use crate::controllers::explorer::events::render::RenderEvent;
use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::input::gui::events::GuiEvent;

/// Bridges the render worker to the UI thread: stores the newest render
/// event and pokes the event loop awake. Only the latest event matters,
/// older ones are superseded the moment a newer one lands.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl ExplorerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self.render_event.lock().unwrap() = Some(event);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_render_event(&self) -> Option<RenderEvent> {
        self.render_event.lock().unwrap().take()
    }
}
