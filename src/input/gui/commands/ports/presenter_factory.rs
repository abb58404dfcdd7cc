use winit::{event_loop::EventLoopProxy, window::Window};

use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        display_size: usize,
    ) -> T;
}
