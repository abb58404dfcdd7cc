use winit::{event_loop::EventLoopProxy, window::Window};

use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct PixelsPresenterFactory {}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        display_size: usize,
    ) -> PixelsPresenter {
        PixelsPresenter::new(window, event_loop_proxy, display_size)
    }
}

impl Default for PixelsPresenterFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
