use std::marker::PhantomData;

use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::explorer::session::DEFAULT_DISPLAY_SIZE;
use crate::controllers::explorer::{ExplorerController, ExplorerSession};
use crate::input::gui::app::GuiApp;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::presenter::GuiPresenterPort;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) {
        let display_size = DEFAULT_DISPLAY_SIZE;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .expect("Failed to create event loop");

        let event_loop_proxy = event_loop.create_proxy();

        // The display is square and fixed for the whole session.
        let size = LogicalSize::new(display_size as f64, display_size as f64);
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Escape-Time Fractals")
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(false)
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, event_loop_proxy, display_size);
        let controller = ExplorerController::new(presenter.share_adapter());
        let session = ExplorerSession::new(display_size);
        let app = GuiApp::new(window, &event_loop, presenter, controller, session);

        app.run(event_loop, window);
    }
}
