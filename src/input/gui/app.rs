//! Main GUI application loop.

use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::explorer::{ExplorerController, ExplorerSession};
use crate::core::fractals::variant::FractalVariant;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use crate::storage::save_png::save_png;

pub struct GuiApp<P: GuiPresenterPort> {
    session: ExplorerSession,
    controller: ExplorerController,
    presenter: P,
    /// Last known cursor position in physical window coordinates, for
    /// click-to-zoom.
    cursor_position: Option<(f64, f64)>,
    save_path: String,
    status_message: Option<String>,
    export_error: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: P,
        controller: ExplorerController,
        session: ExplorerSession,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            session,
            controller,
            presenter,
            cursor_position: None,
            save_path: String::from("output/fractal.png"),
            status_message: None,
            export_error: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs the event loop; does not return until the window closes.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>, window: &'static Window) {
        // Kick off the first pass so the window opens onto a fractal.
        self.submit_render_request_if_needed();

        event_loop
            .run(move |event, elwt| match event {
                Event::UserEvent(GuiEvent::Wake) => {
                    window.request_redraw();
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let egui_consumed = self.handle_egui_event(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::Resized(size) => {
                            self.presenter.resize_surface(size.width, size.height);
                            window.request_redraw();
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            self.presenter.resize_surface(size.width, size.height);
                            window.request_redraw();
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            self.cursor_position = Some((position.x, position.y));
                        }
                        WindowEvent::MouseInput {
                            state: ElementState::Pressed,
                            button: MouseButton::Left,
                            ..
                        } if !egui_consumed => {
                            self.handle_canvas_click();
                            window.request_redraw();
                        }
                        WindowEvent::RedrawRequested => {
                            let mut egui_output = self.update_ui(window);

                            let platform_output = std::mem::take(&mut egui_output.platform_output);
                            self.egui_state
                                .handle_platform_output(window, platform_output);

                            let repaint = egui_output
                                .viewport_output
                                .values()
                                .any(|v| v.repaint_delay.is_zero());

                            // The panel may have changed the view this frame.
                            self.submit_render_request_if_needed();

                            if let Err(e) = self.presenter.render(egui_output, &self.egui_ctx) {
                                eprintln!("Render error: {e}");
                                elwt.exit();
                            }

                            if repaint {
                                window.request_redraw();
                            }
                        }
                        _ => {
                            if egui_consumed {
                                window.request_redraw();
                            }
                        }
                    }
                }
                _ => {}
            })
            .expect("Event loop error");
    }

    fn handle_egui_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }

    fn is_render_idle(&self) -> bool {
        self.controller.last_completed_generation() >= self.session.latest_submitted_generation()
    }

    fn submit_render_request_if_needed(&mut self) {
        let request = self.session.build_render_request();

        if self.session.should_submit(&request) {
            let generation = self.controller.submit_request(request);
            self.session.record_submission(request, generation);
        }
    }

    fn handle_canvas_click(&mut self) {
        // Clicks are ignored until the in-flight pass completes, like every
        // other control.
        if !self.is_render_idle() {
            return;
        }

        let Some((x, y)) = self.cursor_position else {
            return;
        };
        let Some((pixel_x, pixel_y)) = self.presenter.window_pos_to_pixel((x as f32, y as f32))
        else {
            return;
        };

        self.session.zoom_to_pixel(pixel_x, pixel_y);
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let idle = self.is_render_idle();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Fractal")
                .default_pos([10.0, 10.0])
                .show(ctx, |ui| {
                    ui.add_enabled_ui(idle, |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Fractal:");
                            let mut selected = self.session.variant();
                            egui::ComboBox::from_id_source("fractal_variant")
                                .selected_text(selected.display_name())
                                .show_ui(ui, |ui| {
                                    for &variant in FractalVariant::ALL {
                                        ui.selectable_value(
                                            &mut selected,
                                            variant,
                                            variant.display_name(),
                                        );
                                    }
                                });
                            if selected != self.session.variant() {
                                self.session.select_variant(selected);
                            }
                        });

                        if ui.button("Reset").clicked() {
                            self.session.reset_view();
                        }

                        ui.separator();
                        ui.horizontal(|ui| {
                            ui.label("Save to:");
                            ui.text_edit_singleline(&mut self.save_path);
                        });
                        if ui.button("Save image").clicked() {
                            match self.presenter.latest_frame() {
                                Some(frame) => match save_png(frame, &self.save_path) {
                                    Ok(()) => {
                                        self.status_message =
                                            Some(format!("Saved to {}", self.save_path));
                                        self.export_error = None;
                                    }
                                    Err(e) => {
                                        self.export_error =
                                            Some(format!("Cannot save image: {}", e));
                                    }
                                },
                                None => {
                                    self.export_error =
                                        Some(String::from("Nothing rendered yet"));
                                }
                            }
                        }
                    });

                    ui.separator();
                    let viewport = self.session.viewport();
                    ui.label(format!(
                        "Real: [{:.6}, {:.6}]",
                        viewport.x(),
                        viewport.x() + viewport.width()
                    ));
                    ui.label(format!(
                        "Imag: [{:.6}, {:.6}]",
                        viewport.y(),
                        viewport.y() + viewport.height()
                    ));

                    if !idle {
                        ui.label("Rendering...");
                    } else if let Some(duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }

                    if let Some(message) = self.presenter.last_error_message() {
                        ui.colored_label(egui::Color32::LIGHT_RED, message.to_owned());
                    }
                    if let Some(message) = &self.export_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                    if let Some(message) = &self.status_message {
                        ui.label(message);
                    }
                });
        })
    }
}
