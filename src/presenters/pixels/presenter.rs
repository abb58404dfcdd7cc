use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::explorer::events::render::RenderEvent;
use crate::controllers::explorer::ports::presenter::ExplorerPresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Presents completed frames in a fixed-size pixels framebuffer, with the
/// egui panel composited on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    display_size: usize,
    surface_width: u32,
    surface_height: u32,
    latest_frame: Option<FrameBuffer>,
    last_presented_generation: u64,
    last_render_duration: Option<Duration>,
    last_error_message: Option<String>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        display_size: usize,
    ) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        // The framebuffer stays at the session's display size; the surface
        // tracks the window and the scaling renderer bridges the two.
        let pixels = Pixels::new(display_size as u32, display_size as u32, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            display_size,
            surface_width: size.width,
            surface_height: size.height,
            latest_frame: None,
            last_presented_generation: 0,
            last_render_duration: None,
            last_error_message: None,
        }
    }

    fn share_adapter(&self) -> Arc<dyn ExplorerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn ExplorerPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.apply_pending_render_event();

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            // The scaling pass draws the fractal framebuffer first.
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return;
        }

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
    }

    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<(usize, usize)> {
        self.pixels.window_pos_to_pixel(position).ok()
    }

    fn latest_frame(&self) -> Option<&FrameBuffer> {
        self.latest_frame.as_ref()
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}

impl PixelsPresenter {
    /// Pulls the newest render event out of the adapter. Frames only land
    /// when they are newer than the one on screen and match the display
    /// size; superseded results are dropped here, which is what keeps a
    /// stale pass from overwriting a newer one.
    fn apply_pending_render_event(&mut self) {
        let Some(event) = self.adapter.take_render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation > self.last_presented_generation
                    && frame.frame_buffer.display_size() == self.display_size
                {
                    frame.frame_buffer.copy_into_rgba(self.pixels.frame_mut());
                    self.last_presented_generation = frame.generation;
                    self.last_render_duration = Some(frame.render_duration);
                    self.last_error_message = None;
                    self.latest_frame = Some(frame.frame_buffer);
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    self.last_error_message = Some(error.message);
                }
            }
        }
    }
}
