use winit::window::Window;

use crate::toggles::ToggleSet;

/// Values shown by the overlay for one frame
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub fps: f32,
    pub toggles: &'a ToggleSet,
    pub look_active: bool,
}

/// One line per transform: key, name, on/off
pub fn toggle_lines(toggles: &ToggleSet) -> Vec<String> {
    toggles
        .iter()
        .enumerate()
        .map(|(i, toggle)| {
            let state = if toggle.enabled { "on" } else { "off" };
            format!("[{}] {:<12}{}", i + 1, toggle.kind.label(), state)
        })
        .collect()
}

/// egui overlay painted on top of the cube
pub struct Hud {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Hud {
    pub fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        Self { ctx, state, renderer }
    }

    /// Returns true when egui consumed the event
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Record the overlay pass into `encoder`. Returned buffers must be submitted before it.
    #[allow(clippy::too_many_arguments)]
    pub fn paint(
        &mut self,
        window: &Window,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
        info: &HudInfo,
    ) -> Vec<wgpu::CommandBuffer> {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| draw(ctx, info));

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .ctx
            .tessellate(full_output.shapes, self.ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: window.scale_factor() as f32,
        };

        let user_buffers =
            self.renderer
                .update_buffers(device, queue, encoder, &tris, &screen_descriptor);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("HUD Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        user_buffers
    }
}

fn draw(ctx: &egui::Context, info: &HudInfo) {
    egui::Window::new("HUD")
        .title_bar(false)
        .resizable(false)
        .interactable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{:.0} FPS", info.fps))
                    .size(18.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );
            for (line, toggle) in toggle_lines(info.toggles).into_iter().zip(info.toggles.iter()) {
                let color = if toggle.enabled {
                    egui::Color32::WHITE
                } else {
                    egui::Color32::GRAY
                };
                ui.label(egui::RichText::new(line).monospace().color(color));
            }
            ui.label(
                egui::RichText::new(if info.look_active {
                    "look: active"
                } else {
                    "hold left mouse to look"
                })
                .size(12.0)
                .color(egui::Color32::GRAY),
            );
        });
}
