/// Busframe Window - wgpu wireframe renderer in a fixed-size window
///
/// Opens an 800x600 window, slowly spins the bus model about the vertical
/// axis and redraws it every frame until the window is closed.
use std::sync::Arc;
use std::time::Instant;

use busframe_core::{
    draw_model, BusModel, Camera, Color, FrameLoop, LoopSettings, RotationState, Transform,
};
use log::{debug, error, info};
use nalgebra::Matrix4;
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

pub mod error;
pub mod gpu;
pub mod lines;

pub use error::{AppError, Result};
pub use gpu::Gpu;
pub use lines::{LineBatch, LineRenderer, LineVertex};

/// Background behind the wireframe
pub const CLEAR_COLOR: Color = Color::WHITE;

/// Compile-time window configuration
#[derive(Debug, Clone)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub frame: LoopSettings,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            frame: LoopSettings::default(),
        }
    }
}

/// Clip-space transform for a given scene rotation, OpenGL depth convention
pub fn frame_transform(camera: &Camera, rotation: &RotationState) -> Matrix4<f32> {
    camera.projection_matrix() * Transform::model_view(rotation, Camera::EYE_DISTANCE)
}

/// Everything the frame loop owns for its lifetime
pub struct App {
    window: Arc<Window>,
    gpu: Gpu,
    lines: LineRenderer,
    batch: LineBatch,
    model: BusModel,
    camera: Camera,
    frame_loop: FrameLoop,
    next_frame: Instant,
}

impl App {
    /// Setup phase: build the model, open the window and the GPU context
    pub fn new(event_loop: &EventLoop<()>, settings: &WindowSettings) -> Result<Self> {
        let model = BusModel::new()?;

        let window = Arc::new(
            WindowBuilder::new()
                .with_inner_size(PhysicalSize::new(settings.width, settings.height))
                .with_resizable(false)
                .build(event_loop)?,
        );
        let gpu = pollster::block_on(Gpu::new(window.clone()))?;
        let lines = LineRenderer::new(gpu.device(), gpu.format());
        info!("window ready at {}x{}", settings.width, settings.height);

        let mut frame_loop = FrameLoop::new(settings.frame);
        frame_loop.start();

        Ok(Self {
            window,
            gpu,
            lines,
            batch: LineBatch::new(),
            model,
            camera: Camera::new(settings.width, settings.height),
            frame_loop,
            next_frame: Instant::now(),
        })
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    fn handle_event(&mut self, event: Event<()>, target: &EventLoopWindowTarget<()>) -> Result<()> {
        match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        self.frame_loop.close();
                        target.exit();
                    }
                    WindowEvent::Resized(size) => self.gpu.resize(size.width, size.height),
                    WindowEvent::RedrawRequested => {
                        self.redraw()?;
                        self.next_frame = Instant::now() + self.frame_loop.settings().frame_interval;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait if self.frame_loop.is_running() => {
                if Instant::now() >= self.next_frame {
                    self.window.request_redraw();
                }
                target.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
            }
            Event::LoopExiting => debug!("event loop exiting"),
            _ => {}
        }
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        if !self.frame_loop.advance() {
            return Ok(());
        }

        let Some(frame) = self.gpu.current_texture()? else {
            return Ok(());
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.batch.clear();
        draw_model(&mut self.batch, &self.model);
        let mvp = lines::opengl_to_wgpu()
            * frame_transform(&self.camera, &self.frame_loop.rotation());
        self.lines
            .prepare(self.gpu.device(), self.gpu.queue(), &mvp, &self.batch);

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("busframe_frame"),
            });
        {
            let [r, g, b, a] = CLEAR_COLOR.to_array().map(f64::from);
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("busframe_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.gpu.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.lines.draw(&mut pass);
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        self.window.pre_present_notify();
        frame.present();
        Ok(())
    }
}

/// Open the window and run until it is closed
pub fn run(settings: WindowSettings) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(&event_loop, &settings)?;

    let mut failure = None;
    event_loop.run(|event, target| {
        if let Err(err) = app.handle_event(event, target) {
            error!("{}", err);
            failure = Some(err);
            target.exit();
        }
    })?;

    info!("stopped after {} frames", app.frame_loop().frames());
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_default_settings() {
        let settings = WindowSettings::default();
        assert_eq!((settings.width, settings.height), (800, 600));
        assert_eq!(settings.frame.degrees_per_frame, 1.0);
    }

    #[test]
    fn test_clear_color_is_normalized() {
        assert!(CLEAR_COLOR
            .to_array()
            .iter()
            .all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn test_full_turn_transform_matches_start() {
        let camera = Camera::new(800, 600);
        let mut frame_loop = FrameLoop::default();
        frame_loop.start();
        let start = frame_transform(&camera, &frame_loop.rotation());
        for _ in 0..360 {
            frame_loop.advance();
        }
        let after = frame_transform(&camera, &frame_loop.rotation());
        assert!((start - after).norm() < 1e-4);
    }

    #[test]
    fn test_model_stays_in_view() {
        let camera = Camera::new(800, 600);
        let model = BusModel::new().unwrap();
        let mvp = frame_transform(&camera, &RotationState::zero());
        for shape in model.shapes() {
            for vertex in shape.vertices() {
                let clip = mvp * vertex.to_homogeneous();
                let ndc = Point3::from(clip.xyz() / clip.w);
                assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && ndc.z.abs() <= 1.0);
            }
        }
    }
}
