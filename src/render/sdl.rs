use super::{Graphics, RenderSurface, Rgb};
use anyhow::{anyhow, Context};
use log::info;
use nalgebra::Vector2;
use sdl2::{
    gfx::primitives::DrawRenderer, pixels::Color, render::Canvas, video::Window, EventPump,
};

pub struct DisplayConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: "Discs",
            width: 1280,
            height: 720,
        }
    }
}

pub struct SdlSurface {
    canvas: Canvas<Window>,
}

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Color {
        Color::RGB(r, g, b)
    }
}

fn to_pixel(v: f64) -> i16 {
    v.round() as i16
}

impl RenderSurface for SdlSurface {
    fn size(&self) -> (u32, u32) {
        self.canvas.output_size().unwrap_or_else(|_| {
            let window = self.canvas.window();
            window.size()
        })
    }

    fn clear(&mut self) {
        self.canvas.set_draw_color(Color::from(Rgb::WHITE));
        self.canvas.clear();
    }

    fn fill_disc(&mut self, center: Vector2<f64>, radius: f64, color: Rgb) -> anyhow::Result<()> {
        self.canvas
            .filled_circle(
                to_pixel(center.x),
                to_pixel(center.y),
                to_pixel(radius),
                Color::from(color),
            )
            .map_err(|e| anyhow!(e))
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Rgb,
        width: u8,
    ) -> anyhow::Result<()> {
        self.canvas
            .thick_line(
                to_pixel(from.x),
                to_pixel(from.y),
                to_pixel(to.x),
                to_pixel(to.y),
                width,
                Color::from(color),
            )
            .map_err(|e| anyhow!(e))
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

/// Opens a resizable vsync'd window and returns it with its event pump.
pub fn init_graphics(display_config: DisplayConfig) -> anyhow::Result<(Graphics, EventPump)> {
    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

    let window = video_subsystem
        .window(
            display_config.title,
            display_config.width,
            display_config.height,
        )
        .position_centered()
        .resizable()
        .build()
        .context("failed to create window")?;
    let canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .context("failed to create canvas")?;
    let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
    info!(
        "Opened {}x{} window",
        display_config.width, display_config.height
    );

    Ok((
        Graphics {
            surface: Box::new(SdlSurface { canvas }),
        },
        event_pump,
    ))
}
