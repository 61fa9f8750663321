#[cfg(feature = "sdl")]
pub mod sdl;

use crate::{
    body::{Bodies, Body},
    simulation::SimulationConfig,
};
use legion::system;
use log::warn;
use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const DARK_ORANGE: Rgb = Rgb(255, 140, 0);
    pub const CHARCOAL: Rgb = Rgb(0x33, 0x33, 0x33);
}

/// Whatever the bodies are drawn onto.
pub trait RenderSurface {
    /// Current size in pixels.
    fn size(&self) -> (u32, u32);
    fn clear(&mut self);
    fn fill_disc(&mut self, center: Vector2<f64>, radius: f64, color: Rgb) -> anyhow::Result<()>;
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Rgb,
        width: u8,
    ) -> anyhow::Result<()>;
    fn present(&mut self);
}

pub struct Graphics {
    pub surface: Box<dyn RenderSurface>,
}

#[system]
pub fn render_bodies(
    #[resource] graphics: &mut Graphics,
    #[resource] bodies: &Bodies,
    #[resource] simulation_config: &SimulationConfig,
) {
    draw_frame(
        graphics.surface.as_mut(),
        bodies,
        simulation_config.velocity_scale,
    );
}

/// Draw failures are logged and skipped so one bad body does not blank
/// the frame.
pub fn draw_frame(surface: &mut dyn RenderSurface, bodies: &[Body], velocity_scale: f64) {
    surface.clear();
    for (i, body) in bodies.iter().enumerate() {
        let drawn = body
            .draw(surface)
            .and_then(|_| body.draw_velocity(surface, velocity_scale));
        if let Err(e) = drawn {
            warn!("Failed to draw body {}: {}", i, e);
        }
    }
    surface.present();
}
