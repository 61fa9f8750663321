use crate::bounds::Bounds;
use crate::render::{RenderSurface, Rgb};
use nalgebra::Vector2;
use std::ops::{Deref, DerefMut};

const VELOCITY_LINE_WIDTH: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyColor {
    Normal,
    Colliding,
}

impl BodyColor {
    pub fn rgb(self) -> Rgb {
        match self {
            BodyColor::Normal => Rgb::ORANGE,
            BodyColor::Colliding => Rgb::DARK_ORANGE,
        }
    }
}

impl Default for BodyColor {
    fn default() -> Self {
        BodyColor::Normal
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub radius: f64,
    pub color: BodyColor,
}

impl Body {
    pub fn new(position: Vector2<f64>, radius: f64) -> Body {
        Body {
            position,
            velocity: Vector2::zeros(),
            radius,
            color: BodyColor::Normal,
        }
    }

    pub fn with_velocity(self, velocity: Vector2<f64>) -> Body {
        Body { velocity, ..self }
    }

    pub fn distance(&self, other: &Body) -> f64 {
        (self.position - other.position).norm()
    }

    /// Touching discs count as overlapping.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.distance(other) <= self.radius + other.radius
    }

    pub fn clamp_to_bounds(&mut self, bounds: &Bounds) {
        self.position.x = clamp(self.position.x, self.radius, bounds.width - self.radius);
        self.position.y = clamp(self.position.y, self.radius, bounds.height - self.radius);
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface) -> anyhow::Result<()> {
        surface.fill_disc(self.position, self.radius, self.color.rgb())
    }

    /// Line from the center along the velocity, stretched by `scale`.
    pub fn draw_velocity(&self, surface: &mut dyn RenderSurface, scale: f64) -> anyhow::Result<()> {
        surface.stroke_line(
            self.position,
            self.position + self.velocity * scale,
            Rgb::CHARCOAL,
            VELOCITY_LINE_WIDTH,
        )
    }
}

// The upper bound wins when the canvas is narrower than the disc.
fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Every body in the simulation, in placement order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bodies(pub Vec<Body>);

impl Deref for Bodies {
    type Target = Vec<Body>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Bodies {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
