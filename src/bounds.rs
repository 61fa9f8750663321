/// Canvas size that bodies are kept inside of.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn from_size(width: u32, height: u32) -> Bounds {
        Bounds {
            width: width as f64,
            height: height as f64,
        }
    }

    /// Replaces the canvas size after the window reports a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Bounds::from_size(width, height);
    }

    pub fn contains_disc(&self, x: f64, y: f64, radius: f64) -> bool {
        x >= radius && x <= self.width - radius && y >= radius && y <= self.height - radius
    }
}
