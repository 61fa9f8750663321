use nalgebra::Vector2;

/// Overlap between two bodies found by the pair test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Distance between the two centers.
    pub distance: f64,
    /// Unit vector pointing from the second center to the first.
    /// `None` when the centers coincide.
    pub normal: Option<Vector2<f64>>,
}

impl Contact {
    pub fn between(delta: Vector2<f64>) -> Contact {
        let distance = delta.norm();
        let normal = if distance > 0. {
            Some(delta / distance)
        } else {
            None
        };
        Contact { distance, normal }
    }
}
