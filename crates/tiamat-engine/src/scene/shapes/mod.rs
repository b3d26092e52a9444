pub mod circle;

use crate::paint::Color;

/// Stroke drawn along the edge of a shape.
///
/// `thickness` is signed: positive values grow the stroke outward from the
/// shape edge, negative values inset it inward over the fill. A thickness of
/// zero draws no stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub thickness: f32,
    pub color: Color,
}

impl Outline {
    #[inline]
    pub fn new(thickness: f32, color: Color) -> Self {
        Self { thickness, color }
    }

    /// Ring interval `[inner, outer]` relative to the shape edge at `radius`.
    ///
    /// Negative thickness insets the ring; positive thickness extends it.
    /// The inner bound never drops below zero.
    #[inline]
    pub fn ring(&self, radius: f32) -> (f32, f32) {
        let inner = (radius + self.thickness.min(0.0)).max(0.0);
        let outer = radius + self.thickness.max(0.0);
        (inner, outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_thickness_insets_the_ring() {
        let outline = Outline::new(-30.0, Color::YELLOW);
        assert_eq!(outline.ring(300.0), (270.0, 300.0));
    }

    #[test]
    fn positive_thickness_extends_the_ring() {
        let outline = Outline::new(5.0, Color::YELLOW);
        assert_eq!(outline.ring(100.0), (100.0, 105.0));
    }

    #[test]
    fn ring_inner_bound_is_clamped_at_zero() {
        // An inset wider than the radius would invert the ring.
        let outline = Outline::new(-50.0, Color::WHITE);
        assert_eq!(outline.ring(20.0), (0.0, 20.0));
    }
}
