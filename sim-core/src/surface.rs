//! Drawing surface contract consumed by the simulation.
//!
//! The core issues every draw call through [`Surface`] and never names a
//! concrete canvas. The viewer implements the trait over an egui painter;
//! tests implement it with recording or no-op doubles.

use glam::Vec2;

/// An RGB color with an alpha channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same hue with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// Minimal drawing surface the simulation renders onto.
///
/// Coordinates are surface-local: `(0, 0)` is the top-left corner, `x`
/// grows to the right and `y` grows downward. `height` doubles as the
/// respawn boundary — a particle whose `y` exceeds it is reset into the
/// spawn band.
pub trait Surface {
    /// Surface width in surface-local units.
    fn width(&self) -> f32;

    /// Surface height in surface-local units.
    fn height(&self) -> f32;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Draw a line segment from `a` to `b`.
    fn line(&mut self, a: Vec2, b: Vec2, color: Rgba);
}
