//! Geometry shared by the scene and the renderer.

/// Pixel rectangle of the drawing surface, anchored at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
}

impl Bounds {
	/// Build bounds, treating negative or non-finite sizes as empty.
	pub fn new(width: f64, height: f64) -> Self {
		let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
		Self {
			width: sanitize(width),
			height: sanitize(height),
		}
	}

	/// Whether `(x, y)` lies inside the closed rectangle `[0, width] x [0, height]`.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}
