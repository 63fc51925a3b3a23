//! Colors used by the screensaver.
//!
//! Particles carry an [`Hsl`] color picked at creation; connecting lines use a
//! single RGBA [`Color`].

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque white.
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	/// Opaque color from channel values.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex notation without the alpha channel.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Hue/saturation/lightness color as accepted by CSS `hsl()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
	/// Hue in degrees, `[0, 360)`.
	pub hue: f64,
	/// Saturation in percent.
	pub saturation: f64,
	/// Lightness in percent.
	pub lightness: f64,
}

impl Hsl {
	/// Color from hue in degrees and percentages.
	pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
		Self {
			hue,
			saturation,
			lightness,
		}
	}

	/// CSS `hsl()` notation.
	pub fn to_css(self) -> String {
		format!(
			"hsl({}, {}%, {}%)",
			self.hue, self.saturation, self.lightness
		)
	}
}
