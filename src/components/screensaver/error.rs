//! Host-environment failures when mounting the screensaver.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// The browser refused something the screensaver needs to run.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// `window` is not available.
	#[error("no global window")]
	NoWindow,

	/// `innerWidth`/`innerHeight` could not be read as numbers.
	#[error("viewport size unavailable")]
	ViewportUnavailable,

	/// The canvas did not hand out a 2D context.
	#[error("2d drawing context unavailable: {0}")]
	ContextUnavailable(String),

	/// A frame or timer request was refused.
	#[error("failed to schedule {what}: {reason}")]
	Schedule {
		/// What was being scheduled.
		what: &'static str,
		/// Message from the browser.
		reason: String,
	},
}

impl SurfaceError {
	pub(crate) fn schedule(what: &'static str, err: JsValue) -> Self {
		Self::Schedule {
			what,
			reason: describe(&err),
		}
	}
}

pub(crate) fn describe(err: &JsValue) -> String {
	err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages_name_the_failure() {
		assert_eq!(SurfaceError::NoWindow.to_string(), "no global window");
		assert_eq!(
			SurfaceError::ContextUnavailable("null".into()).to_string(),
			"2d drawing context unavailable: null"
		);
		let err = SurfaceError::Schedule {
			what: "animation frame",
			reason: "blocked".into(),
		};
		assert_eq!(err.to_string(), "failed to schedule animation frame: blocked");
	}
}
