//! disco-screensaver: landing page fronted by a particle screensaver.
//!
//! This crate provides a WASM-based page that opens on a canvas animation of
//! bouncing, interlinked particles and reveals a static landing page after a
//! click or a timeout.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Entropy for `rand` on wasm32 comes from getrandom's `js` backend.
use getrandom as _;

pub mod components;

pub use components::landing::LandingPage;
pub use components::screensaver::{DismissReason, Lifecycle, Screensaver, ScreensaverConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("disco: logging initialized");
}

/// Main application component.
/// Shows the screensaver first and swaps to the landing page once it is dismissed.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let lifecycle = RwSignal::new(Lifecycle::new());

	let on_dismiss = Callback::new(move |reason: DismissReason| {
		if lifecycle
			.try_maybe_update(|l| {
				let changed = l.dismiss(reason);
				(changed, changed)
			})
			.unwrap_or(false) {
			info!("disco: showing landing page after {}", reason);
		}
	});

	let on_restart = Callback::new(move |_: ()| {
		if lifecycle
			.try_maybe_update(|l| {
				let changed = l.restart();
				(changed, changed)
			})
			.unwrap_or(false) {
			info!(
				"disco: screensaver restarted (activation {})",
				lifecycle.with_untracked(Lifecycle::activations)
			);
		}
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Disco Test" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Show
			when=move || lifecycle.with(Lifecycle::is_active)
			fallback=move || view! { <LandingPage on_restart=on_restart /> }
		>
			<Screensaver on_dismiss=on_dismiss config=ScreensaverConfig::default() />
		</Show>
	}
}
