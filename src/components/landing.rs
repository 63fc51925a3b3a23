//! Static page shown once the screensaver is dismissed.

use leptos::prelude::*;

/// A single highlight card on the landing page.
struct Feature {
	icon: &'static str,
	title: &'static str,
	blurb: &'static str,
}

const FEATURES: [Feature; 3] = [
	Feature {
		icon: "🎨",
		title: "Custom Animation",
		blurb: "Particle system with bouncing balls and connecting lines",
	},
	Feature {
		icon: "⚡",
		title: "Pure Rust",
		blurb: "Canvas drawing straight from WebAssembly, no animation libraries",
	},
	Feature {
		icon: "🎯",
		title: "Interactive",
		blurb: "Click to skip or wait for auto-transition",
	},
];

/// Landing page with a control to bring the screensaver back.
#[component]
pub fn LandingPage(#[prop(into)] on_restart: Callback<()>) -> impl IntoView {
	view! {
		<div class="app">
			<header class="app-header">
				<h1>"Welcome to Disco Test with CI CD working"</h1>
				<p>"Your Rust website with custom screensaver"</p>
			</header>

			<main class="app-main">
				<div class="content">
					<h2>"About This Project"</h2>
					<p>
						"This is a Leptos website that features a custom screensaver animation \
						drawn on an HTML5 canvas. No external libraries were used for the \
						animation effects."
					</p>

					<div class="features">
						{FEATURES
							.iter()
							.map(|f| {
								view! {
									<div class="feature">
										<h3>{format!("{} {}", f.icon, f.title)}</h3>
										<p>{f.blurb}</p>
									</div>
								}
							})
							.collect_view()}
					</div>

					<button class="restart-button" on:click=move |_| on_restart.run(())>
						"Restart Screensaver"
					</button>
				</div>
			</main>
		</div>
	}
}
