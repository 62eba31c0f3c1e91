//! # Aircheck
//!
//! Desktop player for archived radio broadcasts, built with Dioxus.

// RSX macros generate code that triggers these warnings incorrectly
#![allow(unused_qualifications)]
#![allow(clippy::use_self)]

mod driver;

use aircheck_core::{AudioSource, PlayerConfig, TranscriptConfig};
use aircheck_player::RadioPlayer;
use aircheck_transport::TransportHandle;
use anyhow::Result;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use driver::PlaybackClock;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default window dimensions.
const WINDOW_WIDTH: f64 = 460.0;
const WINDOW_HEIGHT: f64 = 780.0;

/// Length of the bundled demo recording in seconds.
const DEMO_DURATION: f64 = 240.0;

/// Bundled demo transcript.
const DEMO_TRANSCRIPT: &str = include_str!("../assets/transcript.json");

/// Inline station logo so the demo works offline.
const DEMO_LOGO: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='48' height='48'><circle cx='24' cy='24' r='22' fill='%23b44a3c'/><text x='24' y='29' font-size='12' font-family='sans-serif' fill='white' text-anchor='middle'>90.1</text></svg>";

/// Inline waveform stand-in so the demo works offline.
const DEMO_WAVEFORM: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='800' height='80'><defs><pattern id='bars' width='6' height='80' patternUnits='userSpaceOnUse'><rect x='1' y='18' width='3' height='44' fill='%23888888'/></pattern></defs><rect width='800' height='80' fill='url(%23bars)'/></svg>";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aircheck_app=debug,aircheck_player=debug".into()),
        )
        .init();

    info!("Starting Aircheck v{}", env!("CARGO_PKG_VERSION"));

    let window = WindowBuilder::new()
        .with_title("Aircheck")
        .with_inner_size(dioxus::desktop::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_min_inner_size(dioxus::desktop::LogicalSize::new(360.0, 560.0));

    let config = Config::new()
        .with_window(window)
        .with_disable_context_menu(true)
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(App);

    Ok(())
}

/// Demo broadcast configuration.
fn demo_config() -> PlayerConfig {
    PlayerConfig::new(
        DEMO_LOGO,
        DEMO_WAVEFORM,
        vec![
            AudioSource::new(
                "https://archive.example/airchecks/morning-drive-1994-06-12.mp3",
                "audio/mpeg",
            ),
            AudioSource::new(
                "https://archive.example/airchecks/morning-drive-1994-06-12.ogg",
                "audio/ogg",
            ),
        ],
    )
    .with_title("Morning Drive")
    .with_date("June 12, 1994")
}

/// Main application component.
#[component]
fn App() -> Element {
    // Wire a simulated transport; the player only ever sees the handle
    let transport: TransportHandle = use_hook(|| {
        let (handle, driver) = aircheck_transport::channel();
        if let Err(e) = PlaybackClock::spawn(driver, DEMO_DURATION) {
            error!("failed to spawn playback clock: {e}");
        }
        handle
    });

    let transcript_config = use_hook(|| match TranscriptConfig::from_json(DEMO_TRANSCRIPT) {
        Ok(transcript) => Some(transcript),
        Err(e) => {
            error!("failed to parse bundled transcript: {e}");
            None
        }
    });

    rsx! {
        // Inject CSS
        style { {include_str!("../assets/styles.css")} }

        div { class: "app",
            RadioPlayer {
                config: demo_config(),
                transcript_config,
                transport,
            }
        }
    }
}
