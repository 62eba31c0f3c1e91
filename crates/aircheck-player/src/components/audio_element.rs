//! Non-visual bridge between the player and its audio transport.

use std::time::Duration;

use aircheck_core::AudioSource;
use aircheck_transport::{TransportEvent, TransportHandle};
use dioxus::prelude::*;
use tracing::error;

/// Connects the transport channels into the component tree.
///
/// Renders nothing. On mount it hands the configured sources and the
/// starting rate to the transport; from then on it polls transport
/// reports and forwards them through the callbacks. When the player
/// unmounts the transport is told to shut down.
#[component]
pub fn AudioElement(
    sources: Vec<AudioSource>,
    playback_rate: f64,
    transport: TransportHandle,
    on_time_update: EventHandler<f64>,
    on_duration_change: EventHandler<f64>,
) -> Element {
    use_hook(|| {
        if let Err(e) = transport.load(sources.clone()) {
            error!("failed to hand sources to the transport: {e}");
        }
        if let Err(e) = transport.set_rate(playback_rate) {
            error!("failed to set the starting rate: {e}");
        }
    });

    let transport_events = transport.clone();
    use_future(move || {
        let transport = transport_events.clone();
        async move {
            loop {
                while let Some(event) = transport.try_recv_event() {
                    match event {
                        TransportEvent::TimeUpdate(position) => on_time_update.call(position),
                        TransportEvent::DurationChange(duration) => {
                            on_duration_change.call(duration);
                        }
                    }
                }

                // Small delay to prevent busy loop
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    });

    let transport_on_drop = transport.clone();
    use_drop(move || {
        let _ = transport_on_drop.shutdown();
    });

    rsx! {}
}
