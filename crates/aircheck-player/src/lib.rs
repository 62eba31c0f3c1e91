//! # aircheck-player
//!
//! The Aircheck radio player UI: a facade component that coordinates an
//! audio transport bridge, a waveform progress display, a scrubber, the
//! playback controls, and a searchable transcript viewer.
//!
//! The facade never touches audio directly. It speaks to an
//! [`aircheck_transport::TransportHandle`] and keeps every piece of
//! user-visible playback state in a [`PlayerController`], which is plain
//! data and fully testable without a UI.

pub mod components;
pub mod controller;

pub use components::RadioPlayer;
pub use controller::{PlayerController, PLAYBACK_RATES, SKIP_SECONDS};
