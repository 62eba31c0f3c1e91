//! # aircheck-transport
//!
//! The command/event contract between the player UI and whatever is
//! actually producing audio.
//!
//! The player never drives an audio backend directly. It holds a
//! [`TransportHandle`] and speaks through it: commands go down one
//! channel, position and duration reports come back up another. The
//! matching [`TransportDriver`] end is handed to the backend, which may
//! be a real decoder thread, a simulated clock, or a test script.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::time::Duration;

use aircheck_core::{AudioSource, Error, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};

pub use crossbeam_channel::RecvTimeoutError;

/// Commands the player sends to the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCommand {
    /// Load the given sources, in preference order.
    Load(Vec<AudioSource>),
    /// Begin or resume playback.
    Play,
    /// Pause playback.
    Pause,
    /// Seek to an absolute position in seconds.
    SeekTo(f64),
    /// Seek relative to the current position, in seconds.
    SeekBy(f64),
    /// Set the playback rate multiplier.
    SetRate(f64),
    /// Shut the transport down.
    Shutdown,
}

/// Reports the transport sends back to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportEvent {
    /// Playback position in seconds.
    TimeUpdate(f64),
    /// Media duration in seconds.
    DurationChange(f64),
}

/// The player's end of a transport channel pair.
///
/// Cloneable; all clones share the same underlying channels. Equality is
/// channel identity, so a handle stored in component props only compares
/// unequal when it is rewired to a different transport.
#[derive(Debug, Clone)]
pub struct TransportHandle {
    command_tx: Sender<TransportCommand>,
    event_rx: Receiver<TransportEvent>,
}

impl TransportHandle {
    /// Send a command to the transport.
    pub fn send(&self, command: TransportCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|e| Error::Transport(format!("failed to send command: {e}")))
    }

    /// Load the given sources, in preference order.
    pub fn load(&self, sources: Vec<AudioSource>) -> Result<()> {
        self.send(TransportCommand::Load(sources))
    }

    /// Begin or resume playback.
    pub fn play(&self) -> Result<()> {
        self.send(TransportCommand::Play)
    }

    /// Pause playback.
    pub fn pause(&self) -> Result<()> {
        self.send(TransportCommand::Pause)
    }

    /// Seek to an absolute position in seconds.
    pub fn seek_to(&self, position: f64) -> Result<()> {
        self.send(TransportCommand::SeekTo(position))
    }

    /// Seek relative to the current position, in seconds.
    pub fn seek_by(&self, delta: f64) -> Result<()> {
        self.send(TransportCommand::SeekBy(delta))
    }

    /// Set the playback rate multiplier.
    pub fn set_rate(&self, rate: f64) -> Result<()> {
        self.send(TransportCommand::SetRate(rate))
    }

    /// Shut the transport down.
    pub fn shutdown(&self) -> Result<()> {
        self.send(TransportCommand::Shutdown)
    }

    /// Try to receive a report without blocking.
    pub fn try_recv_event(&self) -> Option<TransportEvent> {
        self.event_rx.try_recv().ok()
    }
}

impl PartialEq for TransportHandle {
    fn eq(&self, other: &Self) -> bool {
        self.command_tx.same_channel(&other.command_tx)
            && self.event_rx.same_channel(&other.event_rx)
    }
}

/// The backend's end of a transport channel pair.
#[derive(Debug, Clone)]
pub struct TransportDriver {
    command_rx: Receiver<TransportCommand>,
    event_tx: Sender<TransportEvent>,
}

impl TransportDriver {
    /// Try to receive a command without blocking.
    pub fn try_recv_command(&self) -> Option<TransportCommand> {
        self.command_rx.try_recv().ok()
    }

    /// Receive a command, blocking up to `timeout`.
    ///
    /// Returns [`RecvTimeoutError::Disconnected`] once every handle has
    /// been dropped, which is a driver loop's signal to exit.
    pub fn recv_command_timeout(
        &self,
        timeout: Duration,
    ) -> std::result::Result<TransportCommand, RecvTimeoutError> {
        self.command_rx.recv_timeout(timeout)
    }

    /// Report the playback position in seconds.
    ///
    /// Send failures are swallowed; a driver outliving the player has
    /// nothing useful to do with them.
    pub fn emit_time(&self, position: f64) {
        let _ = self.event_tx.send(TransportEvent::TimeUpdate(position));
    }

    /// Report the media duration in seconds.
    pub fn emit_duration(&self, duration: f64) {
        let _ = self.event_tx.send(TransportEvent::DurationChange(duration));
    }
}

/// Create a connected handle/driver pair.
#[must_use]
pub fn channel() -> (TransportHandle, TransportDriver) {
    let (command_tx, command_rx) = unbounded();
    let (event_tx, event_rx) = unbounded();

    (
        TransportHandle {
            command_tx,
            event_rx,
        },
        TransportDriver {
            command_rx,
            event_tx,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_reach_driver_in_order() {
        let (handle, driver) = channel();
        let sources = vec![AudioSource::new("https://example.org/show.mp3", "audio/mpeg")];

        handle.load(sources.clone()).unwrap();
        handle.play().unwrap();
        handle.seek_to(42.0).unwrap();
        handle.seek_by(-10.0).unwrap();
        handle.set_rate(1.25).unwrap();
        handle.pause().unwrap();

        assert_eq!(
            driver.try_recv_command(),
            Some(TransportCommand::Load(sources))
        );
        assert_eq!(driver.try_recv_command(), Some(TransportCommand::Play));
        assert_eq!(
            driver.try_recv_command(),
            Some(TransportCommand::SeekTo(42.0))
        );
        assert_eq!(
            driver.try_recv_command(),
            Some(TransportCommand::SeekBy(-10.0))
        );
        assert_eq!(
            driver.try_recv_command(),
            Some(TransportCommand::SetRate(1.25))
        );
        assert_eq!(driver.try_recv_command(), Some(TransportCommand::Pause));
        assert_eq!(driver.try_recv_command(), None);
    }

    #[test]
    fn test_events_reach_handle() {
        let (handle, driver) = channel();

        driver.emit_duration(200.0);
        driver.emit_time(50.0);

        assert_eq!(
            handle.try_recv_event(),
            Some(TransportEvent::DurationChange(200.0))
        );
        assert_eq!(
            handle.try_recv_event(),
            Some(TransportEvent::TimeUpdate(50.0))
        );
        assert_eq!(handle.try_recv_event(), None);
    }

    #[test]
    fn test_send_fails_after_driver_drops() {
        let (handle, driver) = channel();
        drop(driver);

        assert!(matches!(handle.play(), Err(Error::Transport(_))));
    }

    #[test]
    fn test_driver_sees_disconnect_after_handle_drops() {
        let (handle, driver) = channel();
        drop(handle);

        assert_eq!(
            driver.recv_command_timeout(Duration::from_millis(10)),
            Err(RecvTimeoutError::Disconnected)
        );
    }

    #[test]
    fn test_emit_after_handle_drop_is_silent() {
        let (handle, driver) = channel();
        drop(handle);

        driver.emit_time(1.0);
    }

    #[test]
    fn test_handle_equality_is_channel_identity() {
        let (handle_a, _driver_a) = channel();
        let (handle_b, _driver_b) = channel();

        assert_eq!(handle_a, handle_a.clone());
        assert_ne!(handle_a, handle_b);
    }
}
