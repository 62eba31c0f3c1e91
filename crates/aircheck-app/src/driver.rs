//! Simulated transport for the demo app.

use std::thread;
use std::time::{Duration, Instant};

use aircheck_transport::{RecvTimeoutError, TransportCommand, TransportDriver};
use tracing::{debug, info};

/// How often the clock reports its position.
const TICK: Duration = Duration::from_millis(250);

/// A clock that obeys transport commands.
///
/// Stands in for a real audio backend: `Load` fixes the duration, `Play`
/// starts the clock, seeks move it, and positions advance with wall time
/// scaled by the playback rate.
pub struct PlaybackClock {
    driver: TransportDriver,
    duration: f64,
    position: f64,
    rate: f64,
    playing: bool,
}

impl PlaybackClock {
    #[must_use]
    pub const fn new(driver: TransportDriver, duration: f64) -> Self {
        Self {
            driver,
            duration,
            position: 0.0,
            rate: 1.0,
            playing: false,
        }
    }

    /// Spawn the clock on its own thread.
    pub fn spawn(driver: TransportDriver, duration: f64) -> std::io::Result<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name("playback-clock".to_string())
            .spawn(move || Self::new(driver, duration).run())
    }

    /// Run until told to shut down or every player handle is gone.
    pub fn run(mut self) {
        info!("playback clock started");

        let mut last_tick = Instant::now();

        loop {
            match self.driver.recv_command_timeout(TICK) {
                Ok(TransportCommand::Shutdown) => {
                    info!("playback clock shutting down");
                    break;
                }
                Ok(command) => {
                    let was_playing = self.playing;
                    self.handle_command(command);
                    if self.playing && !was_playing {
                        // Idle time spent paused must not count as playback
                        last_tick = Instant::now();
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("command channel closed, shutting down");
                    break;
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= TICK {
                last_tick = Instant::now();
                if self.playing {
                    self.advance(elapsed.as_secs_f64());
                }
            }
        }
    }

    fn handle_command(&mut self, command: TransportCommand) {
        match command {
            TransportCommand::Load(sources) => {
                debug!("loaded {} source(s)", sources.len());
                self.position = 0.0;
                self.playing = false;
                self.driver.emit_duration(self.duration);
                self.driver.emit_time(self.position);
            }
            TransportCommand::Play => self.playing = true,
            TransportCommand::Pause => self.playing = false,
            TransportCommand::SeekTo(position) => {
                self.position = position.clamp(0.0, self.duration);
                self.driver.emit_time(self.position);
            }
            TransportCommand::SeekBy(delta) => {
                self.position = (self.position + delta).clamp(0.0, self.duration);
                self.driver.emit_time(self.position);
            }
            TransportCommand::SetRate(rate) => self.rate = rate.max(0.0),
            TransportCommand::Shutdown => {
                // Handled in the main loop
            }
        }
    }

    fn advance(&mut self, elapsed: f64) {
        self.position = (self.position + elapsed * self.rate).min(self.duration);
        self.driver.emit_time(self.position);

        if self.position >= self.duration {
            debug!("reached end of recording");
            self.playing = false;
        }
    }
}
