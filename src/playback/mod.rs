//! Playback driver for radar frame sequences
//!
//! Two scheduling policies drive one state machine:
//!
//! - [`SchedulingPolicy::Interval`]: one frame per step, with the
//!   inter-step delay divided by the speed multiplier. This is the
//!   timer-driven control path; speed changes timing, never stride.
//! - [`SchedulingPolicy::RenderTick`]: a fixed-rate tick that advances the
//!   cursor by the speed multiplier itself, accumulating fractional steps
//!   and wrapping at an assumed frame count independent of the actual
//!   sequence length. This is the render-loop path.
//!
//! The two are not equivalent: doubling the speed halves the wall-clock
//! delay under `Interval` but doubles the per-tick stride under
//! `RenderTick`. Both behaviors are preserved distinctly.
//!
//! Cancellation is cooperative. The loop re-checks the playing flag at the
//! top of every scheduled step, so a step scheduled before `pause` or
//! `stop` can never resurrect playback afterwards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::frames::{FrameSequence, RadarFrame, DEFAULT_FRAME_COUNT};

/// How the playback loop schedules frame advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingPolicy {
    /// Deliver, advance by one, sleep `base_delay / speed`.
    Interval,
    /// Advance by `speed` per fixed tick, wrap at `assumed_frame_count`.
    RenderTick,
}

/// Playback tuning, serializable as part of the viewer configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub policy: SchedulingPolicy,
    /// Per-frame delay at speed 1.0 under `Interval`
    pub base_delay: Duration,
    /// Tick period under `RenderTick`
    pub tick: Duration,
    /// Wrap point for the render-tick cursor, independent of the actual
    /// sequence length
    pub assumed_frame_count: usize,
    /// Initial speed multiplier
    pub speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            policy: SchedulingPolicy::Interval,
            base_delay: Duration::from_millis(200),
            tick: Duration::from_millis(16),
            assumed_frame_count: DEFAULT_FRAME_COUNT,
            speed: 1.0,
        }
    }
}

/// State shared between the driver handle and its scheduled loop.
struct Shared {
    playing: AtomicBool,
    /// Fractional under `RenderTick`, whole under `Interval`
    cursor: Mutex<f64>,
    speed: Mutex<f64>,
}

impl Shared {
    fn cursor(&self) -> f64 {
        self.cursor.lock().map(|c| *c).unwrap_or(0.0)
    }

    fn set_cursor(&self, value: f64) {
        if let Ok(mut cursor) = self.cursor.lock() {
            *cursor = value;
        }
    }

    fn speed(&self) -> f64 {
        self.speed.lock().map(|s| *s).unwrap_or(1.0)
    }

    fn set_speed(&self, value: f64) {
        if let Ok(mut speed) = self.speed.lock() {
            *speed = value;
        }
    }
}

/// Drives playback over a frame sequence.
///
/// Owns the cursor and the playing flag; `play` spawns a self-rescheduling
/// loop on the tokio runtime that delivers `(frame, index, total)` to the
/// callback per step. Whatever length the sequence actually has is
/// authoritative - a sequence shorter than requested just loops sooner.
pub struct PlaybackDriver {
    sequence: Arc<FrameSequence>,
    shared: Arc<Shared>,
    config: PlaybackConfig,
    step_task: Option<JoinHandle<()>>,
}

impl PlaybackDriver {
    pub fn new(sequence: FrameSequence, config: PlaybackConfig) -> Self {
        let speed = if config.speed > 0.0 { config.speed } else { 1.0 };
        Self {
            sequence: Arc::new(sequence),
            shared: Arc::new(Shared {
                playing: AtomicBool::new(false),
                cursor: Mutex::new(0.0),
                speed: Mutex::new(speed),
            }),
            config,
            step_task: None,
        }
    }

    /// Replace the sequence wholesale.
    ///
    /// Playback stops and the cursor resets; sequences are rebuilt, never
    /// patched, on any parameter change.
    pub fn load(&mut self, sequence: FrameSequence) {
        self.stop();
        self.sequence = Arc::new(sequence);
    }

    /// Begin playback, invoking `on_frame(frame, index, total)` per step.
    ///
    /// No-op when already playing or when the sequence is empty.
    pub fn play<F>(&mut self, on_frame: F)
    where
        F: Fn(&RadarFrame, usize, usize) + Send + Sync + 'static,
    {
        if self.sequence.is_empty() || self.shared.playing.swap(true, Ordering::SeqCst) {
            return;
        }

        let sequence = Arc::clone(&self.sequence);
        let shared = Arc::clone(&self.shared);
        let config = self.config;

        self.step_task = Some(match config.policy {
            SchedulingPolicy::Interval => {
                tokio::spawn(run_interval(sequence, shared, config, on_frame))
            }
            SchedulingPolicy::RenderTick => {
                tokio::spawn(run_render_tick(sequence, shared, config, on_frame))
            }
        });
    }

    /// Halt playback, keeping the cursor where it is.
    ///
    /// The pending scheduled step is cancelled; even if it were already
    /// due, the loop's flag check keeps it from delivering.
    pub fn pause(&mut self) {
        self.shared.playing.store(false, Ordering::SeqCst);
        if let Some(task) = self.step_task.take() {
            task.abort();
        }
    }

    /// Halt playback and rewind to the first frame.
    pub fn stop(&mut self) {
        self.pause();
        self.shared.set_cursor(0.0);
    }

    /// Update the speed multiplier; the next scheduled delay computation
    /// picks it up without a restart. Non-positive values are ignored.
    pub fn set_speed(&self, multiplier: f64) {
        if multiplier > 0.0 {
            self.shared.set_speed(multiplier);
        }
    }

    /// Seek directly to a frame.
    ///
    /// Out-of-range indices leave the cursor untouched and return `None`.
    pub fn jump_to_frame(&self, index: usize) -> Option<RadarFrame> {
        let frame = self.sequence.get(index)?;
        self.shared.set_cursor(index as f64);
        Some(frame.clone())
    }

    /// Frame under the cursor, if the cursor is on one.
    pub fn current_frame(&self) -> Option<&RadarFrame> {
        self.sequence.get(self.shared.cursor() as usize)
    }

    pub fn frame_count(&self) -> usize {
        self.sequence.len()
    }

    pub fn cursor(&self) -> usize {
        self.shared.cursor() as usize
    }

    pub fn is_playing(&self) -> bool {
        self.shared.playing.load(Ordering::SeqCst)
    }

    pub fn speed(&self) -> f64 {
        self.shared.speed()
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        self.pause();
    }
}

/// Variable-delay single-step loop: wrap, deliver, advance by one, sleep.
async fn run_interval<F>(
    sequence: Arc<FrameSequence>,
    shared: Arc<Shared>,
    config: PlaybackConfig,
    on_frame: F,
) where
    F: Fn(&RadarFrame, usize, usize) + Send + Sync + 'static,
{
    loop {
        if !shared.playing.load(Ordering::SeqCst) {
            return;
        }

        let total = sequence.len();
        let mut index = shared.cursor() as usize;
        if index >= total {
            index = 0;
        }

        if let Some(frame) = sequence.get(index) {
            on_frame(frame, index, total);
        }
        shared.set_cursor((index + 1) as f64);

        // Speed divides the delay, not the step
        let delay = config.base_delay.div_f64(shared.speed());
        tokio::time::sleep(delay).await;
    }
}

/// Fixed-rate fractional-step loop: advance by `speed`, wrap at the
/// assumed count, then display whichever frame the cursor floors to.
async fn run_render_tick<F>(
    sequence: Arc<FrameSequence>,
    shared: Arc<Shared>,
    config: PlaybackConfig,
    on_frame: F,
) where
    F: Fn(&RadarFrame, usize, usize) + Send + Sync + 'static,
{
    let wrap = config.assumed_frame_count as f64;

    loop {
        if !shared.playing.load(Ordering::SeqCst) {
            return;
        }

        // Advance first, then display - the render loop's original order
        let mut cursor = shared.cursor() + shared.speed();
        if cursor >= wrap {
            cursor = 0.0;
        }
        shared.set_cursor(cursor);

        // The assumed count can point past the end of a short sequence;
        // those ticks advance without delivering
        let index = cursor as usize;
        if let Some(frame) = sequence.get(index) {
            on_frame(frame, index, sequence.len());
        }

        tokio::time::sleep(config.tick).await;
    }
}
