use crate::animation::ease::Ease;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{SweepError, SweepResult};
use std::time::Duration;

/// Handle for one timed drive started by [`ProgressDriver::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DriveId(u64);

#[derive(Clone, Copy, Debug)]
struct Drive {
    id: DriveId,
    started_at: Duration,
    duration: Duration,
    ease: Ease,
}

/// Source of sweep progress values.
///
/// Progress comes either from a timed drive (0 to 1 over a duration, ticked cooperatively by the
/// host) or from values pushed directly, e.g. by a slider. Only the latest drive is ever live:
/// starting a new one or pushing a value cancels whatever was running, and ticks addressed to a
/// superseded drive are ignored. Time is a logical clock supplied by the caller, so the driver
/// never sleeps or reads the system time.
#[derive(Debug, Default)]
pub struct ProgressDriver {
    next_id: u64,
    active: Option<Drive>,
    progress: f64,
}

impl ProgressDriver {
    /// Idle driver at progress `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last emitted progress value.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// `true` while a timed drive is live.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the live drive, if any.
    pub fn current(&self) -> Option<DriveId> {
        self.active.map(|d| d.id)
    }

    /// Start sweeping from `0` to `1` over `duration`, beginning at `now`.
    ///
    /// Any live drive is cancelled. Progress resets to `0` immediately.
    pub fn start(&mut self, now: Duration, duration: Duration, ease: Ease) -> SweepResult<DriveId> {
        if duration.is_zero() {
            return Err(SweepError::validation("drive duration must be > 0"));
        }
        self.cancel();
        let id = DriveId(self.next_id);
        self.next_id += 1;
        self.active = Some(Drive {
            id,
            started_at: now,
            duration,
            ease,
        });
        self.progress = 0.0;
        tracing::trace!(drive = id.0, ?duration, ?ease, "drive started");
        Ok(id)
    }

    /// Advance the live drive to `now` and return the new progress.
    ///
    /// Returns `None` when nothing is running. The drive ends itself on the tick that reaches its
    /// duration, emitting exactly `1.0`. Within a drive the emitted values never decrease, even
    /// if `now` goes backwards.
    pub fn tick(&mut self, now: Duration) -> Option<f64> {
        let drive = self.active?;
        let elapsed = now.saturating_sub(drive.started_at);
        let t = elapsed.as_secs_f64() / drive.duration.as_secs_f64();
        if t >= 1.0 {
            self.active = None;
            self.progress = 1.0;
            tracing::trace!(drive = drive.id.0, "drive finished");
        } else {
            self.progress = self.progress.max(drive.ease.apply(t));
        }
        Some(self.progress)
    }

    /// Like [`Self::tick`], but only if `id` is still the live drive.
    pub fn tick_drive(&mut self, id: DriveId, now: Duration) -> Option<f64> {
        if self.current() != Some(id) {
            return None;
        }
        self.tick(now)
    }

    /// Stop the live drive. The last emitted progress stays in effect.
    pub fn cancel(&mut self) -> Option<DriveId> {
        let drive = self.active.take()?;
        tracing::trace!(drive = drive.id.0, progress = self.progress, "drive cancelled");
        Some(drive.id)
    }

    /// Push a progress value directly, cancelling any drive.
    ///
    /// The value is saturated into `[0, 1]` (NaN becomes `0`) and returned.
    pub fn set_progress(&mut self, value: f64) -> f64 {
        self.cancel();
        self.progress = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        self.progress
    }

    /// Frame-by-frame progress for rendering a whole drive offline.
    pub fn frames(duration: Duration, fps: Fps, ease: Ease) -> SweepResult<DriveFrames> {
        if duration.is_zero() {
            return Err(SweepError::validation("drive duration must be > 0"));
        }
        let secs = duration.as_secs_f64();
        Ok(DriveFrames {
            fps,
            secs,
            ease,
            next: 0,
            last: fps.frames_covering(secs),
        })
    }
}

/// Iterator over `(frame, progress)` pairs of an offline drive.
///
/// Frame `i` sits at time `i / fps`. The sequence starts at progress `0` and its final frame is
/// the first one at or past the duration, which always reports exactly `1.0`.
#[derive(Clone, Debug)]
pub struct DriveFrames {
    fps: Fps,
    secs: f64,
    ease: Ease,
    next: u64,
    last: u64,
}

impl Iterator for DriveFrames {
    type Item = (FrameIndex, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let i = self.next;
        self.next += 1;
        let progress = if i == self.last {
            1.0
        } else {
            self.ease.apply(i as f64 / self.fps.as_f64() / self.secs)
        };
        Some((FrameIndex(i), progress))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last + 1).saturating_sub(self.next) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DriveFrames {}

/// Progress for a slider at `position` out of `max` (the demo slider runs `0..=100`).
pub fn progress_from_slider(position: u32, max: u32) -> SweepResult<f64> {
    if max == 0 {
        return Err(SweepError::validation("slider max must be > 0"));
    }
    Ok((f64::from(position) / f64::from(max)).min(1.0))
}

/// Two-decimal label for a progress value.
pub fn format_progress(progress: f64) -> String {
    format!("{progress:.2}")
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
