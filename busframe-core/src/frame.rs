/// Frame loop state shared by every frontend
use std::time::Duration;

use crate::transform::RotationState;

/// Lifecycle of a frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    Terminated,
}

/// Per-frame pacing
#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    /// Rotation about the vertical axis applied each frame, in degrees
    pub degrees_per_frame: f32,
    /// Pause between frames
    pub frame_interval: Duration,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            degrees_per_frame: 1.0,
            frame_interval: Duration::from_millis(10),
        }
    }
}

/// Owns the accumulated scene rotation and the loop phase.
///
/// The rotation is never reset; it only grows while the loop runs.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    phase: Phase,
    rotation: RotationState,
    frames: u64,
    settings: LoopSettings,
}

impl FrameLoop {
    pub fn new(settings: LoopSettings) -> Self {
        Self {
            phase: Phase::Uninitialized,
            rotation: RotationState::zero(),
            frames: 0,
            settings,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn settings(&self) -> &LoopSettings {
        &self.settings
    }

    /// Enter the running phase once setup has finished
    pub fn start(&mut self) {
        match self.phase {
            Phase::Uninitialized => self.phase = Phase::Running,
            phase => log::debug!("ignoring start in phase {:?}", phase),
        }
    }

    /// A close request ends the loop for good
    pub fn close(&mut self) {
        if self.phase != Phase::Terminated {
            log::info!("closing after {} frames", self.frames);
            self.phase = Phase::Terminated;
        }
    }

    /// Apply one frame's rotation. Returns false when not running.
    pub fn advance(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.rotation.rotate(0.0, self.settings.degrees_per_frame, 0.0);
        self.frames += 1;
        true
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(LoopSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_requires_start() {
        let mut frame_loop = FrameLoop::default();
        assert_eq!(frame_loop.phase(), Phase::Uninitialized);
        assert!(!frame_loop.advance());
        assert_eq!(frame_loop.rotation(), RotationState::zero());

        frame_loop.start();
        assert!(frame_loop.advance());
        assert_eq!(frame_loop.rotation().y, 1.0);
    }

    #[test]
    fn test_rotation_accumulates_one_degree_per_frame() {
        let mut frame_loop = FrameLoop::default();
        frame_loop.start();

        let mut previous = frame_loop.rotation().y;
        for _ in 0..720 {
            frame_loop.advance();
            let current = frame_loop.rotation().y;
            assert_eq!(current - previous, 1.0);
            previous = current;
        }
        assert_eq!(frame_loop.rotation().y, 720.0);
        assert_eq!(frame_loop.frames(), 720);
    }

    #[test]
    fn test_full_turn_after_360_frames() {
        let mut frame_loop = FrameLoop::default();
        frame_loop.start();
        for _ in 0..360 {
            frame_loop.advance();
        }

        let rotation = frame_loop.rotation();
        assert_eq!(rotation.y, 360.0);
        assert_eq!(rotation.x, 0.0);
        assert!(rotation.same_orientation(&RotationState::zero()));
    }

    #[test]
    fn test_close_stops_frames() {
        let mut frame_loop = FrameLoop::default();
        frame_loop.start();
        frame_loop.advance();
        frame_loop.close();

        assert_eq!(frame_loop.phase(), Phase::Terminated);
        assert!(!frame_loop.advance());
        assert_eq!(frame_loop.frames(), 1);

        // No way back once terminated
        frame_loop.start();
        assert_eq!(frame_loop.phase(), Phase::Terminated);
    }

    #[test]
    fn test_default_settings() {
        let settings = LoopSettings::default();
        assert_eq!(settings.degrees_per_frame, 1.0);
        assert_eq!(settings.frame_interval, Duration::from_millis(10));
    }
}
