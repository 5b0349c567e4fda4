//! Windowless driver for the animator.
//!
//! The loop only advances while the animator has a frame request pending,
//! the same way a display-refresh callback would only fire when asked.

use field_core::{
    animator::{Animator, FrameTicker},
    config::FieldConfig,
    render::CommandBuffer,
    types::RunState,
};

#[derive(Clone, Debug)]
pub struct HeadlessOptions {
    pub frames: u32,
    pub width: f32,
    pub height: f32,
    pub reduced_motion: bool,
}

/// Counts outstanding frame requests.
#[derive(Default)]
struct PendingTicker {
    pending: u32,
}

impl FrameTicker for PendingTicker {
    fn request_frame(&mut self) {
        self.pending += 1;
    }
}

impl PendingTicker {
    fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

#[derive(Debug)]
pub struct HeadlessReport {
    pub frames_drawn: u32,
    pub final_state: RunState,
    pub last_lines: usize,
}

/// Runs up to `opts.frames` frames and reports what happened.
pub fn run(cfg: FieldConfig, opts: &HeadlessOptions) -> HeadlessReport {
    let mut animator = Animator::new(cfg);
    let mut surface = CommandBuffer::new(opts.width, opts.height);
    let mut ticker = PendingTicker::default();

    animator.start(Some(&mut surface), opts.reduced_motion, &mut ticker);

    let mut frames_drawn = 0;
    let log_every = (opts.frames / 10).max(1);
    while frames_drawn < opts.frames && ticker.take() {
        if !animator.frame(&mut surface, &mut ticker) {
            break;
        }
        frames_drawn += 1;
        if frames_drawn % log_every == 0 {
            log::info!(
                "frame {frames_drawn}: {} disks, {} lines",
                surface.circles(),
                surface.lines()
            );
        }
    }

    HeadlessReport {
        frames_drawn,
        final_state: animator.state(),
        last_lines: surface.lines(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(frames: u32, reduced_motion: bool) -> HeadlessOptions {
        HeadlessOptions {
            frames,
            width: 640.0,
            height: 480.0,
            reduced_motion,
        }
    }

    fn seeded() -> FieldConfig {
        FieldConfig {
            seed: Some(9),
            ..FieldConfig::default()
        }
    }

    #[test]
    fn runs_requested_number_of_frames() {
        let report = run(seeded(), &opts(30, false));

        assert_eq!(report.frames_drawn, 30);
        assert_eq!(report.final_state, RunState::Running);
        assert!(report.last_lines <= 25 * 24 / 2);
    }

    #[test]
    fn reduced_motion_draws_nothing() {
        let report = run(seeded(), &opts(30, true));

        assert_eq!(report.frames_drawn, 0);
        assert_eq!(report.final_state, RunState::Disabled);
        assert_eq!(report.last_lines, 0);
    }
}
