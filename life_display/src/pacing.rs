// pacing.rs - Frame timing: run mode at a fixed period, edit mode at half the refresh rate

use std::time::{Duration, Instant};

use life_engine::InputSnapshot;

use crate::config::FALLBACK_REFRESH_HZ;

/// Frame period while the simulation runs, before the speed factor.
pub const RUN_SECONDS_PER_FRAME: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTiming {
    /// A frame should be produced now.
    Due,
    /// Ask for a repaint after this long.
    Wait(Duration),
}

pub struct FramePacer {
    refresh_hz: u32,
    last_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new(refresh_hz: u32) -> Self {
        Self {
            refresh_hz: refresh_hz.max(2),
            last_frame: None,
        }
    }

    pub fn target_frame_time(&self, input: &InputSnapshot) -> Duration {
        if input.buttons.run_simulation {
            Duration::from_secs_f32(RUN_SECONDS_PER_FRAME * input.animation_speed_factor)
        } else {
            let update_hz = self.refresh_hz as f32 / 2.0;
            Duration::from_secs_f32(1.0 / update_hz)
        }
    }

    /// Decide whether a frame is due at `now`, recording it if so.
    pub fn poll(&mut self, now: Instant, target: Duration) -> FrameTiming {
        if let Some(last) = self.last_frame {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < target {
                return FrameTiming::Wait(target - elapsed);
            }
        }
        self.last_frame = Some(now);
        FrameTiming::Due
    }
}

/// Vertical refresh rate of the primary display, if the platform reports one.
#[cfg(target_os = "windows")]
pub fn monitor_refresh_hz() -> Option<u32> {
    use winapi::um::wingdi::{GetDeviceCaps, VREFRESH};
    use winapi::um::winuser::{GetDC, ReleaseDC};

    // SAFETY: a null window asks for the screen DC, which is released
    // before returning.
    let rate = unsafe {
        let dc = GetDC(std::ptr::null_mut());
        if dc.is_null() {
            return None;
        }
        let rate = GetDeviceCaps(dc, VREFRESH);
        ReleaseDC(std::ptr::null_mut(), dc);
        rate
    };
    // 0 and 1 mean "hardware default".
    (rate > 1).then_some(rate as u32)
}

#[cfg(not(target_os = "windows"))]
pub fn monitor_refresh_hz() -> Option<u32> {
    None
}

pub fn refresh_hz_or_fallback(configured: Option<u32>) -> u32 {
    configured
        .or_else(monitor_refresh_hz)
        .unwrap_or(FALLBACK_REFRESH_HZ)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_mode_runs_at_half_refresh() {
        let pacer = FramePacer::new(60);
        let input = InputSnapshot::default();
        let target = pacer.target_frame_time(&input);
        assert!((target.as_secs_f32() - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn run_mode_scales_with_speed_factor() {
        let pacer = FramePacer::new(60);
        let mut input = InputSnapshot::default();
        input.buttons.run_simulation = true;
        assert_eq!(pacer.target_frame_time(&input), Duration::from_millis(250));
        input.speed_up();
        assert_eq!(pacer.target_frame_time(&input), Duration::from_millis(125));
    }

    #[test]
    fn poll_waits_out_the_remainder() {
        let mut pacer = FramePacer::new(60);
        let start = Instant::now();
        let target = Duration::from_millis(100);
        assert_eq!(pacer.poll(start, target), FrameTiming::Due);
        assert_eq!(
            pacer.poll(start + Duration::from_millis(40), target),
            FrameTiming::Wait(Duration::from_millis(60))
        );
        assert_eq!(pacer.poll(start + Duration::from_millis(100), target), FrameTiming::Due);
    }

    #[test]
    fn configured_refresh_wins() {
        assert_eq!(refresh_hz_or_fallback(Some(144)), 144);
    }
}
