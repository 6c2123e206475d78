// input.rs - Per-frame input snapshots supplied by the host

use std::num::NonZeroU32;

/// Bounds on [`InputSnapshot::animation_speed_factor`].
pub const MIN_SPEED_FACTOR: f32 = 1.0 / 64.0;
pub const MAX_SPEED_FACTOR: f32 = 64.0;

/// Named button states sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    pub mouse_left: bool,
    pub mouse_right: bool,

    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,

    pub run_simulation: bool,
    pub reset: bool,
}

impl Buttons {
    /// Primary button went from released to held since `previous`.
    pub fn primary_clicked(&self, previous: &Buttons) -> bool {
        self.mouse_left && !previous.mouse_left
    }
}

/// Pointer and keyboard state for one frame.
///
/// The host keeps two of these (current and previous) so the engine can
/// tell a fresh press from a held button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSnapshot {
    /// Pointer position in host pixels, relative to the surface origin.
    pub mouse_x: i32,
    pub mouse_y: i32,
    /// Integer display scaling between surface pixels and host pixels.
    pub scaling_factor: NonZeroU32,
    /// Multiplier on the run-mode frame period; smaller is faster.
    pub animation_speed_factor: f32,
    pub buttons: Buttons,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            mouse_x: 0,
            mouse_y: 0,
            scaling_factor: NonZeroU32::MIN,
            animation_speed_factor: 1.0,
            buttons: Buttons::default(),
        }
    }
}

impl InputSnapshot {
    /// Copy this frame's buttons into the previous snapshot once the frame
    /// has been processed.
    pub fn carry_buttons_into(&self, previous: &mut InputSnapshot) {
        previous.buttons = self.buttons;
    }

    pub fn speed_up(&mut self) {
        self.animation_speed_factor = (self.animation_speed_factor * 0.5).max(MIN_SPEED_FACTOR);
    }

    pub fn slow_down(&mut self) {
        self.animation_speed_factor = (self.animation_speed_factor / 0.5).min(MAX_SPEED_FACTOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_is_a_release_to_press_edge() {
        let released = Buttons::default();
        let held = Buttons {
            mouse_left: true,
            ..Buttons::default()
        };
        assert!(held.primary_clicked(&released));
        assert!(!held.primary_clicked(&held));
        assert!(!released.primary_clicked(&held));
    }

    #[test]
    fn carrying_buttons_keeps_pointer_of_previous() {
        let mut previous = InputSnapshot {
            mouse_x: 7,
            ..InputSnapshot::default()
        };
        let mut current = InputSnapshot::default();
        current.buttons.run_simulation = true;
        current.carry_buttons_into(&mut previous);
        assert!(previous.buttons.run_simulation);
        assert_eq!(previous.mouse_x, 7);
    }

    #[test]
    fn speed_steps_are_halving() {
        let mut input = InputSnapshot::default();
        input.speed_up();
        assert_eq!(input.animation_speed_factor, 0.5);
        input.slow_down();
        input.slow_down();
        assert_eq!(input.animation_speed_factor, 2.0);
        for _ in 0..20 {
            input.slow_down();
        }
        assert_eq!(input.animation_speed_factor, MAX_SPEED_FACTOR);
    }
}
