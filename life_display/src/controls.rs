// controls.rs - Translate egui input into the engine's per-frame snapshot

use std::num::NonZeroU32;

use eframe::egui;
use egui::{Key, Pos2};
use life_engine::InputSnapshot;

/// Window-level requests raised by the keyboard this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HostCommands {
    pub toggle_pause: bool,
    pub toggle_fullscreen: bool,
    pub quit: bool,
}

/// Update `input` in place from this frame's egui input.
///
/// Held keys and buttons are sampled; Space, "+" and "-" act on key press.
/// The pointer is stored relative to `origin`, the surface's top-left corner
/// on screen.
pub fn sample(ctx: &egui::Context, input: &mut InputSnapshot, origin: Pos2) -> HostCommands {
    ctx.input(|i| {
        if let Some(pos) = i.pointer.latest_pos() {
            input.mouse_x = (pos.x - origin.x).floor() as i32;
            input.mouse_y = (pos.y - origin.y).floor() as i32;
        }

        let buttons = &mut input.buttons;
        buttons.mouse_left = i.pointer.primary_down();
        buttons.mouse_right = i.pointer.secondary_down();

        buttons.up = i.key_down(Key::W);
        buttons.left = i.key_down(Key::A);
        buttons.down = i.key_down(Key::S);
        buttons.right = i.key_down(Key::D);
        buttons.reset = i.key_down(Key::R);

        if i.key_pressed(Key::Space) {
            buttons.run_simulation = !buttons.run_simulation;
        }

        for event in &i.events {
            if let egui::Event::Text(text) = event {
                match text.as_str() {
                    "+" | "=" => input.speed_up(),
                    "-" => input.slow_down(),
                    _ => {}
                }
            }
        }

        HostCommands {
            toggle_pause: i.key_pressed(Key::P),
            toggle_fullscreen: i.modifiers.alt && i.key_pressed(Key::Enter),
            quit: i.modifiers.alt && i.key_pressed(Key::F4),
        }
    })
}

/// Surface pixels are drawn at twice their size in fullscreen.
pub fn scaling_for(fullscreen: bool) -> NonZeroU32 {
    if fullscreen {
        NonZeroU32::new(2).unwrap_or(NonZeroU32::MIN)
    } else {
        NonZeroU32::MIN
    }
}
