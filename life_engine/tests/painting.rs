use life_engine::{InputSnapshot, LifeConfig, Simulation};

const TILE: i32 = 15;

/// Pointer at the center of tile (row, col).
fn at(row: i32, col: i32, held: bool) -> InputSnapshot {
    let mut input = InputSnapshot {
        mouse_x: col * TILE + TILE / 2,
        mouse_y: row * TILE + TILE / 2,
        ..InputSnapshot::default()
    };
    input.buttons.mouse_left = held;
    input
}

/// Feed a sequence of snapshots, each frame seeing the previous one as old.
fn play(sim: &mut Simulation, frames: &[InputSnapshot]) {
    let mut old = InputSnapshot::default();
    for new in frames {
        sim.apply_edit(new, &old);
        new.carry_buttons_into(&mut old);
    }
}

#[test]
fn click_toggles_and_drag_paints_alive() {
    let mut sim = Simulation::new(LifeConfig::default()).unwrap();
    play(
        &mut sim,
        &[at(5, 5, true), at(5, 6, true), at(5, 7, true), at(5, 7, true)],
    );
    assert!(sim.cell(5, 5));
    assert!(sim.cell(5, 6));
    assert!(sim.cell(5, 7));
    assert_eq!(sim.population(), 3);
    assert_eq!(sim.paint_stroke().value, Some(true));
}

#[test]
fn click_on_live_cell_paints_dead() {
    let mut sim = Simulation::new(LifeConfig::default()).unwrap();
    for col in 5..10 {
        sim.set_cell(5, col, true);
    }
    play(&mut sim, &[at(5, 5, true), at(5, 6, true), at(5, 7, true)]);
    assert!(!sim.cell(5, 5));
    assert!(!sim.cell(5, 6));
    assert!(!sim.cell(5, 7));
    assert!(sim.cell(5, 8));
    assert_eq!(sim.population(), 2);
}

#[test]
fn revisiting_tiles_during_a_drag_does_not_flicker() {
    let mut sim = Simulation::new(LifeConfig::default()).unwrap();
    play(
        &mut sim,
        &[at(3, 3, true), at(3, 4, true), at(3, 3, true), at(3, 4, true)],
    );
    assert!(sim.cell(3, 3));
    assert!(sim.cell(3, 4));
}

#[test]
fn holding_still_does_not_retoggle() {
    let mut sim = Simulation::new(LifeConfig::default()).unwrap();
    play(&mut sim, &[at(2, 2, true), at(2, 2, true), at(2, 2, true)]);
    assert!(sim.cell(2, 2));
}

#[test]
fn release_and_click_again_toggles_back() {
    let mut sim = Simulation::new(LifeConfig::default()).unwrap();
    play(&mut sim, &[at(2, 2, true), at(2, 2, false), at(2, 2, true)]);
    assert!(!sim.cell(2, 2));
}

#[test]
fn released_pointer_edits_nothing() {
    let mut sim = Simulation::new(LifeConfig::default()).unwrap();
    play(&mut sim, &[at(2, 2, false), at(2, 3, false)]);
    assert_eq!(sim.population(), 0);
}

#[test]
fn out_of_bounds_click_is_ignored() {
    let mut sim = Simulation::new(LifeConfig::default()).unwrap();
    play(&mut sim, &[at(36, 3, true), at(-1, 3, false), at(3, 64, true)]);
    assert_eq!(sim.population(), 0);
}

#[test]
fn drag_through_the_outside_resumes_painting() {
    let mut sim = Simulation::new(LifeConfig::default()).unwrap();
    play(
        &mut sim,
        &[at(1, 62, true), at(1, 63, true), at(1, 64, true), at(2, 63, true)],
    );
    assert!(sim.cell(1, 62));
    assert!(sim.cell(1, 63));
    assert!(sim.cell(2, 63));
    assert_eq!(sim.population(), 3);
}
