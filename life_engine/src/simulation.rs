// simulation.rs - Per-frame simulation state and its update/render entry point

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::arena::{Arena, Region};
use crate::config::LifeConfig;
use crate::error::Result;
use crate::grid::{self, GridShape};
use crate::input::InputSnapshot;
use crate::patterns::{self, Pattern};
use crate::render::{self, GradientOffsets};
use crate::surface::PixelSurface;

/// A grid position in tile units. Signed so pointer positions left of or
/// above the surface map to negative tiles instead of tile 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileCoord {
    pub col: i64,
    pub row: i64,
}

/// State carried across frames while the primary button stays held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStroke {
    /// Value painted onto tiles visited by the drag. `None` when the
    /// stroke began outside the grid.
    pub value: Option<bool>,
    /// Last in-bounds tile the stroke touched.
    pub last_tile: Option<TileCoord>,
}

pub struct Simulation {
    config: LifeConfig,
    arena: Arena<bool>,
    cells: Region,
    scratch: Region,
    paint: PaintStroke,
    gradient: GradientOffsets,
    generation: u64,
    history: VecDeque<u64>,
    cycling: bool,
}

impl Simulation {
    /// Allocate the arena and carve an all-dead grid plus its scratch copy.
    pub fn new(config: LifeConfig) -> Result<Self> {
        config.validate()?;
        let mut arena = Arena::with_capacity(config.arena_capacity);
        let (cells, scratch) = carve_grids(&mut arena, config.grid)?;
        Ok(Self {
            history: VecDeque::with_capacity(config.history_len),
            config,
            arena,
            cells,
            scratch,
            paint: PaintStroke::default(),
            gradient: GradientOffsets::default(),
            generation: 0,
            cycling: false,
        })
    }

    /// Rewind the arena and start over from fresh, all-dead grids.
    pub fn reset(&mut self) -> Result<()> {
        self.arena.reset();
        let (cells, scratch) = carve_grids(&mut self.arena, self.config.grid)?;
        self.cells = cells;
        self.scratch = scratch;
        self.paint = PaintStroke::default();
        self.generation = 0;
        self.forget_history();
        tracing::info!("simulation reset");
        Ok(())
    }

    /// One frame: debug gradient, then an edit or a generation step
    /// depending on the run flag, then the tile grid.
    pub fn update_and_render(&mut self, surface: &mut PixelSurface<'_>, new: &InputSnapshot, old: &InputSnapshot) {
        render::draw_debug_gradient(surface, self.gradient);

        if new.buttons.run_simulation {
            self.paint = PaintStroke::default();
            self.step();
        } else {
            self.apply_edit(new, old);
        }

        self.render(surface);
    }

    pub fn render(&self, surface: &mut PixelSurface<'_>) {
        render::draw_grid(
            surface,
            self.config.grid,
            self.cells(),
            self.config.tiles,
            &self.config.palette,
        );
    }

    /// Map a pointer position to the tile under it.
    pub fn tile_at(&self, input: &InputSnapshot) -> TileCoord {
        let side = i64::from(self.config.tiles.side_pixels);
        let scale = i64::from(input.scaling_factor.get());
        TileCoord {
            col: i64::from(input.mouse_x).div_euclid(side).div_euclid(scale),
            row: i64::from(input.mouse_y).div_euclid(side).div_euclid(scale),
        }
    }

    /// Click-to-toggle and drag-to-paint while the primary button is held.
    ///
    /// A click toggles the tile under the pointer and fixes the stroke's
    /// paint value to the tile's new state. Dragging onto a different tile
    /// sets it to that value. Pointer positions off the grid change nothing,
    /// including the stroke's last tile. Releasing the button ends the stroke.
    pub fn apply_edit(&mut self, new: &InputSnapshot, old: &InputSnapshot) {
        if !new.buttons.mouse_left {
            self.paint = PaintStroke::default();
            return;
        }

        let tile = self.tile_at(new);
        let shape = self.config.grid;
        let in_bounds = shape.contains(tile.col, tile.row);

        if new.buttons.primary_clicked(&old.buttons) {
            self.paint = PaintStroke::default();
            if in_bounds {
                let alive = !self.tile(tile);
                self.set_tile(tile, alive);
                self.paint.value = Some(alive);
                tracing::debug!(row = tile.row, col = tile.col, alive, "toggled cell");
            }
        } else if in_bounds && self.paint.last_tile != Some(tile) {
            if let Some(alive) = self.paint.value {
                self.set_tile(tile, alive);
            }
        }

        if in_bounds {
            self.paint.last_tile = Some(tile);
        }
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        let shape = self.config.grid;
        let (cells, scratch) = self.arena.pair_mut(self.cells, self.scratch);
        grid::step(shape, cells, scratch);
        self.generation += 1;

        let hash = self.hash_grid();
        let repeated = self.history.contains(&hash);
        if repeated && !self.cycling {
            tracing::info!(generation = self.generation, "grid entered a cycle");
        }
        self.cycling = repeated;
        if self.config.history_len > 0 {
            if self.history.len() == self.config.history_len {
                self.history.pop_front();
            }
            self.history.push_back(hash);
        }
    }

    pub fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells().hash(&mut hasher);
        hasher.finish()
    }

    /// Whether the latest generation matches one of the recent ones.
    pub fn is_cycling(&self) -> bool {
        self.cycling
    }

    pub fn stamp(&mut self, pattern: &Pattern, origin: (usize, usize)) -> usize {
        let shape = self.config.grid;
        let placed = pattern.stamp(shape, self.arena.slice_mut(self.cells), origin);
        self.forget_history();
        tracing::info!(pattern = pattern.name, placed, "stamped pattern");
        placed
    }

    pub fn seed_random(&mut self, seed: u64) {
        let shape = self.config.grid;
        patterns::seed_random(shape, self.arena.slice_mut(self.cells), seed);
        self.forget_history();
    }

    pub fn clear(&mut self) {
        grid::clear(self.arena.slice_mut(self.cells));
        self.forget_history();
    }

    pub fn cell(&self, row: usize, col: usize) -> bool {
        self.cells()[self.checked_index(row, col)]
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        let index = self.checked_index(row, col);
        self.arena.slice_mut(self.cells)[index] = alive;
        self.forget_history();
    }

    pub fn cells(&self) -> &[bool] {
        self.arena.slice(self.cells)
    }

    pub fn shape(&self) -> GridShape {
        self.config.grid
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn population(&self) -> usize {
        grid::population(self.cells())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn paint_stroke(&self) -> PaintStroke {
        self.paint
    }

    pub fn arena_used(&self) -> usize {
        self.arena.used()
    }

    fn checked_index(&self, row: usize, col: usize) -> usize {
        let shape = self.config.grid;
        assert!(
            row < shape.rows && col < shape.columns,
            "cell ({row}, {col}) is outside the {}x{} grid",
            shape.rows,
            shape.columns
        );
        shape.index(row, col)
    }

    fn tile(&self, tile: TileCoord) -> bool {
        self.cell(tile.row as usize, tile.col as usize)
    }

    fn set_tile(&mut self, tile: TileCoord, alive: bool) {
        self.set_cell(tile.row as usize, tile.col as usize, alive);
    }

    fn forget_history(&mut self) {
        self.history.clear();
        self.cycling = false;
    }
}

fn carve_grids(arena: &mut Arena<bool>, shape: GridShape) -> Result<(Region, Region)> {
    let cells = arena.carve(shape.len())?;
    let scratch = arena.carve(shape.len())?;
    grid::clear(arena.slice_mut(cells));
    grid::clear(arena.slice_mut(scratch));
    arena.mark_initialized();
    Ok((cells, scratch))
}
