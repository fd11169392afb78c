// brush.rs - Press/drag gesture that toggles the cells under the pointer

use crate::simulation::Simulation;

/// Maps a surface-local point to a cell position. Points left of or above the
/// surface map to nothing; points past the far edges map to positions the
/// grid rejects.
pub fn cell_at(x: f32, y: f32, resolution: f32) -> Option<(usize, usize)> {
    if !(x >= 0.0 && y >= 0.0 && resolution > 0.0) {
        return None;
    }
    Some(((x / resolution).floor() as usize, (y / resolution).floor() as usize))
}

#[derive(Debug, Clone, Default)]
pub struct Brush {
    drawing: bool,
    // Cell toggled last in this stroke; hovering inside it does not flip it again.
    last_cell: Option<(usize, usize)>,
}

impl Brush {
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Begins a stroke and toggles the cell under the pointer.
    /// Returns `true` when a cell changed.
    pub fn press(&mut self, sim: &mut Simulation, x: f32, y: f32, resolution: f32) -> bool {
        self.drawing = true;
        self.last_cell = None;
        self.paint(sim, x, y, resolution)
    }

    /// Continues the stroke. Ignored when no stroke is active.
    pub fn drag(&mut self, sim: &mut Simulation, x: f32, y: f32, resolution: f32) -> bool {
        if !self.drawing {
            return false;
        }
        self.paint(sim, x, y, resolution)
    }

    pub fn release(&mut self) {
        self.drawing = false;
        self.last_cell = None;
    }

    /// Pointer left the surface.
    pub fn leave(&mut self) {
        self.release();
    }

    fn paint(&mut self, sim: &mut Simulation, x: f32, y: f32, resolution: f32) -> bool {
        let Some((col, row)) = cell_at(x, y, resolution) else {
            return false;
        };
        if self.last_cell == Some((col, row)) {
            return false;
        }
        if !sim.toggle(col, row) {
            return false;
        }
        self.last_cell = Some((col, row));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const RES: f32 = 20.0;

    fn simulation() -> Simulation {
        Simulation::new(&Config::default())
    }

    #[test]
    fn maps_points_to_cells() {
        assert_eq!(cell_at(0.0, 0.0, RES), Some((0, 0)));
        assert_eq!(cell_at(19.9, 39.9, RES), Some((0, 1)));
        assert_eq!(cell_at(20.0, 40.0, RES), Some((1, 2)));
        assert_eq!(cell_at(-0.5, 10.0, RES), None);
        assert_eq!(cell_at(10.0, f32::NAN, RES), None);
    }

    #[test]
    fn press_toggles_cell_under_pointer() {
        let mut sim = simulation();
        let mut brush = Brush::default();
        assert!(brush.press(&mut sim, 45.0, 65.0, RES));
        assert!(brush.is_drawing());
        assert!(sim.grid().get(2, 3));
    }

    #[test]
    fn toggle_flips_live_cells_off() {
        let mut sim = simulation();
        sim.toggle(2, 3);
        let mut brush = Brush::default();
        brush.press(&mut sim, 45.0, 65.0, RES);
        assert!(!sim.grid().get(2, 3));
    }

    #[test]
    fn drag_toggles_each_new_cell_once() {
        let mut sim = simulation();
        let mut brush = Brush::default();
        brush.press(&mut sim, 5.0, 5.0, RES);
        assert!(!brush.drag(&mut sim, 12.0, 8.0, RES));
        assert!(brush.drag(&mut sim, 25.0, 5.0, RES));
        assert!(brush.drag(&mut sim, 45.0, 5.0, RES));
        assert!(sim.grid().get(0, 0));
        assert!(sim.grid().get(1, 0));
        assert!(sim.grid().get(2, 0));
        assert_eq!(sim.grid().population(), 3);

        // Coming back over an earlier cell flips it again.
        assert!(brush.drag(&mut sim, 25.0, 5.0, RES));
        assert!(!sim.grid().get(1, 0));
    }

    #[test]
    fn drag_without_press_does_nothing() {
        let mut sim = simulation();
        let mut brush = Brush::default();
        assert!(!brush.drag(&mut sim, 5.0, 5.0, RES));
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn release_and_leave_end_the_stroke() {
        let mut sim = simulation();
        let mut brush = Brush::default();
        brush.press(&mut sim, 5.0, 5.0, RES);
        brush.release();
        assert!(!brush.drag(&mut sim, 25.0, 5.0, RES));

        brush.press(&mut sim, 5.0, 25.0, RES);
        brush.leave();
        assert!(!brush.is_drawing());
        assert!(!brush.drag(&mut sim, 25.0, 25.0, RES));
        assert_eq!(sim.grid().population(), 2);
    }

    #[test]
    fn painting_outside_the_grid_is_a_no_op() {
        let mut sim = simulation();
        let mut brush = Brush::default();
        assert!(!brush.press(&mut sim, 800.0, 10.0, RES));
        assert!(!brush.drag(&mut sim, 10.0, 600.0, RES));
        assert!(!brush.drag(&mut sim, -1.0, 10.0, RES));
        assert!(sim.grid().is_empty());
    }
}
