// render.rs - Paints the grid as filled, bordered squares

use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub live: Color32,
    pub dead: Color32,
    pub border: Color32,
}

impl Palette {
    pub fn from_rgb(live: [u8; 3], dead: [u8; 3], border: [u8; 3]) -> Self {
        let rgb = |[r, g, b]: [u8; 3]| Color32::from_rgb(r, g, b);
        Self {
            live: rgb(live),
            dead: rgb(dead),
            border: rgb(border),
        }
    }
}

/// Size of the whole drawing surface for `grid`.
pub fn surface_size(grid: &Grid, resolution: f32) -> Vec2 {
    Vec2::new(
        grid.columns() as f32 * resolution,
        grid.rows() as f32 * resolution,
    )
}

pub fn cell_rect(origin: Pos2, col: usize, row: usize, resolution: f32) -> Rect {
    Rect::from_min_size(
        origin + Vec2::new(col as f32 * resolution, row as f32 * resolution),
        Vec2::splat(resolution),
    )
}

pub fn paint_grid(
    painter: &Painter,
    origin: Pos2,
    grid: &Grid,
    resolution: f32,
    palette: &Palette,
) {
    painter.rect_filled(
        Rect::from_min_size(origin, surface_size(grid, resolution)),
        0.0,
        palette.dead,
    );

    let border = Stroke::new(1.0, palette.border);
    for (col, row, alive) in grid.iter() {
        let rect = cell_rect(origin, col, row, resolution);
        let fill = if alive { palette.live } else { palette.dead };
        painter.rect_filled(rect, 0.0, fill);
        painter.rect_stroke(rect, 0.0, border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_tile_the_surface() {
        let grid = Grid::new(40, 30);
        let origin = Pos2::new(10.0, 50.0);
        assert_eq!(surface_size(&grid, 20.0), Vec2::new(800.0, 600.0));

        let first = cell_rect(origin, 0, 0, 20.0);
        assert_eq!(first.min, origin);
        assert_eq!(first.size(), Vec2::splat(20.0));

        let last = cell_rect(origin, 39, 29, 20.0);
        assert_eq!(last.max, origin + Vec2::new(800.0, 600.0));
    }

    #[test]
    fn palette_converts_rgb() {
        let palette = Palette::from_rgb([0, 0, 0], [255, 255, 255], [0xcc, 0xcc, 0xcc]);
        assert_eq!(palette.live, Color32::BLACK);
        assert_eq!(palette.dead, Color32::WHITE);
        assert_eq!(palette.border, Color32::from_gray(0xcc));
    }
}
