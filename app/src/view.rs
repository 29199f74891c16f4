use egui::{Pos2, Rect, Vec2, vec2};
use life::Coord;

/// Maps grid cells to screen positions within a canvas.
///
/// `offset` is the screen position of cell (0, 0)'s corner relative to the
/// canvas centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub offset: Vec2,
    pub cell_size: f32,
}

impl Viewport {
    pub fn new(cell_size: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            cell_size,
        }
    }

    pub fn to_screen(&self, canvas: Rect, c: Coord) -> Pos2 {
        canvas.center() + self.offset + vec2(c.x as f32, c.y as f32) * self.cell_size
    }

    pub fn to_grid(&self, canvas: Rect, p: Pos2) -> Coord {
        let v = (p - canvas.center() - self.offset) / self.cell_size;
        Coord::new(v.x.floor() as isize, v.y.floor() as isize)
    }

    pub fn cell_rect(&self, canvas: Rect, c: Coord, line_width: f32) -> Rect {
        let size = (self.cell_size - line_width).max(1.);
        Rect::from_min_size(self.to_screen(canvas, c), Vec2::splat(size))
    }

    /// First and last cells at least partly inside the canvas.
    pub fn visible(&self, canvas: Rect) -> (Coord, Coord) {
        (self.to_grid(canvas, canvas.min), self.to_grid(canvas, canvas.max))
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Changes the cell size, keeping the canvas centre fixed.
    pub fn zoom_to(&mut self, cell_size: f32) {
        self.offset *= cell_size / self.cell_size;
        self.cell_size = cell_size;
    }

    /// Puts the middle of cell position `(x, y)` at the canvas centre.
    pub fn centre_on(&mut self, (x, y): (f64, f64)) {
        self.offset = -vec2(x as f32 + 0.5, y as f32 + 0.5) * self.cell_size;
    }
}

#[cfg(test)]
mod tests {
    use egui::pos2;

    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(0., 0.), vec2(200., 100.))
    }

    #[test]
    fn test_origin_at_centre() {
        let v = Viewport::new(20.);
        assert_eq!(v.to_screen(canvas(), Coord::new(0, 0)), pos2(100., 50.));
        assert_eq!(v.to_grid(canvas(), pos2(100., 50.)), Coord::new(0, 0));
        assert_eq!(v.to_grid(canvas(), pos2(99., 49.)), Coord::new(-1, -1));
        assert_eq!(v.to_grid(canvas(), pos2(141., 50.)), Coord::new(2, 0));
    }

    #[test]
    fn test_round_trip_cells() {
        let mut v = Viewport::new(13.);
        v.pan(vec2(7., -3.));
        for c in [Coord::new(-4, 9), Coord::new(0, 0), Coord::new(30, -2)] {
            let p = v.to_screen(canvas(), c) + Vec2::splat(6.5);
            assert_eq!(v.to_grid(canvas(), p), c);
        }
    }

    #[test]
    fn test_visible() {
        let v = Viewport::new(20.);
        assert_eq!(v.visible(canvas()), (Coord::new(-5, -3), Coord::new(5, 2)));
    }

    #[test]
    fn test_zoom_keeps_centre() {
        let mut v = Viewport::new(10.);
        v.pan(vec2(30., -20.));
        let centre = canvas().center();
        let before = v.to_grid(canvas(), centre);
        v.zoom_to(40.);
        assert_eq!(v.offset, vec2(120., -80.));
        assert_eq!(v.to_grid(canvas(), centre), before);
    }

    #[test]
    fn test_centre_on() {
        let mut v = Viewport::new(10.);
        v.centre_on((3., -2.));
        assert_eq!(v.to_grid(canvas(), canvas().center()), Coord::new(3, -2));
    }
}
