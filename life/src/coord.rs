use itertools::Itertools;

/// A cell position on the unbounded plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: isize,
    pub y: isize,
}

impl Coord {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: isize, dy: isize) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// `None` when the result falls off the `isize` plane.
    pub fn checked_translate(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The Moore neighbourhood: 8 cells, fewer at the edge of the plane.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&d| d != (0, 0))
            .filter_map(move |(dx, dy)| self.checked_translate(dx, dy))
    }
}

impl From<(isize, isize)> for Coord {
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours() {
        let ns: Vec<_> = Coord::new(0, 0).neighbours().collect();
        assert_eq!(ns.len(), 8);
        assert!(!ns.contains(&Coord::new(0, 0)));
        assert!(ns.contains(&Coord::new(-1, -1)));
        assert!(ns.contains(&Coord::new(1, 0)));
    }

    #[test]
    fn test_neighbours_at_edge() {
        assert_eq!(Coord::new(isize::MAX, 0).neighbours().count(), 5);
        assert_eq!(Coord::new(isize::MIN, isize::MAX).neighbours().count(), 3);
        assert_eq!(Coord::new(0, 0).checked_translate(isize::MIN, 0), Some(Coord::new(isize::MIN, 0)));
        assert_eq!(Coord::new(-1, 0).checked_translate(isize::MIN, 0), None);
    }

    #[test]
    fn test_neighbours_are_offset() {
        let c = Coord::new(10, -7);
        for n in c.neighbours() {
            assert!(n.x.abs_diff(c.x) <= 1 && n.y.abs_diff(c.y) <= 1);
        }
    }
}
