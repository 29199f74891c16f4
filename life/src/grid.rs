use std::{collections::HashSet, fmt::Display};

use indexmap::{IndexMap, map};

use crate::{Coord, pattern::Pattern};

/// Sparse cell map covering alive cells and the dead cells bordering them.
///
/// A coordinate is tracked when it is alive, or dead with at least one alive
/// neighbour. Everything else on the plane is implicitly dead and absent.
/// Iteration follows insertion order.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct SparseGrid {
    cells: IndexMap<Coord, bool>,
}

impl SparseGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.cells.get(&coord).copied()
    }

    pub fn set(&mut self, coord: Coord, alive: bool) {
        self.cells.insert(coord, alive);
    }

    /// Constant time; the last entry moves into the vacated slot.
    pub fn delete(&mut self, coord: Coord) {
        self.cells.swap_remove(&coord);
    }

    /// Removes every coordinate in `coords`, keeping the order of the rest.
    pub fn delete_all(&mut self, coords: &HashSet<Coord>) {
        if !coords.is_empty() {
            self.cells.retain(|c, _| !coords.contains(c));
        }
    }

    pub fn has(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Number of tracked cells, alive and frontier alike.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.get(coord) == Some(true)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.cells.iter())
    }

    /// Marks `coord` alive and starts tracking any untracked neighbours.
    pub fn activate(&mut self, coord: Coord) {
        self.set(coord, true);
        for n in coord.neighbours() {
            self.cells.entry(n).or_insert(false);
        }
    }

    /// Marks `coord` dead. Neighbours are left alone; cells that end up with
    /// no alive neighbour are evicted by the next generation.
    pub fn kill(&mut self, coord: Coord) {
        self.set(coord, false);
    }

    pub fn alive_neighbours(&self, coord: Coord) -> usize {
        coord.neighbours().filter(|&n| self.is_alive(n)).count()
    }

    pub fn population(&self) -> usize {
        self.cells.values().filter(|&&alive| alive).count()
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter().filter_map(|(c, alive)| alive.then_some(c))
    }

    /// Tracked dead cells with no alive neighbour.
    pub fn stale_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|&(c, alive)| !alive && self.alive_neighbours(c) == 0)
            .map(|(c, _)| c)
    }

    pub fn evict_stale(&mut self) -> usize {
        let stale: HashSet<_> = self.stale_cells().collect();
        self.delete_all(&stale);
        stale.len()
    }

    /// Mean position of the alive cells.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        let (sx, sy, n) = self
            .alive_cells()
            .fold((0., 0., 0usize), |(sx, sy, n), c| {
                (sx + c.x as f64, sy + c.y as f64, n + 1)
            });
        (n > 0).then(|| (sx / n as f64, sy / n as f64))
    }
}

pub struct Iter<'a>(map::Iter<'a, Coord, bool>);

impl Iterator for Iter<'_> {
    type Item = (Coord, bool);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(&c, &alive)| (c, alive))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a SparseGrid {
    type Item = (Coord, bool);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Coord> for SparseGrid {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        let mut grid = SparseGrid::new();
        for c in iter {
            grid.activate(c);
        }
        grid
    }
}

impl Display for SparseGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Pattern::from(self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: isize, y: isize) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_point_ops() {
        let mut grid = SparseGrid::new();
        assert_eq!(grid.get(c(1, 2)), None);
        grid.set(c(1, 2), true);
        assert_eq!(grid.get(c(1, 2)), Some(true));
        assert!(grid.has(c(1, 2)));
        grid.set(c(1, 2), false);
        assert_eq!(grid.get(c(1, 2)), Some(false));
        assert_eq!(grid.size(), 1);
        grid.delete(c(1, 2));
        grid.delete(c(1, 2));
        assert!(!grid.has(c(1, 2)));
        assert_eq!(grid.size(), 0);
    }

    #[test]
    fn test_activate_adds_frontier() {
        let mut grid = SparseGrid::new();
        grid.activate(c(0, 0));
        assert_eq!(grid.size(), 9);
        assert_eq!(grid.population(), 1);
        assert!(c(0, 0).neighbours().all(|n| grid.get(n) == Some(false)));
    }

    #[test]
    fn test_activate_keeps_neighbour_state() {
        let mut grid = SparseGrid::new();
        grid.activate(c(0, 0));
        grid.activate(c(1, 0));
        grid.activate(c(0, 0));
        assert_eq!(grid.get(c(1, 0)), Some(true));
        assert_eq!(grid.population(), 2);
        assert_eq!(grid.size(), 12);
    }

    #[test]
    fn test_kill_leaves_neighbours() {
        let mut grid: SparseGrid = [c(0, 0)].into_iter().collect();
        grid.kill(c(0, 0));
        assert_eq!(grid.size(), 9);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.stale_cells().count(), 9);
        assert_eq!(grid.evict_stale(), 9);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a: SparseGrid = [c(0, 0)].into_iter().collect();
        let b = a.clone();
        a.kill(c(0, 0));
        a.delete(c(1, 1));
        assert_eq!(b.get(c(0, 0)), Some(true));
        assert_eq!(b.get(c(1, 1)), Some(false));
        assert_ne!(a, b);
    }

    #[test]
    fn test_iter_restarts() {
        let grid: SparseGrid = [c(0, 0), c(5, 5)].into_iter().collect();
        let first: Vec<_> = grid.iter().collect();
        let second: Vec<_> = (&grid).into_iter().collect();
        assert_eq!(first.len(), 18);
        assert_eq!(first, second);
    }

    #[test]
    fn test_insertion_order() {
        let mut grid = SparseGrid::new();
        grid.activate(c(0, 0));
        let order: Vec<_> = grid.iter().map(|(c, _)| c).collect();
        let expected: Vec<_> = [
            (0, 0),
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ]
        .into_iter()
        .map(Coord::from)
        .collect();
        assert_eq!(order, expected);
        grid.set(c(-1, 0), true);
        assert_eq!(grid.iter().nth(2), Some((c(-1, 0), true)));
    }

    #[test]
    fn test_eviction_keeps_order() {
        let mut grid: SparseGrid = [c(0, 0), c(10, 10)].into_iter().collect();
        let kept: Vec<_> = grid.iter().skip(9).collect();
        grid.kill(c(0, 0));
        assert_eq!(grid.evict_stale(), 9);
        assert_eq!(grid.iter().collect::<Vec<_>>(), kept);
    }

    #[test]
    fn test_centroid() {
        assert_eq!(SparseGrid::new().centroid(), None);
        let grid: SparseGrid = [c(0, 0), c(2, 4)].into_iter().collect();
        assert_eq!(grid.centroid(), Some((1., 2.)));
    }
}
