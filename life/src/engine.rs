use std::{collections::HashSet, fmt::Debug};

use log::{debug, trace};

use crate::{
    Coord, SparseGrid,
    observer::{Change, ObserverId, Observers, Update},
};

/// Game of Life (B3/S23) on the unbounded plane.
///
/// Keeps the current generation, the baseline restored by [`reset`], and the
/// number of generations stepped since the baseline was captured. Every manual
/// edit becomes the new baseline.
///
/// [`reset`]: LifeEngine::reset
#[derive(Default)]
pub struct LifeEngine {
    current: SparseGrid,
    baseline: SparseGrid,
    generation: u64,
    observers: Observers,
}

impl LifeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(pattern: impl IntoIterator<Item = Coord>) -> Self {
        let mut engine = Self::new();
        engine.seed(pattern);
        engine
    }

    pub fn state(&self) -> &SparseGrid {
        &self.current
    }

    pub fn baseline(&self) -> &SparseGrid {
        &self.baseline
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Update<'_>) + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Replaces the state with `pattern` and makes it the baseline.
    pub fn seed(&mut self, pattern: impl IntoIterator<Item = Coord>) {
        self.current = pattern.into_iter().collect();
        debug!("seeded {} cells", self.current.population());
        self.recapture();
        self.notify(Change::Seeded);
    }

    /// Flips one cell and makes the result the baseline.
    pub fn toggle(&mut self, coord: Coord) -> &SparseGrid {
        if self.current.is_alive(coord) {
            self.current.kill(coord);
        } else {
            self.current.activate(coord);
        }
        debug!("toggled ({}, {})", coord.x, coord.y);
        self.recapture();
        self.notify(Change::Toggled(coord));
        &self.current
    }

    /// Advances one generation.
    pub fn step(&mut self) -> &SparseGrid {
        // Counts always read the previous generation; writes go to `next`.
        let mut next = self.current.clone();
        let (mut deaths, mut births) = (HashSet::new(), vec![]);
        for (coord, alive) in &self.current {
            match (alive, self.current.alive_neighbours(coord)) {
                (_, 0) => {
                    deaths.insert(coord);
                }
                (true, 2 | 3) => (),
                (true, _) => next.kill(coord),
                (false, 3) => births.push(coord),
                (false, _) => (),
            }
        }
        next.delete_all(&deaths);
        // After the deletions, so a newborn's neighbours are never evicted.
        for coord in births {
            next.activate(coord);
        }
        let evicted = next.evict_stale();
        self.current = next;
        self.generation += 1;
        trace!(
            "generation {}: {} alive, {} tracked, {} evicted",
            self.generation,
            self.current.population(),
            self.current.size(),
            evicted,
        );
        self.notify(Change::Stepped);
        &self.current
    }

    pub fn step_n(&mut self, n: u64) -> &SparseGrid {
        for _ in 0..n {
            self.step();
        }
        &self.current
    }

    /// Restores the baseline captured by the last seed or toggle.
    pub fn reset(&mut self) {
        self.current = self.baseline.clone();
        self.generation = 0;
        debug!("reset to baseline of {} cells", self.current.population());
        self.notify(Change::Reset);
    }

    pub fn clear(&mut self) {
        self.current = SparseGrid::new();
        self.baseline = SparseGrid::new();
        self.generation = 0;
        debug!("cleared");
        self.notify(Change::Cleared);
    }
}

impl LifeEngine {
    fn recapture(&mut self) {
        self.baseline = self.current.clone();
        self.generation = 0;
    }

    fn notify(&mut self, change: Change) {
        let update = Update {
            change,
            state: &self.current,
            generation: self.generation,
        };
        self.observers.notify(&update);
    }
}

impl Debug for LifeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifeEngine")
            .field("current", &self.current)
            .field("baseline", &self.baseline)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}
