//! Conway's Game of Life on the unbounded plane.
//!
//! State is kept in a [`SparseGrid`] that only tracks alive cells and the dead
//! cells bordering them, so memory and step cost follow the activity rather
//! than any board size. [`LifeEngine`] drives generations, manual edits and
//! reset/clear, and notifies registered observers after each change.

mod coord;
mod engine;
mod grid;
mod observer;
pub mod pattern;


pub use crate::{
    coord::Coord,
    engine::LifeEngine,
    grid::{Iter, SparseGrid},
    observer::{Change, ObserverId, Update},
    pattern::Pattern,
};
