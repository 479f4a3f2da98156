//! Generic dependency graph utilities
//!
//! - [`DependencyGraph`]: acyclic tree or forest built from a child-lookup function
//! - [`Layers`]: longest-path depth grouping of a built graph
//! - [`FlatDependencyMap`]: sorted node to dependencies relation and its inverse
//! - [`find_cycles`]: bounded-depth search for dependency chains returning to a node

mod cycles;
mod export;
mod flat_map;
mod layers;
mod tree;

pub use cycles::{find_cycles, CycleDescription, DEFAULT_MAX_DEPTH};
pub use flat_map::FlatDependencyMap;
pub use layers::{LayerMap, Layers};
pub use tree::{DependencyGraph, GraphNode};
