//! Tile state and polygon decomposition

use crate::geometry::{EDGE_COUNT, N, NW};
use crate::polygon::{merge_run, Polygon};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Error raised when tile construction is given a bad edge sequence
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("expected exactly 6 edge labels, got {0}")]
    InvalidEdgeCount(usize),
}

/// A single hex tile: one label per edge, indexed N, NE, SE, S, SW, NW
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
pub struct Tile<T: Clone> {
    edges: Vec<T>,
}

impl<T: Clone> Tile<T> {
    /// Build a tile from six edge labels, N first, proceeding clockwise
    pub fn new(edges: Vec<T>) -> Result<Self, TileError> {
        if edges.len() != EDGE_COUNT {
            return Err(TileError::InvalidEdgeCount(edges.len()));
        }
        Ok(Self { edges })
    }

    /// Build a tile with the same label on all six edges
    pub fn uniform(label: T) -> Self {
        Self {
            edges: vec![label; EDGE_COUNT],
        }
    }

    /// Edge labels in direction order
    pub fn edges(&self) -> &[T] {
        &self.edges
    }
}

impl<T: Clone + Eq + Hash> Tile<T> {
    /// The minimal polygon set depicting this tile's labelling.
    ///
    /// Edges are grouped by label and each group's wedges are fused along
    /// their shared seams. Wedges merge only when their edges are neighbors
    /// on the hexagon ring, so a label appearing on non-adjacent edges
    /// yields one polygon per contiguous stretch.
    pub fn polygons(&self) -> Vec<Polygon<T>> {
        let mut groups: Vec<(T, Vec<usize>)> = Vec::new();
        let mut group_of: FxHashMap<&T, usize> = FxHashMap::default();
        for (i, label) in self.edges.iter().enumerate() {
            match group_of.get(label) {
                Some(&g) => groups[g].1.push(i),
                None => {
                    group_of.insert(label, groups.len());
                    groups.push((label.clone(), vec![i]));
                }
            }
        }

        groups
            .iter()
            .flat_map(|(label, indices)| {
                contiguous_runs(indices)
                    .into_iter()
                    .map(move |run| merge_run(label, &run))
            })
            .collect()
    }
}

impl<T: Clone> TryFrom<Vec<T>> for Tile<T> {
    type Error = TileError;

    fn try_from(edges: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(edges)
    }
}

impl<T: Clone> From<Tile<T>> for Vec<T> {
    fn from(tile: Tile<T>) -> Self {
        tile.edges
    }
}

/// Split sorted edge indices into maximal runs of circularly consecutive
/// indices. A run ending at NW wraps onto one starting at N.
fn contiguous_runs(indices: &[usize]) -> Vec<Vec<usize>> {
    let mut runs: Vec<Vec<usize>> = Vec::new();
    for &i in indices {
        match runs.last_mut() {
            Some(run) if i > 0 && run.last() == Some(&(i - 1)) => run.push(i),
            _ => runs.push(vec![i]),
        }
    }
    if runs.len() > 1
        && runs[0][0] == N
        && runs[runs.len() - 1].last() == Some(&NW)
    {
        let first = runs.remove(0);
        if let Some(last) = runs.last_mut() {
            last.extend(first);
        }
    }
    runs
}
