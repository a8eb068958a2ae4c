//! Field module - the validated grid value
//!
//! A field is `rows` x `columns` cells holding one movable figure and a
//! set of immovable terrain cells. Both cell sets are ordered sets of
//! [`Point`], which gives deterministic iteration and makes structural
//! equality (used for fixed-point detection) well-defined.

use std::collections::BTreeSet;

use crate::types::Point;

/// The simulation field: fixed dimensions plus figure and terrain cells.
///
/// Dimensions and terrain never change after construction. The figure is
/// only ever replaced wholesale via [`Field::with_figure`]; there is no
/// per-cell mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    rows: usize,
    columns: usize,
    figure: BTreeSet<Point>,
    terrain: BTreeSet<Point>,
}

impl Field {
    pub fn new(
        rows: usize,
        columns: usize,
        figure: BTreeSet<Point>,
        terrain: BTreeSet<Point>,
    ) -> Self {
        Self {
            rows,
            columns,
            figure,
            terrain,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn figure(&self) -> &BTreeSet<Point> {
        &self.figure
    }

    pub fn terrain(&self) -> &BTreeSet<Point> {
        &self.terrain
    }

    /// Check if a coordinate lies inside the field.
    pub fn in_bounds(&self, p: Point) -> bool {
        p.row < self.rows && p.column < self.columns
    }

    /// The same field with the figure replaced wholesale.
    pub fn with_figure(&self, figure: BTreeSet<Point>) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            figure,
            terrain: self.terrain.clone(),
        }
    }
}
