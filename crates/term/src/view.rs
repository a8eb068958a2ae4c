//! Field and step-trace rendering.
//!
//! `render_field` is the inverse of the parser's body format: `rows`
//! lines of `columns` symbols, joined by `\n` with no trailing newline.

use crate::core::Field;
use crate::types::{CellKind, Point};

/// Render a field into its canonical text form.
///
/// The figure symbol wins over terrain should the two sets ever overlap;
/// valid fields keep them disjoint, but the tie-break keeps rendering
/// deterministic for any input.
pub fn render_field(field: &Field) -> String {
    let mut lines = Vec::with_capacity(field.rows());

    for row in 0..field.rows() {
        let mut line = String::with_capacity(field.columns());
        for column in 0..field.columns() {
            let p = Point::new(row, column);
            let kind = if field.figure().contains(&p) {
                CellKind::Figure
            } else if field.terrain().contains(&p) {
                CellKind::Terrain
            } else {
                CellKind::Empty
            };
            line.push(kind.as_char());
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Render a simulation trace as numbered `STEP <n>:` blocks.
///
/// Blocks are separated by one blank line; numbering starts at 0 and
/// follows trace order. No trailing newline.
pub fn render_trace(trace: &[Field]) -> String {
    trace
        .iter()
        .enumerate()
        .map(|(n, field)| format!("STEP {}:\n{}", n, render_field(field)))
        .collect::<Vec<_>>()
        .join("\n\n")
}
