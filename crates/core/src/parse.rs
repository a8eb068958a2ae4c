//! Input format parsing
//!
//! Converts the textual field description into a validated [`Field`].
//! The format is a header line `<rows> <columns>` followed by exactly
//! `rows` lines of exactly `columns` symbols (`.`, `#`, `p`).
//!
//! Every violation maps to the single external classification
//! `invalid_format`; the variants below exist for diagnostics and tests.

use std::collections::BTreeSet;
use std::fmt;

use crate::connect::is_connected;
use crate::field::Field;
use crate::types::{CellKind, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    MissingHeader,
    HeaderTokenCount,
    HeaderNotNumeric,
    RowCountMismatch,
    LineWidthMismatch,
    UnknownSymbol,
    EmptyFigure,
    FigureNotConnected,
}

impl ParseError {
    pub fn code(self) -> &'static str {
        match self {
            ParseError::MissingHeader
            | ParseError::HeaderTokenCount
            | ParseError::HeaderNotNumeric
            | ParseError::RowCountMismatch
            | ParseError::LineWidthMismatch
            | ParseError::UnknownSymbol
            | ParseError::EmptyFigure
            | ParseError::FigureNotConnected => "invalid_format",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ParseError::MissingHeader => "input has no header line",
            ParseError::HeaderTokenCount => "header must hold exactly two values",
            ParseError::HeaderNotNumeric => "header values must be non-negative integers",
            ParseError::RowCountMismatch => "number of field lines does not match the header",
            ParseError::LineWidthMismatch => "field line width does not match the header",
            ParseError::UnknownSymbol => "field contains a symbol outside '.', '#', 'p'",
            ParseError::EmptyFigure => "field contains no figure cells",
            ParseError::FigureNotConnected => "figure cells do not form one connected region",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ParseError {}

/// Parse a field description.
///
/// The declared dimensions are authoritative: a line count or line width
/// that disagrees with the header is rejected, never truncated or padded.
/// The figure must be non-empty and 4-connected.
pub fn parse_field(input: &str) -> Result<Field, ParseError> {
    let mut lines = input.lines();
    let header = lines.next().ok_or(ParseError::MissingHeader)?;

    let tokens: Vec<&str> = header.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ParseError::HeaderTokenCount);
    }
    let rows: usize = tokens[0]
        .parse()
        .map_err(|_| ParseError::HeaderNotNumeric)?;
    let columns: usize = tokens[1]
        .parse()
        .map_err(|_| ParseError::HeaderNotNumeric)?;

    let body: Vec<&str> = lines.collect();
    if body.len() != rows {
        return Err(ParseError::RowCountMismatch);
    }

    let mut figure = BTreeSet::new();
    let mut terrain = BTreeSet::new();

    for (row, line) in body.iter().enumerate() {
        if line.chars().count() != columns {
            return Err(ParseError::LineWidthMismatch);
        }
        for (column, ch) in line.chars().enumerate() {
            match CellKind::from_char(ch) {
                Some(CellKind::Terrain) => {
                    terrain.insert(Point::new(row, column));
                }
                Some(CellKind::Figure) => {
                    figure.insert(Point::new(row, column));
                }
                Some(CellKind::Empty) => {}
                None => return Err(ParseError::UnknownSymbol),
            }
        }
    }

    if figure.is_empty() {
        return Err(ParseError::EmptyFigure);
    }
    if !is_connected(&figure) {
        return Err(ParseError::FigureNotConnected);
    }

    Ok(Field::new(rows, columns, figure, terrain))
}
