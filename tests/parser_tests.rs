//! Parser tests - the input format grammar and its rejections

use gridfall::core::{parse_field, ParseError};
use gridfall::types::Point;

fn points(coords: &[(usize, usize)]) -> Vec<Point> {
    coords.iter().map(|&(r, c)| Point::new(r, c)).collect()
}

#[test]
fn parses_field_with_figure_and_terrain() {
    let text = "5 6\n..p...\n..pp..\n##..##\n##..##\n##..##";

    let field = parse_field(text).unwrap();

    assert_eq!(field.rows(), 5);
    assert_eq!(field.columns(), 6);
    assert_eq!(
        field.figure().iter().copied().collect::<Vec<_>>(),
        points(&[(0, 2), (1, 2), (1, 3)])
    );
    assert_eq!(
        field.terrain().iter().copied().collect::<Vec<_>>(),
        points(&[
            (2, 0),
            (2, 1),
            (2, 4),
            (2, 5),
            (3, 0),
            (3, 1),
            (3, 4),
            (3, 5),
            (4, 0),
            (4, 1),
            (4, 4),
            (4, 5)
        ])
    );
}

#[test]
fn parses_plus_shaped_figure() {
    let text = "5 6\n..p...\n.ppp..\n..p...\n##..##\n##..##";

    let field = parse_field(text).unwrap();

    assert_eq!(
        field.figure().iter().copied().collect::<Vec<_>>(),
        points(&[(0, 2), (1, 1), (1, 2), (1, 3), (2, 2)])
    );
}

#[test]
fn rejects_three_header_tokens() {
    let text = "5 6 7\n..p...\n..pp..\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::HeaderTokenCount));
}

#[test]
fn rejects_missing_column_count() {
    let text = "5\n..p...\n..pp..\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::HeaderTokenCount));
}

#[test]
fn rejects_empty_header_line() {
    let text = "\n..p...\n..pp..\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::HeaderTokenCount));
}

#[test]
fn rejects_header_pushed_to_second_line() {
    let text = "\n5 6\n..p...\n..pp..\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::HeaderTokenCount));
}

#[test]
fn rejects_field_line_in_place_of_header() {
    let text = "..p...\n..pp..\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::HeaderTokenCount));
}

#[test]
fn rejects_non_numeric_row_count() {
    let text = "r 6\n..p...\n..pp..\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::HeaderNotNumeric));
}

#[test]
fn rejects_non_numeric_column_count() {
    let text = "5 c\n..p...\n..pp..\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::HeaderNotNumeric));
}

#[test]
fn rejects_too_few_body_lines() {
    let text = "5 6\n..p...\n..pp..\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::RowCountMismatch));
}

#[test]
fn rejects_too_many_body_lines() {
    let text = "5 6\n..p...\n..pp..\n##..##\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::RowCountMismatch));
}

#[test]
fn rejects_header_with_no_body() {
    let text = "5 6";

    assert_eq!(parse_field(text), Err(ParseError::RowCountMismatch));
}

#[test]
fn rejects_too_narrow_body_line() {
    let text = "5 6\n..p..\n..pp..\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::LineWidthMismatch));
}

#[test]
fn rejects_too_wide_body_line() {
    let text = "5 6\n..p....\n..pp..\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::LineWidthMismatch));
}

#[test]
fn rejects_unknown_symbols() {
    let text = "5 6\n..p...\n..pp..\n##..##\n##.x##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::UnknownSymbol));
}

#[test]
fn rejects_field_without_figure() {
    let text = "5 6\n......\n......\n##..##\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::EmptyFigure));
}

#[test]
fn rejects_two_separate_figures() {
    let text = "5 6\n.p..p.\n.p..p.\n......\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::FigureNotConnected));
}

#[test]
fn rejects_diagonally_touching_figure_cells() {
    let text = "5 6\n.p....\n..p...\n......\n##..##\n##..##";

    assert_eq!(parse_field(text), Err(ParseError::FigureNotConnected));
}

#[test]
fn zero_dimensions_fail_on_the_empty_figure() {
    assert_eq!(parse_field("0 0"), Err(ParseError::EmptyFigure));
    assert_eq!(parse_field("0 4"), Err(ParseError::EmptyFigure));
}
