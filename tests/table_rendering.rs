//! End-to-end tests for table construction, geometry, and rendering.

use tablizer::{Arrangement, RenderWarning, TableRenderer, TablizerError};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn construction_rejects_empty_data() {
    let data: &[i32] = &[];
    let err = TableRenderer::new(data, "Empty", labels(&["A"]), 13, Arrangement::RowMajor)
        .unwrap_err();
    assert_eq!(err, TablizerError::EmptyData);
}

#[test]
fn construction_rejects_empty_labels() {
    let err = TableRenderer::new(&[1, 2], "NoCols", vec![], 13, Arrangement::RowMajor)
        .unwrap_err();
    assert_eq!(err, TablizerError::NoColumns);
}

#[test]
fn construction_rejects_zero_width() {
    let err = TableRenderer::new(&[1, 2], "Zero", labels(&["A"]), 0, Arrangement::RowMajor)
        .unwrap_err();
    assert_eq!(err, TablizerError::ZeroWidth);
}

#[test]
fn construction_rejects_width_too_small_for_columns() {
    // Two columns need at least 2 * 2 + 1 = 5 characters.
    let err = TableRenderer::new(&[1, 2], "Tiny", labels(&["A", "B"]), 4, Arrangement::RowMajor)
        .unwrap_err();
    assert_eq!(err, TablizerError::WidthTooSmall { width: 4, cols: 2 });
}

#[test]
fn construction_rejects_title_wider_than_banner() {
    let err = TableRenderer::new(&[1], "Banner", labels(&["A"]), 5, Arrangement::RowMajor)
        .unwrap_err();
    assert_eq!(
        err,
        TablizerError::TitleTooWide {
            name: "Banner".to_string(),
            width: 5,
        }
    );
}

#[test]
fn rows_truncate_when_size_is_not_a_multiple_of_cols() {
    let data: Vec<i32> = (1..=10).collect();
    let table = TableRenderer::new(&data, "Trunc", labels(&["A", "B", "C"]), 22, Arrangement::RowMajor)
        .unwrap();
    // 10 / 3 truncates; one trailing element is dropped.
    assert_eq!(table.rows(), 3);
    assert_eq!(table.cols(), 3);
}

#[test]
fn column_width_reserves_one_border_per_boundary_plus_one() {
    let table = TableRenderer::new(&[1, 2], "Width", labels(&["A", "B"]), 13, Arrangement::RowMajor)
        .unwrap();
    assert_eq!(table.column_width(), (13 - 3) / 2);

    let table = TableRenderer::new(&[1, 2, 3], "Width", labels(&["A", "B", "C"]), 22, Arrangement::RowMajor)
        .unwrap();
    assert_eq!(table.column_width(), (22 - 4) / 3);
}

#[test]
fn row_major_reads_consecutive_elements_per_row() {
    let data = [1, 2, 3, 4, 5, 6];
    let table = TableRenderer::new(&data, "Grid", labels(&["A", "B"]), 13, Arrangement::RowMajor)
        .unwrap();

    let output = table.render();
    let lines: Vec<&str> = output.text.lines().collect();
    assert_eq!(lines[6..9], ["|    1|    2|", "|    3|    4|", "|    5|    6|"]);
}

#[test]
fn column_major_reads_with_stride_equal_to_rows() {
    let data = [1, 2, 3, 4, 5, 6];
    let table = TableRenderer::new(&data, "Grid", labels(&["A", "B"]), 13, Arrangement::ColumnMajor)
        .unwrap();

    // Two column blocks of length 3: [1,2,3] and [4,5,6].
    let output = table.render();
    let lines: Vec<&str> = output.text.lines().collect();
    assert_eq!(lines[6..9], ["|    1|    4|", "|    2|    5|", "|    3|    6|"]);
}

#[test]
fn title_is_centered_with_odd_leftover_space_on_the_right() {
    let table = TableRenderer::new(&[1], "X", labels(&["A"]), 11, Arrangement::RowMajor)
        .unwrap();

    let output = table.render();
    let lines: Vec<&str> = output.text.lines().collect();
    // Leading blank line, then the banner: left padding (11 - 1 - 2) / 2 = 4,
    // right padding the remainder.
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "+---------+");
    assert_eq!(lines[2], "|    X    |");
    assert_eq!(lines[3], "+---------+");
}

#[test]
fn overflowing_float_cell_renders_default_and_annotates_the_row() {
    let data = [12345.678_f64];
    let table = TableRenderer::new(&data, "Num", labels(&["A"]), 7, Arrangement::RowMajor)
        .unwrap();
    assert_eq!(table.column_width(), 5);

    let output = table.render();
    // At precision 8 the value formats to "12345.67800000" (14 > 5), so the
    // cell falls back to the default rendering and the real text moves to the
    // row annotation.
    assert!(output.text.contains("|0.00000000|"));
    assert!(output.text.contains("\n\ncell: 0 value: 12345.67800000"));
    assert_eq!(
        output.warnings,
        vec![RenderWarning::CellOverflow {
            row: 0,
            cell: 0,
            value: "12345.67800000".to_string(),
        }]
    );
}

#[test]
fn overflowing_integer_cell_renders_zero_in_place() {
    let data = [123_456, 7];
    let table = TableRenderer::new(&data, "Ints", labels(&["A", "B"]), 13, Arrangement::RowMajor)
        .unwrap();

    let output = table.render();
    assert!(output.text.contains("|    0|    7|\n\ncell: 0 value: 123456\n"));
}

#[test]
fn overflowing_string_cell_renders_empty_in_place() {
    let data = ["ab", "cdefgh"];
    let table = TableRenderer::new(&data, "Text", labels(&["A", "B"]), 13, Arrangement::RowMajor)
        .unwrap();

    let output = table.render();
    assert!(output.text.contains("|   ab|     |\n\ncell: 1 value: cdefgh\n"));
}

#[test]
fn precision_override_applies_to_cells_and_overflow_substitutes() {
    let data = [12345.678_f64, 1.0];
    let table = TableRenderer::new(&data, "Prec", labels(&["A", "B"]), 13, Arrangement::RowMajor)
        .unwrap()
        .with_precision(2);

    let output = table.render();
    // "12345.68" (8 > 5) overflows; its default substitute "0.00" fits.
    assert!(output.text.contains("| 0.00| 1.00|\n\ncell: 0 value: 12345.68\n"));
}

#[test]
fn render_is_idempotent_across_calls() {
    let data = [1, 2, 3, 4];
    let table = TableRenderer::new(&data, "Same", labels(&["A", "B"]), 13, Arrangement::RowMajor)
        .unwrap();

    let first = table.render();
    let second = table.render();
    assert_eq!(first, second);
    // A fresh buffer per call: exactly one table, not an appended pair.
    assert_eq!(first.text.matches("Same").count(), 1);
}

#[test]
fn clean_render_carries_no_warnings() {
    let data = [1, 2, 3, 4];
    let table = TableRenderer::new(&data, "Clean", labels(&["A", "B"]), 13, Arrangement::RowMajor)
        .unwrap();
    assert!(table.render().warnings.is_empty());
}

#[test]
fn end_to_end_row_major_integers() {
    let data = [1, 2, 3, 4];
    let table = TableRenderer::new(&data, "Data", labels(&["A", "B"]), 13, Arrangement::RowMajor)
        .unwrap();
    assert_eq!(table.rows(), 2);
    assert_eq!(table.column_width(), 5);

    let expected = "\n\
        +-----------+\n\
        |   Data    |\n\
        +-----------+\n\
        |  A  |  B  |\n\
        +-----------+\n\
        |    1|    2|\n\
        |    3|    4|\n\
        +-----------+\n\
        \n";
    assert_eq!(table.render_to_string(), expected);
}
