use glyphgrid::{
    scan,
    test_support::{pattern_bits, SheetBuilder},
    GlyphTable, GridCoord, ImageSource, Pixel, ScanOptions,
};
use pretty_assertions::assert_eq;

const A: [&str; 8] = [
    ".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#", "",
];

fn entries(table: &GlyphTable) -> Vec<(GridCoord, String)> {
    table
        .iter()
        .map(|(c, m)| (c, m.as_str().to_string()))
        .collect()
}

#[test]
fn end_to_end_five_wide_glyph() {
    let img = SheetBuilder::new(2, 3, 8).glyph(0, 2, &A).build();
    assert_eq!(img.width(), 16);
    assert_eq!(img.height(), 24);

    let table = scan(&img, &ScanOptions::new(16, 1, 8));
    assert_eq!(table.len(), 1);
    let mask = table.get(GridCoord::new(0, 2)).unwrap();
    assert_eq!(mask.len(), 40);
    assert_eq!(mask.as_str(), pattern_bits(&A, 5, 8));
    assert_eq!(&mask.as_str()[..16], "0111111010010000");
}

#[test]
fn recovers_each_width_below_cell_size() {
    for w in 1..8usize {
        // Ink on a diagonal so every column has at least one white pixel.
        let rows: Vec<String> = (0..8)
            .map(|dy| {
                (0..w)
                    .map(|dx| if (dx + dy) % 3 == 0 || dy == 0 { '#' } else { '.' })
                    .collect()
            })
            .collect();
        let pattern: Vec<&str> = rows.iter().map(String::as_str).collect();
        let img = SheetBuilder::new(1, 1, 8).glyph(0, 0, &pattern).build();
        let table = scan(&img, &ScanOptions::new(0, 1, 8));
        let mask = table.get(GridCoord::new(0, 0)).unwrap();
        assert_eq!(mask.width(8), w, "width {w}");
        assert_eq!(mask.as_str(), pattern_bits(&pattern, w, 8), "width {w}");
    }
}

#[test]
fn columns_after_terminator_are_ignored() {
    let pattern = ["#.##", "#..#", "#.#."];
    let img = SheetBuilder::new(1, 1, 8).glyph(0, 0, &pattern).build();
    let table = scan(&img, &ScanOptions::new(0, 1, 8));
    assert_eq!(table.get(GridCoord::new(0, 0)).unwrap().as_str(), "11100000");
}

#[test]
fn blank_cells_produce_nothing() {
    let img = SheetBuilder::new(4, 2, 8).glyph(2, 1, &["#"]).build();
    let table = scan(&img, &ScanOptions::new(0, 2, 8));
    assert_eq!(
        table.coords().collect::<Vec<_>>(),
        vec![GridCoord::new(2, 1)]
    );
}

#[test]
fn fully_inked_width_produces_nothing() {
    let img = SheetBuilder::new(2, 1, 8)
        .glyph(0, 0, &["########"])
        .glyph(1, 0, &["#......#"])
        .build();
    let table = scan(&img, &ScanOptions::new(0, 1, 8));
    assert_eq!(table.len(), 1);
    assert!(table.contains(GridCoord::new(1, 0)));
    assert!(!table.contains(GridCoord::new(0, 0)));
}

#[test]
fn only_opaque_white_counts_as_ink() {
    let img = SheetBuilder::new(3, 1, 8)
        .pixel(0, 0, Pixel::new(255, 255, 255, 128))
        .pixel(8, 0, Pixel::rgb(200, 200, 200))
        .pixel(16, 0, Pixel::WHITE)
        .build();
    let table = scan(&img, &ScanOptions::new(0, 1, 8));
    assert_eq!(
        entries(&table),
        vec![(GridCoord::new(2, 0), "10000000".to_string())]
    );
}

#[test]
fn rows_outside_range_are_not_scanned() {
    let img = SheetBuilder::new(2, 4, 8)
        .glyph(0, 0, &["#"])
        .glyph(1, 1, &["#"])
        .glyph(0, 2, &["#"])
        .glyph(1, 3, &["#"])
        .build();
    let table = scan(&img, &ScanOptions::new(8, 2, 8));
    assert_eq!(
        table.coords().collect::<Vec<_>>(),
        vec![GridCoord::new(1, 1), GridCoord::new(0, 2)]
    );
}

#[test]
fn scan_order_is_row_major_and_coords_match_origins() {
    let mut sheet = SheetBuilder::new(3, 2, 8);
    for row in 0..2 {
        for col in 0..3 {
            sheet = sheet.glyph(col, row, &["#"]);
        }
    }
    let table = scan(&sheet.build(), &ScanOptions::new(0, 2, 8));
    let coords: Vec<GridCoord> = table.coords().collect();
    assert_eq!(
        coords,
        vec![
            GridCoord::new(0, 0),
            GridCoord::new(1, 0),
            GridCoord::new(2, 0),
            GridCoord::new(0, 1),
            GridCoord::new(1, 1),
            GridCoord::new(2, 1),
        ]
    );
}

#[test]
fn scan_is_deterministic() {
    let img = SheetBuilder::new(4, 4, 8)
        .glyph(0, 1, &A)
        .glyph(3, 2, &["##", "#", "##"])
        .build();
    let opts = ScanOptions::new(0, 4, 8);
    let first = scan(&img, &opts);
    let second = scan(&img, &opts);
    assert_eq!(first, second);
    assert_eq!(entries(&first), entries(&second));
}

#[test]
fn smaller_cells() {
    let img = SheetBuilder::new(2, 1, 4)
        .glyph(0, 0, &["##", ".#"])
        .glyph(1, 0, &["####"])
        .build();
    let table = scan(&img, &ScanOptions::new(0, 1, 4));
    assert_eq!(
        entries(&table),
        vec![(GridCoord::new(0, 0), "10001100".to_string())]
    );
}

#[test]
fn stored_masks_hold_invariants() {
    let img = SheetBuilder::new(4, 2, 8)
        .glyph(0, 0, &A)
        .glyph(1, 0, &["#######"])
        .glyph(2, 1, &["..#", ".#", "#"])
        .build();
    let table = scan(&img, &ScanOptions::new(0, 2, 8));
    assert_eq!(table.len(), 3);
    for (_, mask) in &table {
        assert_eq!(mask.len() % 8, 0);
        assert!(mask.len() < 64);
        assert!(mask.has_ink());
    }
}
