use std::fs;

use tempfile::TempDir;

use shape_board::canvas::{Color, FillMode, Geometry, PlainRasterizer, Rasterizer, ShapeKind};
use shape_board::{Board, BoardError, LoadOutcome, Selector, ShapeId};

/// (type, anchor, params, fill, color) of every entry, ignoring ids
fn snapshot(board: &Board) -> Vec<(ShapeKind, (i32, i32), (i32, i32), FillMode, Color)> {
    board
        .entries()
        .iter()
        .map(|e| {
            (
                e.shape().kind(),
                e.shape().anchor(),
                e.shape().params(),
                e.fill(),
                e.color().clone(),
            )
        })
        .collect()
}

fn populated_board() -> Board {
    let mut board = Board::new();
    board
        .add_triangle(20, 2, 6, FillMode::Fill, Color::Yellow)
        .unwrap();
    board
        .add_circle(60, 12, 7, FillMode::Frame, Color::Green)
        .unwrap();
    board
        .add_rectangle(2, 15, 12, 6, FillMode::None, Color::Named("orange".to_string()))
        .unwrap();
    board
        .add_line(0, 24, 79, 0, FillMode::None, Color::Red)
        .unwrap();
    board
}

#[test]
fn test_save_clear_load_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("board.txt");

    let mut board = populated_board();
    let before = snapshot(&board);

    assert_eq!(board.save(&path).unwrap(), 4);
    board.clear();
    assert!(board.is_empty());

    assert_eq!(board.load(&path).unwrap(), LoadOutcome::Loaded(4));
    assert_eq!(snapshot(&board), before);

    // Ids keep counting after clear
    let ids: Vec<u32> = board.entries().iter().map(|e| e.id().get()).collect();
    assert_eq!(ids, vec![5, 6, 7, 8]);
}

#[test]
fn test_saved_file_format() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("board.txt");

    populated_board().save(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Triangle 20 2 6 0 fill yellow",
            "Circle 60 12 7 0 frame green",
            "Rectangle 2 15 12 6 none orange",
            "Line 0 24 79 0 none red",
        ]
    );
}

#[test]
fn test_load_into_fresh_board_renders_identically() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("board.txt");
    let rasterizer = PlainRasterizer::new();

    let mut saved = populated_board();
    saved.save(&path).unwrap();
    let expected = rasterizer.rasterize(saved.render());

    let mut restored = Board::new();
    restored.load(&path).unwrap();
    assert_eq!(rasterizer.rasterize(restored.render()), expected);
}

#[test]
fn test_load_missing_file_keeps_board() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("new-board.txt");

    let mut board = populated_board();
    assert_eq!(board.load(&path).unwrap(), LoadOutcome::Created);
    assert_eq!(board.len(), 4);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_undo_after_n_additions() {
    let mut board = populated_board();
    let before = snapshot(&board);
    board.select(Selector::Point { x: 20, y: 4 }).unwrap();

    let removed = board.undo().unwrap();
    assert_eq!(removed.id(), ShapeId::from(4));
    assert_eq!(snapshot(&board), before[..3].to_vec());
}

#[test]
fn test_duplicate_rejected_without_mutation() {
    let mut board = populated_board();
    let before = snapshot(&board);
    let next = board.next_id();

    let err = board
        .add_circle(60, 12, 7, FillMode::Fill, Color::Blue)
        .unwrap_err();
    assert!(matches!(err, BoardError::DuplicateShape(_)));
    assert_eq!(snapshot(&board), before);
    assert_eq!(board.next_id(), next);
}

#[test]
fn test_select_remove_flow() {
    let mut board = populated_board();

    // Line passes through its own endpoints
    let entry = board.select(Selector::Point { x: 79, y: 0 }).unwrap();
    assert_eq!(entry.shape().kind(), ShapeKind::Line);

    let removed = board.remove_selected().unwrap();
    assert_eq!(removed.id(), ShapeId::from(4));
    assert_eq!(board.selected(), None);
    assert!(matches!(
        board.remove_selected(),
        Err(BoardError::NothingSelected)
    ));
    assert_eq!(board.len(), 3);
}

#[test]
fn test_load_extreme_line_renders_clipped() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("board.txt");
    fs::write(&path, "Line -2147483648 5 2147483647 5 none none\n").unwrap();

    let mut board = Board::new();
    assert_eq!(board.load(&path).unwrap(), LoadOutcome::Loaded(1));
    assert_eq!(board.render().painted_count(), 80);

    let entry = board.select(Selector::Point { x: 40, y: 5 }).unwrap();
    assert_eq!(entry.id(), ShapeId::from(1));
    assert!(matches!(
        board.select(Selector::Point { x: 40, y: 6 }),
        Err(BoardError::ShapeNotFound(_))
    ));
}
