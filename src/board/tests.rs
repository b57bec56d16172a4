use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 2, 3);
    assert_eq!(pos.to_index(), 16 + 8 + 3);

    let pos2 = Pos::from_index(27);
    assert_eq!(pos2, Pos::new(1, 2, 3));

    for idx in 0..TOTAL_CELLS {
        assert_eq!(Pos::from_index(idx).to_index(), idx);
    }
}

#[test]
#[should_panic]
fn test_pos_index_out_of_range() {
    let _ = Pos::from_index(64);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 4);
    assert_eq!(TOTAL_CELLS, 64);
}

#[test]
fn test_pos_ordering() {
    let a = Pos::new(0, 0, 3);
    let b = Pos::new(0, 1, 0);
    let c = Pos::new(1, 0, 0);
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn test_new_board_all_legal() {
    let board = Board::new();
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 64);
    assert!(moves.windows(2).all(|w| w[0] < w[1]));
    assert!(!board.is_full());
    assert!(board.is_board_empty());
}

#[test]
fn test_apply_records_history() {
    let mut board = Board::new();
    board.apply(Pos::from_index(10), Mark::X);
    board.apply(Pos::from_index(3), Mark::O);

    assert_eq!(board.get(Pos::from_index(10)), Mark::X);
    assert_eq!(board.get(Pos::from_index(3)), Mark::O);
    assert_eq!(board.history(), &[Pos::from_index(10), Pos::from_index(3)]);
    assert_eq!(board.legal_moves().len(), 62);
    assert!(!board.legal_moves().contains(&Pos::from_index(10)));
}

#[test]
fn test_apply_occupied_is_noop() {
    let mut board = Board::new();
    let pos = Pos::new(2, 2, 2);
    board.apply(pos, Mark::X);
    let before = board.clone();

    board.apply(pos, Mark::O);
    assert_eq!(board, before);
    assert_eq!(board.get(pos), Mark::X);
    assert_eq!(board.move_count(), 1);
}

#[test]
fn test_apply_empty_mark_is_noop() {
    let mut board = Board::new();
    board.apply(Pos::from_index(5), Mark::Empty);
    assert!(board.is_board_empty());
    assert_eq!(board.move_count(), 0);
}

#[test]
fn test_clone_is_independent() {
    let mut board = Board::new();
    board.apply(Pos::from_index(0), Mark::X);

    let mut copy = board.clone();
    assert_eq!(copy, board);
    copy.apply(Pos::from_index(1), Mark::O);

    assert_eq!(board.move_count(), 1);
    assert!(board.is_empty(Pos::from_index(1)));
    assert_eq!(copy.move_count(), 2);
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for (i, pos) in Pos::all().enumerate() {
        board.apply(pos, if i % 2 == 0 { Mark::X } else { Mark::O });
    }
    assert!(board.is_full());
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.move_count(), 64);
}

#[test]
fn test_key_ignores_move_order() {
    let mut a = Board::new();
    a.apply(Pos::from_index(1), Mark::X);
    a.apply(Pos::from_index(2), Mark::O);
    a.apply(Pos::from_index(3), Mark::X);

    let mut b = Board::new();
    b.apply(Pos::from_index(3), Mark::X);
    b.apply(Pos::from_index(2), Mark::O);
    b.apply(Pos::from_index(1), Mark::X);

    assert_eq!(a.key(), b.key());

    let mut c = Board::new();
    c.apply(Pos::from_index(1), Mark::O);
    assert_ne!(a.key(), c.key());
}

#[test]
fn test_from_layers() {
    let board = Board::from_layers([
        ["X...", "....", "....", "...."],
        ["....", ".O..", "....", "...."],
        ["....", "....", "....", "...."],
        ["....", "....", "....", "...X"],
    ]);
    assert_eq!(board.get(Pos::new(0, 0, 0)), Mark::X);
    assert_eq!(board.get(Pos::new(1, 1, 1)), Mark::O);
    assert_eq!(board.get(Pos::new(3, 3, 3)), Mark::X);
    assert_eq!(board.move_count(), 3);
}
