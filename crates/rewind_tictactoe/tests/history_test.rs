//! Tests for the branchable history and the rules it builds on.

use rewind_tictactoe::{
    Board, History, Outcome, Player, Position, Rejection, Square, apply_move, detect,
    invariants::{HistoryInvariants, InvariantSet},
};

const E: Square = Square::Empty;
const A: Square = Square::Occupied(Player::X);
const B: Square = Square::Occupied(Player::O);

fn record_all(cells: &[Position]) -> (History, usize) {
    cells.iter().fold((History::new(), 0), |(history, cursor), pos| {
        history.record_move(cursor, *pos).expect("Valid move")
    })
}

#[test]
fn test_detect_reference_boards() {
    assert_eq!(detect(&Board::new()), Outcome::InProgress);

    let won = Board::from_squares([A, A, A, E, E, E, E, E, E]);
    assert_eq!(
        detect(&won),
        Outcome::Win(Player::X, [Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    let drawn = Board::from_squares([A, B, A, B, A, B, B, A, B]);
    assert_eq!(detect(&drawn), Outcome::Draw);
}

#[test]
fn test_apply_move_never_mutates_input() {
    let board = Board::from_squares([A, E, E, E, B, E, E, E, E]);
    let copy = board;

    let next = apply_move(&board, Position::BottomRight, Player::X).unwrap();

    assert_eq!(board, copy);
    assert_eq!(next.diff(&board), vec![Position::BottomRight]);
}

#[test]
fn test_branch_length_is_cursor_plus_two() {
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
    ];
    let (history, _) = record_all(&moves);
    let len = history.len();

    for cursor in 0..len - 1 {
        let free = Position::ALL
            .into_iter()
            .find(|pos| history.snapshots()[cursor].board().is_empty(*pos))
            .unwrap();
        let (branched, step) = history.record_move(cursor, free).unwrap();
        assert_eq!(branched.len(), cursor + 2);
        assert_eq!(step, cursor + 1);
        assert!(HistoryInvariants::check_all(&branched).is_ok());
    }
}

#[test]
fn test_mover_parity_for_every_step() {
    let (history, _) = record_all(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ]);

    for (step, snapshot) in history.snapshots().iter().enumerate().skip(1) {
        let pos = (*snapshot.last_move()).unwrap();
        let mover = snapshot.board().get(pos).player().unwrap();
        assert_eq!(mover == Player::X, (step - 1) % 2 == 0);
    }
}

#[test]
fn test_rejections_leave_history_unchanged() {
    let (history, cursor) = record_all(&[
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ]);
    let before = history.clone();

    assert_eq!(
        history.record_move(cursor, Position::BottomRight),
        Err(Rejection::GameOver)
    );
    assert_eq!(
        history.record_move(2, Position::TopLeft),
        Err(Rejection::OccupiedCell(Position::TopLeft))
    );
    assert_eq!(history, before);
}

#[test]
fn test_drawn_board_rejects_as_game_over() {
    // X O X / X O O / O X X
    let cells = [0, 1, 2, 4, 7, 5, 3, 6, 8].map(|i| Position::from_index(i).unwrap());
    let (history, cursor) = record_all(&cells);
    assert_eq!(cursor, 9);
    assert_eq!(detect(history.latest().board()), Outcome::Draw);

    // Every square is taken, but the decided game is reported first.
    assert_eq!(
        history.record_move(9, Position::Center),
        Err(Rejection::GameOver)
    );
}
