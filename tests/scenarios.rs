use clickchess::chess_board::test_utils::board_from_diagram;
use clickchess::{ChessBoard, ChessField, ClickOutcome, Color, GameSession, MoveRejection, PieceType, SessionConfig};

fn click(session: &mut GameSession, row: i32, col: i32) -> ClickOutcome {
    session.click(Some((row, col)))
}

#[test]
fn pawn_double_step_from_start_row() {
    let mut session = GameSession::new();
    let pawn = *session.board().get(1, 4).unwrap().piece().unwrap();
    assert!(session.board().is_empty(2, 4).unwrap());
    assert!(session.board().is_empty(3, 4).unwrap());
    assert!(session.board().is_valid_move(Some(&pawn), 3, 4));

    click(&mut session, 1, 4);
    let outcome = click(&mut session, 3, 4);
    assert!(matches!(outcome, ClickOutcome::Moved { captured: None, .. }));
    assert_eq!(session.board().get(3, 4).unwrap().piece().unwrap().kind, PieceType::Pawn);
    assert!(session.board().is_empty(1, 4).unwrap());
    assert_eq!(session.current_player(), Color::Black);
}

#[test]
fn rook_blocked_by_piece_in_between() {
    let board = board_from_diagram(
        "
        ........
        ........
        ........
        ........
        ........
        ........
        ........
        R.N.....",
    );
    let rook = board.get(0, 0).unwrap().piece().unwrap();
    assert!(!board.is_valid_move(Some(rook), 0, 4));
    assert_eq!(board.check_move(Some(rook), 0, 4), Err(MoveRejection::PathBlocked));
}

#[test]
fn knight_jumps_over_occupied_squares() {
    for (b2, c2) in [('.', '.'), ('P', 'P'), ('p', 'P'), ('q', 'r')] {
        let diagram = format!(
            "
            ........
            ........
            ........
            ........
            ........
            ..p.....
            .{}{}.....
            .N......",
            b2, c2
        );
        let board = board_from_diagram(&diagram);
        let knight = board.get(0, 1).unwrap().piece().unwrap();
        assert!(board.is_valid_move(Some(knight), 2, 2), "b2={} c2={}", b2, c2);
    }
}

#[test]
fn bishop_captures_on_clear_diagonal() {
    let board = board_from_diagram(
        "
        ....k...
        ........
        ........
        ........
        ........
        ....n...
        ........
        ..B.K...",
    );
    let mut session = GameSession::from_board(board, Color::White, SessionConfig::default());
    let bishop = *session.board().get(0, 2).unwrap().piece().unwrap();
    assert!(session.board().is_valid_move(Some(&bishop), 2, 4));

    click(&mut session, 0, 2);
    let outcome = click(&mut session, 2, 4);
    let ClickOutcome::Moved { captured: Some(captured), .. } = outcome else {
        panic!("expected capture, got {:?}", outcome);
    };
    assert_eq!(captured.kind, PieceType::Knight);
    assert_eq!(session.board().get(2, 4).unwrap().piece().unwrap().kind, PieceType::Bishop);
    assert_eq!(session.captured(Color::Black).len(), 1);
    assert_eq!(session.captured(Color::Black)[0].kind, PieceType::Knight);
}

#[test]
fn self_capture_rejected_for_any_piece() {
    let board = board_from_diagram(
        "
        ........
        ........
        ........
        ........
        ........
        ..P.....
        .PPP....
        .NBQK...",
    );
    let cases = [((0, 1), (1, 3)), ((0, 2), (1, 1)), ((0, 3), (1, 3)), ((0, 4), (1, 3)), ((1, 2), (2, 2))];
    for ((r, c), (tr, tc)) in cases {
        let piece = board.get(r, c).unwrap().piece().unwrap();
        assert_eq!(
            board.check_move(Some(piece), tr, tc),
            Err(MoveRejection::SelfCapture),
            "{:?} to ({}, {})",
            piece.kind,
            tr,
            tc
        );
    }
}

#[test]
fn king_cannot_reach_two_squares() {
    let board = board_from_diagram(
        "
        ........
        ........
        ........
        ....K...
        ........
        ........
        ........
        ........",
    );
    let king = board.get(4, 4).unwrap().piece().unwrap();
    assert!(!board.is_valid_move(Some(king), 4, 6));
    assert!(board.is_valid_move(Some(king), 4, 5));
}

#[test]
fn opening_board_has_sixteen_pieces_each() {
    let board = ChessBoard::new();
    assert_eq!(board.count(Color::White), 16);
    assert_eq!(board.count(Color::Black), 16);
    for (field, piece) in board.pieces() {
        assert_eq!(piece.position, Some(field));
    }
    assert_eq!(board.pieces().filter(|(f, _)| f.row >= 2 && f.row <= 5).count(), 0);
    assert_eq!(board.get(0, 3).unwrap().piece().unwrap().kind, PieceType::Queen);
    assert_eq!(board.get(7, 4).unwrap().piece().unwrap().kind, PieceType::King);
    assert_eq!(ChessField::new(0, 3).as_algebraic(), "d1");
}

#[test]
fn failed_moves_never_flip_turn() {
    let mut session = GameSession::new();
    for (row, col) in [(1, 4), (4, 4), (0, 0), (3, 0), (6, 0), (5, 0)] {
        click(&mut session, row, col);
        assert_eq!(session.current_player(), Color::White);
    }
}
