use vault_solver::{
    EdgeLabel, Orientation, Piece, PieceId, ProbeResult, SelectOutcome, Session, SessionError,
    ShapeColor,
};

fn pieces(colors: &[ShapeColor]) -> Vec<Piece> {
    colors
        .iter()
        .enumerate()
        .map(|(i, &c)| Piece::new(PieceId(i as u32), c, Orientation::Horizontal))
        .collect()
}

#[test]
fn test_start_rejects_bad_configuration() {
    assert_eq!(
        Session::start(4, 4, Vec::new()).unwrap_err(),
        SessionError::NoPieces
    );
    assert_eq!(
        Session::start(0, 4, pieces(&[ShapeColor::Yellow])).unwrap_err(),
        SessionError::InvalidDimensions { height: 0, width: 4 }
    );
    assert_eq!(
        Session::start(4, 16, pieces(&[ShapeColor::Yellow])).unwrap_err(),
        SessionError::InvalidDimensions { height: 4, width: 16 }
    );
    assert!(Session::start(15, 15, pieces(&[ShapeColor::Yellow])).is_ok());
}

#[test]
fn test_fresh_session_state() {
    let session = Session::start(6, 4, pieces(&[ShapeColor::Blue, ShapeColor::Orange])).unwrap();
    assert_eq!(session.board().height(), 6);
    assert_eq!(session.board().width(), 4);
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.pending(), None);
    assert!(session.board().hits().is_empty());
    assert_eq!(session.board().revealed_count(), 0);
    assert!(session.discovered_pieces().is_empty());
    // blue and orange placements overlap most around the second row
    assert_eq!(session.suggestion(), Some((1, 1)));
    assert_eq!(session.score_grid().get(1, 1), 6);
    assert_eq!(session.score_grid().get(0, 0), 2);
}

#[test]
fn test_two_edge_hints_end_to_end() {
    let mut session = Session::start(4, 4, pieces(&[ShapeColor::Yellow])).unwrap();
    assert_eq!(session.select_cell(0, 0), Ok(SelectOutcome::Selected));
    session
        .record_result(ProbeResult::hit(ShapeColor::Yellow, Some(EdgeLabel::Left)))
        .unwrap();
    session.select_cell(0, 1).unwrap();
    session
        .record_result(ProbeResult::hit(ShapeColor::Yellow, Some(EdgeLabel::Right)))
        .unwrap();

    let found = session.discovered_pieces();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].piece.color(), ShapeColor::Yellow);
    assert_eq!((found[0].row, found[0].col), (0, 0));
    assert_eq!(session.attempts(), 2);

    let progress = session.progress();
    assert_eq!((progress.found, progress.total), (1, 1));
    assert!(progress.complete);
}

#[test]
fn test_record_without_selection_changes_nothing() {
    let mut session = Session::start(3, 3, pieces(&[ShapeColor::Yellow])).unwrap();
    assert_eq!(
        session.record_result(ProbeResult::Miss),
        Err(SessionError::NothingPending)
    );
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.board().revealed_count(), 0);
}

#[test]
fn test_selecting_revealed_cell_is_noop() {
    let mut session = Session::start(3, 3, pieces(&[ShapeColor::Yellow])).unwrap();
    session.probe(1, 1, ProbeResult::Miss).unwrap();
    assert_eq!(session.select_cell(1, 1), Ok(SelectOutcome::NoChange));
    assert_eq!(session.pending(), None);

    session.select_cell(0, 0).unwrap();
    assert_eq!(session.select_cell(1, 1), Ok(SelectOutcome::NoChange));
    assert_eq!(session.pending(), Some((0, 0)));
}

#[test]
fn test_new_selection_replaces_pending() {
    let mut session = Session::start(3, 3, pieces(&[ShapeColor::Yellow])).unwrap();
    session.select_cell(0, 0).unwrap();
    assert_eq!(
        session.select_cell(2, 1),
        Ok(SelectOutcome::Replaced { row: 0, col: 0 })
    );
    assert_eq!(session.select_cell(2, 1), Ok(SelectOutcome::Selected));
    session.record_result(ProbeResult::Miss).unwrap();

    let cell = session.board().cell(2, 1).unwrap();
    assert!(cell.is_miss());
    assert!(!session.board().cell(0, 0).unwrap().revealed);
    assert_eq!(session.pending(), None);
}

#[test]
fn test_out_of_bounds_selection() {
    let mut session = Session::start(3, 3, pieces(&[ShapeColor::Yellow])).unwrap();
    assert_eq!(
        session.select_cell(3, 0),
        Err(SessionError::OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(session.pending(), None);
}

#[test]
fn test_probe_rejects_revealed_cell() {
    let mut session = Session::start(3, 3, pieces(&[ShapeColor::Yellow])).unwrap();
    session.probe(0, 0, ProbeResult::Miss).unwrap();
    assert_eq!(
        session.probe(0, 0, ProbeResult::Miss),
        Err(SessionError::AlreadyRevealed { row: 0, col: 0 })
    );
    assert_eq!(session.attempts(), 1);
}

#[test]
fn test_misses_count_as_attempts_but_not_hits() {
    let mut session = Session::start(3, 3, pieces(&[ShapeColor::Yellow])).unwrap();
    session.probe(0, 0, ProbeResult::Miss).unwrap();
    session
        .probe(1, 1, ProbeResult::hit(ShapeColor::Yellow, None))
        .unwrap();
    assert_eq!(session.attempts(), 2);
    let hits = session.board().hits();
    assert_eq!(hits.len(), 1);
    assert_eq!((hits[0].row, hits[0].col), (1, 1));
    assert_eq!(hits[0].color, Some(ShapeColor::Yellow));
}

#[test]
fn test_analysis_matches_individual_queries() {
    let mut session =
        Session::start(5, 5, pieces(&[ShapeColor::Blue, ShapeColor::Orange])).unwrap();
    session
        .probe(2, 2, ProbeResult::hit(ShapeColor::Orange, Some(EdgeLabel::TopLeft)))
        .unwrap();
    session.probe(0, 0, ProbeResult::Miss).unwrap();

    let analysis = session.analysis();
    assert_eq!(analysis.discovery.discovered(), session.discovered_pieces());
    assert_eq!(analysis.scores, session.score_grid());
    assert_eq!(analysis.suggestion, session.suggestion());
    // orange is pinned to anchor (2, 2), so its other cells stand out
    let (r, c) = analysis.suggestion.unwrap();
    assert!([(2, 3), (3, 2), (3, 3)].contains(&(r, c)));
}

#[test]
fn test_suggestion_none_when_board_exhausted() {
    let mut session = Session::start(1, 2, pieces(&[ShapeColor::Yellow])).unwrap();
    session.probe(0, 0, ProbeResult::Miss).unwrap();
    session.probe(0, 1, ProbeResult::Miss).unwrap();
    assert_eq!(session.suggestion(), None);
    assert!(!session.progress().complete);
}

#[test]
fn test_clear_selection_drops_pending_cell() {
    let mut session = Session::start(2, 4, pieces(&[ShapeColor::Yellow])).unwrap();
    assert_eq!(session.clear_selection(), None);

    session.select_cell(1, 0).unwrap();
    let before = session.board().clone();
    assert_eq!(session.clear_selection(), Some((1, 0)));
    assert_eq!(session.pending(), None);
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.board(), &before);
    assert_eq!(
        session.record_result(ProbeResult::Miss),
        Err(SessionError::NothingPending)
    );

    // a fresh selection after cancelling is a plain selection
    assert_eq!(session.select_cell(0, 3), Ok(SelectOutcome::Selected));
}
