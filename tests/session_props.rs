use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use vault_solver::{
    anchor_offset, autoplay, label_at, valid_edge_labels, HiddenLayout, Orientation, Piece,
    PieceId, Session, ShapeColor,
};

const HEIGHT: usize = 7;
const WIDTH: usize = 7;

fn random_pieces(rng: &mut SmallRng, distinct: bool) -> Vec<Piece> {
    let count = rng.random_range(1..=4);
    (0..count)
        .map(|i| {
            let color = if distinct {
                ShapeColor::ALL[i]
            } else {
                ShapeColor::ALL[rng.random_range(0..ShapeColor::ALL.len())]
            };
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            Piece::new(PieceId(i as u32), color, orientation)
        })
        .collect()
}

/// A session with a random hidden layout and a random number of truthful
/// probes already recorded.
fn random_session(seed: u64) -> (Session, HiddenLayout) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let distinct = rng.random_bool(0.5);
    // crowded duplicates can fail to pack; draw again
    let (pieces, layout) = loop {
        let pieces = random_pieces(&mut rng, distinct);
        if let Ok(layout) = HiddenLayout::random(&mut rng, HEIGHT, WIDTH, &pieces) {
            break (pieces, layout);
        }
    };
    let mut session = Session::start(HEIGHT, WIDTH, pieces).unwrap();
    let report_edges = rng.random_bool(0.7);
    let probes = rng.random_range(0..HEIGHT * WIDTH);
    for _ in 0..probes {
        let r = rng.random_range(0..HEIGHT);
        let c = rng.random_range(0..WIDTH);
        if session.board().cell(r, c).unwrap().revealed {
            continue;
        }
        session
            .probe(r, c, layout.outcome_at(r, c, report_edges))
            .unwrap();
    }
    (session, layout)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn discovered_footprints_are_matching_hits(seed in any::<u64>()) {
        let (session, _) = random_session(seed);
        let board = session.board();
        for found in session.discovered_pieces() {
            let (w, h) = found.piece.dims();
            prop_assert!(found.row + h <= board.height());
            prop_assert!(found.col + w <= board.width());
            for (r, c) in found.footprint() {
                prop_assert!(board.cell(r, c).unwrap().is_hit_of(found.piece.color()));
            }
        }
    }

    #[test]
    fn discovery_is_idempotent(seed in any::<u64>()) {
        let (session, _) = random_session(seed);
        prop_assert_eq!(session.discovery(), session.discovery());
    }

    #[test]
    fn revealed_cells_never_score(seed in any::<u64>()) {
        let (session, _) = random_session(seed);
        let scores = session.score_grid();
        for ((r, c), cell) in session.board().iter() {
            if cell.revealed {
                prop_assert_eq!(scores.get(r, c), 0);
            }
        }
    }

    #[test]
    fn suggestion_is_first_maximum(seed in any::<u64>()) {
        let (session, _) = random_session(seed);
        let scores = session.score_grid();
        let unrevealed: Vec<_> = session
            .board()
            .iter()
            .filter(|(_, cell)| !cell.revealed)
            .map(|(pos, _)| pos)
            .collect();
        match session.suggestion() {
            None => prop_assert!(unrevealed.is_empty()),
            Some((r, c)) => {
                let max = unrevealed.iter().map(|&(rr, cc)| scores.get(rr, cc)).max().unwrap();
                let first = unrevealed
                    .iter()
                    .copied()
                    .find(|&(rr, cc)| scores.get(rr, cc) == max)
                    .unwrap();
                prop_assert_eq!((r, c), first);
            }
        }
    }

    #[test]
    fn autoplay_locates_distinct_pieces(seed in any::<u64>(), report_edges in any::<bool>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pieces = random_pieces(&mut rng, true);
        let layout = HiddenLayout::random(&mut rng, HEIGHT, WIDTH, &pieces).unwrap();
        let mut session = Session::start(HEIGHT, WIDTH, pieces).unwrap();
        let attempts = autoplay(&mut session, &layout, report_edges).unwrap();
        prop_assert!(session.progress().complete);
        prop_assert!(attempts <= HEIGHT * WIDTH);
        let mut found = session.discovered_pieces();
        found.sort_by_key(|d| d.piece.id());
        prop_assert_eq!(found, layout.placements().to_vec());
    }
}

#[test]
fn labels_round_trip_through_anchor_offsets() {
    for color in ShapeColor::ALL {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let (w, h) = color.def().dims(orientation);
            for dr in 0..h {
                for dc in 0..w {
                    if let Some(label) = label_at(dr, dc, w, h) {
                        assert!(valid_edge_labels(w, h).contains(&label));
                        assert!(anchor_offset(label, w, h).matches((dr, dc), (0, 0)));
                    }
                }
            }
            // every offered label names at least one cell
            for &label in valid_edge_labels(w, h) {
                let named = (0..h)
                    .flat_map(|dr| (0..w).map(move |dc| (dr, dc)))
                    .any(|(dr, dc)| label_at(dr, dc, w, h) == Some(label));
                assert!(named, "{label} on {w}x{h}");
            }
        }
    }
}
