//! End-to-end legality scenarios against the public API.

use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use strictly_quoridor::{
    Cell, GameState, InvariantSet, Move, MoveError, MoveGraph, Player, PlayerId, QuoridorInvariants,
    Snapshot, Wall, WallSet, choose_move, legal_token_destinations, path_exists,
    validate_wall_placement,
};

fn position(one: (Cell, u8), two: (Cell, u8), horizontal: Vec<Cell>, vertical: Vec<Cell>) -> GameState {
    GameState::try_from(Snapshot {
        players: [
            Player::new("ada", one.1, one.0),
            Player::new("bob", two.1, two.0),
        ],
        walls: WallSet::new(horizontal, vertical),
    })
    .expect("valid snapshot")
}

fn cells(list: &[(i8, i8)]) -> BTreeSet<Cell> {
    list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

#[test]
fn test_opening_destinations() {
    let state = GameState::new("ada", "bob");
    let dest = legal_token_destinations(&state, PlayerId::One);
    assert_eq!(dest.cells, cells(&[(4, 1), (6, 1), (5, 2)]));
}

#[test]
fn test_straight_jump_over_adjacent_token() {
    let state = position((Cell::new(5, 5), 10), (Cell::new(5, 6), 10), vec![], vec![]);
    let dest = legal_token_destinations(&state, PlayerId::One);

    assert_eq!(dest.cells, cells(&[(4, 5), (6, 5), (5, 4), (5, 7)]));
    assert!(!dest.contains(&Cell::new(5, 6)));
}

#[test]
fn test_diagonal_jumps_when_landing_is_walled() {
    let state = position(
        (Cell::new(5, 5), 9),
        (Cell::new(5, 6), 10),
        vec![Cell::new(5, 7)],
        vec![],
    );
    let dest = legal_token_destinations(&state, PlayerId::One);

    assert!(dest.contains(&Cell::new(4, 6)));
    assert!(dest.contains(&Cell::new(6, 6)));
    assert!(!dest.contains(&Cell::new(5, 7)));
    assert!(!dest.contains(&Cell::new(5, 6)));
}

#[test]
fn test_enclosing_wall_is_rejected() {
    // Three sides of (5, 5) are closed; the fourth would seal ada in.
    let state = position(
        (Cell::new(5, 5), 7),
        (Cell::new(1, 9), 10),
        vec![Cell::new(4, 5), Cell::new(5, 6)],
        vec![Cell::new(5, 5)],
    );
    let closing = Wall::vertical(6, 4);

    assert_eq!(
        validate_wall_placement(&state, PlayerId::Two, closing),
        Err(MoveError::BlocksPath(closing))
    );
    assert_eq!(legal_token_destinations(&state, PlayerId::One).cells, cells(&[(6, 5)]));
}

#[test]
fn test_goal_row_has_zero_distance() {
    for x in 1..=9 {
        let state = position((Cell::new(x, 9), 10), (Cell::new(x, 5), 10), vec![], vec![]);
        let graph = state.graph();
        assert_eq!(graph.distance(Cell::new(x, 9), PlayerId::One.goal()), Some(0));
        assert!(path_exists(&graph, Cell::new(x, 9), PlayerId::One.goal()));
    }
}

#[test]
fn test_corner_boundary() {
    let state = position((Cell::new(1, 1), 10), (Cell::new(5, 9), 10), vec![], vec![]);
    assert_eq!(
        legal_token_destinations(&state, PlayerId::One).cells,
        cells(&[(1, 2), (2, 1)])
    );

    let mut state = state;
    state.place_wall(PlayerId::Two, Wall::horizontal(1, 2)).unwrap();
    assert_eq!(legal_token_destinations(&state, PlayerId::One).cells, cells(&[(2, 1)]));

    // The wall closing the corner itself crosses the first one.
    assert_eq!(
        validate_wall_placement(&state, PlayerId::Two, Wall::vertical(2, 1)),
        Err(MoveError::Collision(Wall::vertical(2, 1)))
    );
    assert_eq!(
        validate_wall_placement(&state, PlayerId::Two, Wall::vertical(3, 1)),
        Err(MoveError::BlocksPath(Wall::vertical(3, 1)))
    );
}

#[test]
fn test_destinations_never_include_opponent_or_walled_cells() {
    let state = position(
        (Cell::new(4, 4), 8),
        (Cell::new(4, 5), 10),
        vec![Cell::new(3, 4)],
        vec![Cell::new(5, 4)],
    );
    let dest = legal_token_destinations(&state, PlayerId::One);

    assert!(!dest.contains(&Cell::new(4, 5)));
    // H(3, 4) closes (4, 3) below, V(5, 4) closes (5, 4) to the right.
    assert!(!dest.contains(&Cell::new(4, 3)));
    assert!(!dest.contains(&Cell::new(5, 4)));
    assert!(dest.contains(&Cell::new(3, 4)));
}

#[test]
fn test_accepted_walls_keep_both_paths() {
    let state = position(
        (Cell::new(5, 3), 8),
        (Cell::new(4, 7), 10),
        vec![Cell::new(4, 4)],
        vec![Cell::new(6, 5)],
    );
    for wall in Wall::all() {
        if validate_wall_placement(&state, PlayerId::One, wall).is_ok() {
            let walls: Vec<Wall> = state.walls().iter().chain([wall]).collect();
            let graph = MoveGraph::build(&state.positions(), walls);
            for id in PlayerId::iter() {
                assert!(path_exists(&graph, *state.player(id).position(), id.goal()), "{wall}");
            }
        }
    }
}

#[test]
fn test_rejected_walls_cut_a_path() {
    // Ada's corner has a roof, so closing its right side strands her.
    let state = position(
        (Cell::new(1, 1), 9),
        (Cell::new(5, 9), 10),
        vec![Cell::new(1, 2)],
        vec![],
    );

    let mut blocking = 0;
    for wall in Wall::all() {
        if validate_wall_placement(&state, PlayerId::Two, wall) == Err(MoveError::BlocksPath(wall)) {
            blocking += 1;
            let walls: Vec<Wall> = state.walls().iter().chain([wall]).collect();
            let graph = MoveGraph::build(&state.positions(), walls);
            let stranded = PlayerId::iter()
                .any(|id| !path_exists(&graph, *state.player(id).position(), id.goal()));
            assert!(stranded, "{wall}");
        }
    }
    assert!(blocking > 0);
}

#[test]
fn test_graph_build_is_deterministic() {
    let state = position(
        (Cell::new(2, 6), 7),
        (Cell::new(2, 7), 10),
        vec![Cell::new(2, 8), Cell::new(6, 3)],
        vec![Cell::new(4, 6)],
    );
    assert_eq!(state.graph(), state.graph());
    assert_eq!(
        state.graph().edges().collect::<Vec<_>>(),
        state.graph().edges().collect::<Vec<_>>()
    );
}

#[test]
fn test_self_play_only_makes_legal_moves() {
    let mut state = GameState::new("ada", "bob");
    let mut to_move = PlayerId::One;

    for _ in 0..300 {
        if state.winner().is_some() {
            break;
        }
        let mov = choose_move(&state, to_move).expect("selector finds a move");
        state.apply(to_move, mov).expect("selected move is legal");
        assert!(QuoridorInvariants::check_all(&state).is_ok());
        to_move = to_move.opponent();
    }

    if state.winner().is_some() {
        assert!(matches!(
            choose_move(&state, to_move),
            Err(MoveError::GameAlreadyOver(_))
        ));
    }
}

#[test]
fn test_moves_replay_from_notation() {
    let mut state = GameState::new("ada", "bob");
    let mut to_move = PlayerId::One;
    for text in ["T 5 2", "T 5 8", "H 4 3", "V 6 7", "T 4 2"] {
        let mov: Move = text.parse().unwrap();
        state.apply(to_move, mov).unwrap();
        to_move = to_move.opponent();
    }

    assert_eq!(*state.player(PlayerId::One).position(), Cell::new(4, 2));
    assert_eq!(*state.player(PlayerId::Two).walls_remaining(), 9);
    assert_eq!(state.walls().len(), 2);
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut state = GameState::new("ada", "bob");
    state.place_wall(PlayerId::One, Wall::horizontal(3, 3)).unwrap();
    state.place_wall(PlayerId::Two, Wall::vertical(7, 6)).unwrap();

    let json = serde_json::to_string(&state.snapshot()).unwrap();
    let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(GameState::try_from(snapshot).unwrap(), state);
}
