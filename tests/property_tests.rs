//! Randomized checks of board invariants.
//!
//! Boards are filled from seeded `fastrand` generators so failures are
//! reproducible.

use omok::constants::WIN_LENGTH;
use omok::{Board, Direction, Place, Player};

const SEEDS: std::ops::Range<u64> = 0..200;

/// Scatter `stones` random stones for the given players.
fn random_board<'a>(
    rng: &mut fastrand::Rng,
    size: usize,
    players: &'a [Player],
    stones: usize,
) -> Board<'a> {
    let mut board = Board::new(size).unwrap();
    for _ in 0..stones {
        let player = &players[rng.usize(..players.len())];
        board
            .place_stone(rng.usize(..size), rng.usize(..size), player)
            .unwrap();
    }
    board
}

fn all_places(size: usize) -> impl Iterator<Item = Place> {
    (0..size).flat_map(move |y| (0..size).map(move |x| Place::new(x, y)))
}

/// Brute-force win check straight from the definition.
fn has_five(board: &Board<'_>, player: &Player) -> bool {
    let size = board.size();
    all_places(size).any(|start| {
        Direction::ALL.into_iter().any(|direction| {
            let line: Vec<Place> = start.line(direction, WIN_LENGTH).collect();
            line.len() == WIN_LENGTH
                && line.iter().all(|p| {
                    board.contains(p.x, p.y) && board.is_occupied_by(p.x, p.y, player).unwrap()
                })
        })
    })
}

#[test]
fn test_place_then_occupied() {
    let players = [Player::new("a"), Player::new("b")];
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let size = rng.usize(1..=20);
        let stones = rng.usize(0..50);
        let mut board = random_board(&mut rng, size, &players, stones);
        let (x, y) = (rng.usize(..size), rng.usize(..size));
        let player = &players[rng.usize(..2)];
        board.place_stone(x, y, player).unwrap();
        assert!(board.is_occupied_by(x, y, player).unwrap(), "seed {seed}");
        assert!(!board.is_empty(x, y).unwrap(), "seed {seed}");
    }
}

#[test]
fn test_full_iff_no_empty_cell() {
    let players = [Player::new("a"), Player::new("b")];
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let size = rng.usize(1..=6);
        let stones = rng.usize(0..=size * size * 4);
        let board = random_board(&mut rng, size, &players, stones);
        let any_empty = all_places(size).any(|p| board.is_empty(p.x, p.y).unwrap());
        assert_eq!(board.is_full(), !any_empty, "seed {seed}");
    }
}

#[test]
fn test_clear_empties_everything() {
    let players = [Player::new("a")];
    for seed in SEEDS.take(50) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let size = rng.usize(1..=12);
        let mut board = random_board(&mut rng, size, &players, size * size * 3);
        board.clear();
        let once = board.to_string();
        board.clear();
        assert_eq!(board.to_string(), once);
        assert!(!board.is_full());
        assert!(all_places(size).all(|p| board.is_empty(p.x, p.y).unwrap()));
    }
}

#[test]
fn test_is_won_by_matches_brute_force() {
    let players = [Player::new("a"), Player::new("b")];
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let size = rng.usize(5..=12);
        let stones = rng.usize(size * 2..=size * size);
        let board = random_board(&mut rng, size, &players, stones);
        for player in &players {
            assert_eq!(board.is_won_by(player), has_five(&board, player), "seed {seed}");
        }
    }
}

#[test]
fn test_winning_row_shape() {
    let players = [Player::new("a"), Player::new("b")];
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let size = rng.usize(5..=12);
        let stones = rng.usize(size * 2..=size * size);
        let board = random_board(&mut rng, size, &players, stones);

        let Some(row) = board.winning_row() else {
            assert!(players.iter().all(|p| !board.is_won_by(p)), "seed {seed}");
            continue;
        };
        let owner = board.winner().unwrap();
        assert!(board.is_won_by(owner), "seed {seed}");
        assert!(
            row.iter().all(|p| board.is_occupied_by(p.x, p.y, owner).unwrap()),
            "seed {seed}"
        );
        let straight = Direction::ALL
            .into_iter()
            .any(|d| row.windows(2).all(|pair| d.step(pair[0]) == Some(pair[1])));
        assert!(straight, "seed {seed}");
        let mut sorted = row.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), WIN_LENGTH, "seed {seed}");
    }
}

#[test]
fn test_winning_row_by_consistent_with_is_won_by() {
    let players = [Player::new("a"), Player::new("b"), Player::new("c")];
    for seed in SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let size = rng.usize(5..=10);
        let stones = rng.usize(size..=size * size);
        let board = random_board(&mut rng, size, &players, stones);
        for player in &players {
            let row = board.winning_row_by(player);
            assert_eq!(row.is_some(), board.is_won_by(player), "seed {seed}");
            if let Some(row) = row {
                assert!(row.iter().all(|p| board.is_occupied_by(p.x, p.y, player).unwrap()));
            }
        }
    }
}
