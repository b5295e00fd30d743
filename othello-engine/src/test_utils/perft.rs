//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Color, GameConfig};

/// Count the leaves of the legal-move tree `depth` plies below the starting position.
///
/// A color with no legal move ends its line, unless `config.forced_pass` is set,
/// in which case it passes once (spending a ply) and the line ends only when
/// both colors are stuck.
pub fn run_perft(depth: u64, config: GameConfig) -> u64 {
    leaves_below(Board::new(), Color::Black, depth, config.forced_pass, false)
}

fn leaves_below(board: Board, color: Color, depth: u64, forced_pass: bool, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(color);
    if all_moves.is_empty() {
        if !forced_pass || passed {
            return 1;
        }

        return leaves_below(board, !color, depth - 1, forced_pass, true);
    }

    all_moves
        .map(|pos| {
            let mut child = board;
            child
                .apply_move(color, pos)
                .expect("generated move must be legal");
            leaves_below(child, !color, depth - 1, forced_pass, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1, GameConfig::default()), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2, GameConfig::default()), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3, GameConfig::default()), 56);
}
