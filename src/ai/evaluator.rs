//! Heuristic scoring of a whole (non-terminal) position: a center-column
//! occupancy bonus plus the policy's score for every 4-cell window on the
//! board.

use crate::game::{Board, Cell, PlayerId, COLS, ROWS};

use super::evaluation::{EvaluationPolicy, Window, WINDOW_LEN};

/// The column whose occupancy earns the fixed bonus.
pub const CENTER_COLUMN: usize = 3;

const CENTER_WEIGHT: f64 = 3.0;

/// Score `board` for `me` under `policy`. Higher is better for `me`.
pub fn evaluate_board(board: &Board, me: PlayerId, policy: &dyn EvaluationPolicy) -> f64 {
    center_bonus(board, me)
        + score_rows(board, me, policy)
        + score_columns(board, me, policy)
        + score_diagonals(board, me, policy)
}

/// Central play dominates Connect Four; reward every own piece in column 3.
fn center_bonus(board: &Board, me: PlayerId) -> f64 {
    let count = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COLUMN) == Cell::Taken(me))
        .count();
    count as f64 * CENTER_WEIGHT
}

fn score_rows(board: &Board, me: PlayerId, policy: &dyn EvaluationPolicy) -> f64 {
    let mut score = 0.0;
    for row in 0..ROWS {
        for col in 0..=COLS - WINDOW_LEN {
            let window: Window = std::array::from_fn(|i| board.get(row, col + i));
            score += policy.evaluate_window(&window, me);
        }
    }
    score
}

fn score_columns(board: &Board, me: PlayerId, policy: &dyn EvaluationPolicy) -> f64 {
    let mut score = 0.0;
    for col in 0..COLS {
        for row in 0..=ROWS - WINDOW_LEN {
            let window: Window = std::array::from_fn(|i| board.get(row + i, col));
            score += policy.evaluate_window(&window, me);
        }
    }
    score
}

fn score_diagonals(board: &Board, me: PlayerId, policy: &dyn EvaluationPolicy) -> f64 {
    let mut score = 0.0;
    for row in 0..=ROWS - WINDOW_LEN {
        // Down-right (\)
        for col in 0..=COLS - WINDOW_LEN {
            let window: Window = std::array::from_fn(|i| board.get(row + i, col + i));
            score += policy.evaluate_window(&window, me);
        }
        // Down-left (/)
        for col in WINDOW_LEN - 1..COLS {
            let window: Window = std::array::from_fn(|i| board.get(row + i, col - i));
            score += policy.evaluate_window(&window, me);
        }
    }
    score
}
