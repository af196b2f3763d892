use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::{Board, IdAllocator, PlayerId};

use super::agent::{random_column, Agent, SearchResult};
use super::evaluation::EvaluationPolicy;
use super::evaluator::evaluate_board;

/// Negascout (principal variation search) agent.
///
/// Negamax framework: a `color` of +1 or -1 flips perspective each ply so a
/// single maximizing routine serves both players. The first child of a node
/// is searched with the full window; later children get a null-window probe
/// first and are only re-searched at full width when the probe lands inside
/// `(alpha, beta)`.
pub struct NegascoutAgent {
    id: PlayerId,
    rng: StdRng,
}

impl NegascoutAgent {
    pub fn new(ids: &IdAllocator) -> Self {
        Self::with_id(ids.allocate())
    }

    pub fn with_id(id: PlayerId) -> Self {
        NegascoutAgent {
            id,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Agent for NegascoutAgent {
    fn choose_column(
        &mut self,
        board: &Board,
        max_depth: u32,
        policy: &dyn EvaluationPolicy,
        opponent: PlayerId,
    ) -> Option<usize> {
        let result = negascout(
            board,
            max_depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            1,
            self.id,
            opponent,
            policy,
        );
        result
            .column
            .or_else(|| random_column(&mut self.rng, &board.valid_moves()))
    }

    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        "Negascout"
    }
}

/// Negascout recursion. The returned score is from the perspective of the
/// side to move (`color` * the agent-perspective value); callers negate it.
#[allow(clippy::too_many_arguments)]
pub(crate) fn negascout(
    board: &Board,
    depth: u32,
    mut alpha: f64,
    beta: f64,
    color: i8,
    me: PlayerId,
    opponent: PlayerId,
    policy: &dyn EvaluationPolicy,
) -> SearchResult {
    let valid_moves = board.valid_moves();

    // Terminal priority: own win, then opponent win, then exhausted board.
    let i_won = board.has_four_in_a_row(me);
    let opponent_won = board.has_four_in_a_row(opponent);
    if depth == 0 || i_won || opponent_won || valid_moves.is_empty() {
        let score = if i_won {
            f64::from(color) * f64::INFINITY
        } else if opponent_won {
            f64::from(color) * f64::NEG_INFINITY
        } else if valid_moves.is_empty() {
            0.0
        } else {
            f64::from(color) * evaluate_board(board, me, policy)
        };
        return SearchResult {
            column: None,
            score,
        };
    }

    let mover = if color == 1 { me } else { opponent };
    let mut best = SearchResult {
        column: None,
        score: f64::NEG_INFINITY,
    };

    for (i, &col) in valid_moves.iter().enumerate() {
        let next = board
            .simulate_move(col, mover)
            .expect("valid_moves only yields open columns");

        let score = if i == 0 {
            // Principal variation: full window
            -negascout(&next, depth - 1, -beta, -alpha, -color, me, opponent, policy).score
        } else {
            // Null-window probe; re-search at full width only if the probe
            // lands strictly inside (alpha, beta)
            let probe =
                -negascout(&next, depth - 1, -alpha - 1.0, -alpha, -color, me, opponent, policy)
                    .score;
            if alpha < probe && probe < beta {
                -negascout(&next, depth - 1, -beta, -probe, -color, me, opponent, policy).score
            } else {
                probe
            }
        };

        if score > best.score {
            best = SearchResult {
                column: Some(col),
                score,
            };
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    best
}
