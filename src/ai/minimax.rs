use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::{Board, IdAllocator, PlayerId};

use super::agent::{random_column, Agent, SearchResult};
use super::evaluation::EvaluationPolicy;
use super::evaluator::evaluate_board;

/// Minimax agent with alpha-beta pruning.
///
/// Alternates maximizing (own) and minimizing (opponent) plies, pruning a
/// sibling list as soon as `beta <= alpha`. Columns are tried in ascending
/// order and ties keep the earliest move (strict comparisons).
pub struct MinimaxAgent {
    id: PlayerId,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(ids: &IdAllocator) -> Self {
        Self::with_id(ids.allocate())
    }

    pub fn with_id(id: PlayerId) -> Self {
        MinimaxAgent {
            id,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Agent for MinimaxAgent {
    fn choose_column(
        &mut self,
        board: &Board,
        max_depth: u32,
        policy: &dyn EvaluationPolicy,
        opponent: PlayerId,
    ) -> Option<usize> {
        let result = minimax(
            board,
            max_depth,
            self.id,
            opponent,
            true,
            f64::NEG_INFINITY,
            f64::INFINITY,
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
        "Minimax"
    }
}

/// Depth-limited minimax with alpha-beta pruning, scored from `me`'s
/// perspective.
#[allow(clippy::too_many_arguments)]
pub(crate) fn minimax(
    board: &Board,
    depth: u32,
    me: PlayerId,
    opponent: PlayerId,
    maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    policy: &dyn EvaluationPolicy,
) -> SearchResult {
    let valid_moves = board.valid_moves();

    // Terminal priority: own win, then opponent win, then exhausted board.
    let i_won = board.has_four_in_a_row(me);
    let opponent_won = board.has_four_in_a_row(opponent);
    if depth == 0 || i_won || opponent_won || valid_moves.is_empty() {
        let score = if i_won {
            f64::INFINITY
        } else if opponent_won {
            f64::NEG_INFINITY
        } else if valid_moves.is_empty() {
            0.0
        } else {
            evaluate_board(board, me, policy)
        };
        return SearchResult {
            column: None,
            score,
        };
    }

    let mut best = SearchResult {
        column: None,
        score: if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        },
    };

    for &col in &valid_moves {
        let mover = if maximizing { me } else { opponent };
        let next = board
            .simulate_move(col, mover)
            .expect("valid_moves only yields open columns");
        let result = minimax(&next, depth - 1, me, opponent, !maximizing, alpha, beta, policy);

        if maximizing {
            if result.score > best.score {
                best = SearchResult {
                    column: Some(col),
                    score: result.score,
                };
            }
            alpha = alpha.max(best.score);
        } else {
            if result.score < best.score {
                best = SearchResult {
                    column: Some(col),
                    score: result.score,
                };
            }
            beta = beta.min(best.score);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::evaluation::{EvaluationPolicy, HardPolicy, Window};
    use crate::ai::RandomAgent;
    use crate::game::{COLS, ROWS};

    /// Symmetric policy that scores every window zero, isolating the center
    /// bonus and terminal detection.
    struct ZeroPolicy;

    impl EvaluationPolicy for ZeroPolicy {
        fn evaluate_window(&self, _window: &Window, _player: PlayerId) -> f64 {
            0.0
        }
    }

    fn two_players() -> (PlayerId, PlayerId) {
        let ids = IdAllocator::new();
        (ids.allocate(), ids.allocate())
    }

    #[test]
    fn test_selects_legal_column() {
        let ids = IdAllocator::new();
        let mut agent = MinimaxAgent::new(&ids);
        let opponent = ids.allocate();
        let board = Board::new();
        let col = agent
            .choose_column(&board, 4, &HardPolicy, opponent)
            .unwrap();
        assert!(board.valid_moves().contains(&col));
    }

    #[test]
    fn test_takes_winning_move_at_depth_one() {
        let (me, opp) = two_players();
        let mut board = Board::new();
        // Three own pieces at the bottom row; col 3 completes the four.
        for col in 0..3 {
            board.drop_piece(col, me).unwrap();
            board.drop_piece(col, opp).unwrap();
        }
        let mut agent = MinimaxAgent::with_id(me);
        let col = agent.choose_column(&board, 1, &HardPolicy, opp).unwrap();
        assert_eq!(col, 3, "should complete the horizontal four");
    }

    #[test]
    fn test_blocks_opponent_win() {
        let (me, opp) = two_players();
        let mut board = Board::new();
        // Opponent threatens cols 0..=2 at the bottom; only col 3 blocks.
        board.drop_piece(0, opp).unwrap();
        board.drop_piece(1, opp).unwrap();
        board.drop_piece(2, opp).unwrap();
        board.drop_piece(6, me).unwrap();
        board.drop_piece(6, me).unwrap();
        let mut agent = MinimaxAgent::with_id(me);
        let col = agent.choose_column(&board, 2, &HardPolicy, opp).unwrap();
        assert_eq!(col, 3, "should block the opponent's four at col 3");
    }

    #[test]
    fn test_block_found_with_symmetric_policy() {
        // The block is forced by the game tree alone, not by the heuristic.
        let (me, opp) = two_players();
        let mut board = Board::new();
        board.drop_piece(0, opp).unwrap();
        board.drop_piece(1, opp).unwrap();
        board.drop_piece(2, opp).unwrap();
        let mut agent = MinimaxAgent::with_id(me);
        let col = agent.choose_column(&board, 2, &ZeroPolicy, opp).unwrap();
        assert_eq!(col, 3);
    }

    #[test]
    fn test_prefers_win_over_block() {
        let (me, opp) = two_players();
        let mut board = Board::new();
        // Both sides threaten col 3; taking the win ends the game.
        for col in 0..3 {
            board.drop_piece(col, me).unwrap();
            board.drop_piece(col, opp).unwrap();
        }
        let mut agent = MinimaxAgent::with_id(me);
        let col = agent.choose_column(&board, 4, &HardPolicy, opp).unwrap();
        assert_eq!(col, 3, "should take the win rather than defend");
    }

    #[test]
    fn test_prefers_center_on_empty_board() {
        let (me, opp) = two_players();
        let board = Board::new();
        let mut agent = MinimaxAgent::with_id(me);
        let col = agent.choose_column(&board, 4, &ZeroPolicy, opp).unwrap();
        assert_eq!(col, 3, "center bonus should pull the first move to col 3");
    }

    #[test]
    fn test_full_board_returns_none() {
        let (me, opp) = two_players();
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                // Checker-ish fill; legality of the pattern is irrelevant here.
                let who = if (row + col) % 2 == 0 { me } else { opp };
                board.drop_piece(col, who).unwrap();
            }
        }
        assert!(board.is_full());
        let mut agent = MinimaxAgent::with_id(me);
        assert_eq!(agent.choose_column(&board, 4, &HardPolicy, opp), None);
    }

    #[test]
    fn test_depth_zero_falls_back_to_random_legal_move() {
        let (me, opp) = two_players();
        let board = Board::new();
        let mut agent = MinimaxAgent::with_id(me);
        for _ in 0..20 {
            let col = agent.choose_column(&board, 0, &HardPolicy, opp).unwrap();
            assert!(board.valid_moves().contains(&col));
        }
    }

    #[test]
    fn test_all_losing_lines_still_yield_legal_move() {
        let (me, opp) = two_players();
        let mut board = Board::new();
        // Opponent has an open-ended three: cols 1..=3 occupied, wins at 0 or
        // 4. Every reply loses, so search leaves the column unset and the
        // fallback must still produce a legal move.
        board.drop_piece(1, opp).unwrap();
        board.drop_piece(2, opp).unwrap();
        board.drop_piece(3, opp).unwrap();
        let mut agent = MinimaxAgent::with_id(me);
        for _ in 0..10 {
            let col = agent.choose_column(&board, 2, &ZeroPolicy, opp).unwrap();
            assert!(board.valid_moves().contains(&col));
        }
    }

    #[test]
    fn test_full_game_vs_self_completes() {
        let ids = IdAllocator::new();
        let mut first = MinimaxAgent::new(&ids);
        let mut second = MinimaxAgent::new(&ids);
        let mut board = Board::new();
        let mut turn = 0;

        while !board.is_full()
            && !board.has_four_in_a_row(first.id())
            && !board.has_four_in_a_row(second.id())
        {
            let col = if turn % 2 == 0 {
                first
                    .choose_column(&board, 3, &HardPolicy, second.id())
                    .unwrap()
            } else {
                second
                    .choose_column(&board, 3, &HardPolicy, first.id())
                    .unwrap()
            };
            let mover = if turn % 2 == 0 { first.id() } else { second.id() };
            board.drop_piece(col, mover).unwrap();
            turn += 1;
        }
        assert!(turn <= ROWS * COLS);
    }

    #[test]
    fn test_beats_random_agent() {
        let ids = IdAllocator::new();
        let mut wins = 0;
        let games = 20;

        for game in 0..games {
            let mut minimax = MinimaxAgent::new(&ids);
            let mut random = RandomAgent::new(&ids);
            let minimax_starts = game % 2 == 0;
            let mut board = Board::new();
            let mut turn = 0;

            loop {
                if board.is_full() {
                    break;
                }
                let minimax_to_move = (turn % 2 == 0) == minimax_starts;
                let col = if minimax_to_move {
                    minimax
                        .choose_column(&board, 4, &HardPolicy, random.id())
                        .unwrap()
                } else {
                    random
                        .choose_column(&board, 0, &HardPolicy, minimax.id())
                        .unwrap()
                };
                let mover = if minimax_to_move {
                    minimax.id()
                } else {
                    random.id()
                };
                board.drop_piece(col, mover).unwrap();
                if board.has_four_in_a_row(mover) {
                    if minimax_to_move {
                        wins += 1;
                    }
                    break;
                }
                turn += 1;
            }
        }

        assert!(
            wins as f64 / games as f64 > 0.8,
            "minimax should beat random >80% of the time, got {wins}/{games}"
        );
    }

    #[test]
    fn test_name() {
        let ids = IdAllocator::new();
        assert_eq!(MinimaxAgent::new(&ids).name(), "Minimax");
    }
}
