use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, IdAllocator, PlayerId};

use super::agent::Agent;
use super::evaluation::EvaluationPolicy;

/// An agent that selects uniformly at random from the valid columns.
/// Baseline opponent for strength tests.
pub struct RandomAgent {
    id: PlayerId,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(ids: &IdAllocator) -> Self {
        Self::with_id(ids.allocate())
    }

    pub fn with_id(id: PlayerId) -> Self {
        RandomAgent {
            id,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_column(
        &mut self,
        board: &Board,
        _max_depth: u32,
        _policy: &dyn EvaluationPolicy,
        _opponent: PlayerId,
    ) -> Option<usize> {
        let moves = board.valid_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.random_range(0..moves.len())])
    }

    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::evaluation::HardPolicy;

    #[test]
    fn test_selects_legal_column() {
        let ids = IdAllocator::new();
        let mut agent = RandomAgent::new(&ids);
        let opponent = ids.allocate();
        let board = Board::new();
        let legal = board.valid_moves();

        for _ in 0..100 {
            let col = agent
                .choose_column(&board, 0, &HardPolicy, opponent)
                .unwrap();
            assert!(legal.contains(&col), "column {col} is not legal");
        }
    }

    #[test]
    fn test_full_board_returns_none() {
        let ids = IdAllocator::new();
        let mut agent = RandomAgent::new(&ids);
        let opponent = ids.allocate();
        let mut board = Board::new();
        for col in 0..crate::game::COLS {
            for _ in 0..crate::game::ROWS {
                board.drop_piece(col, agent.id()).unwrap();
            }
        }
        assert_eq!(agent.choose_column(&board, 0, &HardPolicy, opponent), None);
    }

    #[test]
    fn test_name() {
        let ids = IdAllocator::new();
        assert_eq!(RandomAgent::new(&ids).name(), "Random");
    }
}
