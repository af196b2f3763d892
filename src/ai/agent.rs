use rand::rngs::StdRng;
use rand::Rng;

use crate::game::{Board, LegalActions, PlayerId};

use super::evaluation::EvaluationPolicy;

/// Outcome of one (sub)tree search: the best column found at this level, if
/// any, and its score.
///
/// `column` stays `None` at leaves and whenever no child strictly improved on
/// the initial bound (for example when every reply loses). The root turns
/// that into the random fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SearchResult {
    pub column: Option<usize>,
    pub score: f64,
}

/// A column-choosing player.
pub trait Agent {
    /// Pick a column for the current position.
    ///
    /// `max_depth` bounds the search tree; depth 0 forces immediate heuristic
    /// evaluation. `opponent` must differ from [`Agent::id`]. Returns `None`
    /// only when the board has no valid moves left; a full board is never
    /// masked by fabricating a move.
    fn choose_column(
        &mut self,
        board: &Board,
        max_depth: u32,
        policy: &dyn EvaluationPolicy,
        opponent: PlayerId,
    ) -> Option<usize>;

    /// This agent's own piece identity.
    fn id(&self) -> PlayerId;

    /// Display name.
    fn name(&self) -> &str;
}

/// Uniform random choice among `moves`; the silent fallback when search
/// produced no definite best column.
pub(crate) fn random_column(rng: &mut StdRng, moves: &LegalActions) -> Option<usize> {
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_column_from_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_column(&mut rng, &vec![]), None);
    }

    #[test]
    fn test_random_column_stays_in_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let moves = vec![1, 4, 6];
        for _ in 0..100 {
            let col = random_column(&mut rng, &moves).unwrap();
            assert!(moves.contains(&col));
        }
    }
}
