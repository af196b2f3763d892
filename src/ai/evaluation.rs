use crate::game::{Cell, PlayerId};

/// Number of cells in one scoring window.
pub const WINDOW_LEN: usize = 4;

/// A straight line of four cells, scored as one unit. Transient: built,
/// scored, discarded per window.
pub type Window = [Cell; WINDOW_LEN];

/// Scores a single 4-cell window from `player`'s point of view.
///
/// The search engine is agnostic to what a policy rewards; it only sums the
/// returned contributions. Higher means better for `player`.
pub trait EvaluationPolicy {
    fn evaluate_window(&self, window: &Window, player: PlayerId) -> f64;
}

/// Piece counts within one window.
fn tally(window: &Window, player: PlayerId) -> (usize, usize, usize) {
    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for &cell in window {
        match cell {
            Cell::Taken(p) if p == player => own += 1,
            Cell::Taken(_) => opp += 1,
            Cell::Empty => empty += 1,
        }
    }
    (own, opp, empty)
}

/// Beginner preset: builds its own lines but is blind to opponent threats.
pub struct EasyPolicy;

impl EvaluationPolicy for EasyPolicy {
    fn evaluate_window(&self, window: &Window, player: PlayerId) -> f64 {
        let (own, _, empty) = tally(window, player);
        if own == 3 && empty == 1 {
            5.0
        } else if own == 2 && empty == 2 {
            2.0
        } else {
            0.0
        }
    }
}

/// Full-strength preset: rewards own threats and penalizes the opponent's,
/// with opponent three-in-a-window weighted heaviest so the engine blocks.
pub struct HardPolicy;

impl EvaluationPolicy for HardPolicy {
    fn evaluate_window(&self, window: &Window, player: PlayerId) -> f64 {
        let (own, opp, empty) = tally(window, player);
        if own == 3 && empty == 1 {
            50.0
        } else if own == 2 && empty == 2 {
            10.0
        } else if opp == 3 && empty == 1 {
            -80.0
        } else if opp == 2 && empty == 2 {
            -10.0
        } else {
            0.0
        }
    }
}

/// Difficulty preset selecting one of the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Build the policy for this preset.
    pub fn policy(self) -> Box<dyn EvaluationPolicy> {
        match self {
            Difficulty::Easy => Box::new(EasyPolicy),
            Difficulty::Hard => Box::new(HardPolicy),
        }
    }
}
