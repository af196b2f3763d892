mod agent;
mod evaluation;
mod evaluator;
mod minimax;
mod negascout;
mod random;

pub use agent::Agent;
pub use evaluation::{Difficulty, EasyPolicy, EvaluationPolicy, HardPolicy, Window, WINDOW_LEN};
pub use evaluator::{evaluate_board, CENTER_COLUMN};
pub use minimax::MinimaxAgent;
pub use negascout::NegascoutAgent;
pub use random::RandomAgent;
