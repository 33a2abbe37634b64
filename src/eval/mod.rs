//! Оценка силы покерной руки: лучшая 5-карточная комбинация из 5–7 карт.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate, find_winners, InvalidHandSize};
pub use hand_rank::{compare, EvaluatedHand, HandCategory};
