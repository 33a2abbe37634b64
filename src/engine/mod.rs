//! Покерный движок: ставки, очередь хода, сайд-поты, расчёт раздачи.
//!
//! Основные операции (см. `game_loop`):
//!   - `init_game` / `start_new_hand` — собрать раздачу
//!   - `post_blinds` — блайнды и первый актёр
//!   - `deal_hole_cards` / `deal_flop` / `deal_turn` / `deal_river`
//!   - `apply_action` — применить действие игрока
//!   - `advance_round` — переход улицы
//!
//! Расчёт раздачи — `settlement::settle`, разложение банка на слои —
//! `side_pots::compute_side_pots`.
//!
//! Все операции чистые: снапшот на входе, новый снапшот на выходе.
//! Отказ — атомарный no-op: Err, исходное состояние не тронуто.

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod settlement;
pub mod side_pots;
pub mod state;
pub mod validation;

pub use actions::PlayerAction;
pub use betting::{is_round_ended, next_actor};
pub use errors::EngineError;
pub use game_loop::{
    advance_dealer, advance_round, apply_action, deal_flop, deal_hole_cards, deal_river,
    deal_turn, init_game, post_blinds, start_new_hand, ActionOutcome, AdvanceOutcome,
};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use settlement::{settle, HandResult, PotShare, SettlementResult};
pub use side_pots::{compute_side_pots, SidePot};
pub use state::GameState;

/// Интерфейс источника случайности для движка.
///
/// Вынесен в отдельный trait, чтобы боевой код брал системную энтропию,
/// а тесты и реплей — детерминированную последовательность (см. infra).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
