//! Очередь хода и завершение раунда ставок.
//!
//! Никаких флагов «уже ходил»: должен ли игрок действовать, определяет
//! сравнение его round_bet с current_bet. Любой обход мест ограничен
//! одним кругом — «следующего нет» вместо вечного цикла.

use crate::domain::SeatIndex;
use crate::engine::state::GameState;

/// Следующий, кто должен действовать: места по возрастанию начиная
/// после from_seat, с заворотом. Пропускаются сфолдившие, олл-ины и те,
/// кто уже уравнял current_bet. Не больше одного круга.
pub fn next_actor(state: &GameState, from_seat: SeatIndex) -> Option<SeatIndex> {
    let n = state.players.len();
    if n == 0 {
        return None;
    }
    let mut idx = (from_seat as usize + 1) % n;
    for _ in 0..n {
        let p = &state.players[idx];
        if p.can_act() && p.round_bet < state.current_bet {
            return Some(idx as SeatIndex);
        }
        idx = (idx + 1) % n;
    }
    None
}

/// Завершён ли раунд ставок: действовать некому, либо каждый, кто может
/// действовать, уравнял текущую ставку.
pub fn is_round_ended(state: &GameState) -> bool {
    state
        .players
        .iter()
        .filter(|p| p.can_act())
        .all(|p| p.round_bet >= state.current_bet)
}

/// Первое место начиная с from_seat (включительно, по кругу), где игрок
/// способен действовать. Для назначения первого актёра улицы.
pub fn first_to_act_from(state: &GameState, from_seat: SeatIndex) -> Option<SeatIndex> {
    let n = state.players.len();
    if n == 0 {
        return None;
    }
    let mut idx = from_seat as usize % n;
    for _ in 0..n {
        if state.players[idx].can_act() {
            return Some(idx as SeatIndex);
        }
        idx = (idx + 1) % n;
    }
    None
}
