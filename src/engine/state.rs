use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::PlayerInHand;
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::HandHistory;

/// Полное состояние одной раздачи.
///
/// Снапшот: операции движка берут его по ссылке и возвращают новый,
/// не разделяя изменяемых структур с исходным. Снапшот сериализуем —
/// оркестратор сохраняет и рассылает его после каждого вызова.
///
/// Инварианты:
///   - до расчёта pot равен сумме total_bet всех игроков;
///   - round_bet любого игрока не превышает current_bet;
///   - community_cards внутри раздачи только растут: 0 → 3 → 4 → 5.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    /// Текущая улица.
    pub street: Street,
    /// Место дилера (кнопка).
    pub dealer_seat: SeatIndex,
    /// Чей сейчас ход; None — никто не должен действовать.
    pub current_actor: Option<SeatIndex>,
    /// Общие карты (0/3/4/5).
    pub community_cards: Vec<Card>,
    /// Банк раздачи.
    pub pot: Chips,
    /// Целевая ставка текущего раунда.
    pub current_bet: Chips,
    /// Размер последнего повышения.
    pub last_raise: Chips,
    /// Игроки в порядке мест: seat совпадает с индексом.
    pub players: Vec<PlayerInHand>,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Журнал событий раздачи — для реплея и аудита.
    pub history: HandHistory,
}

impl GameState {
    pub fn seats(&self) -> usize {
        self.players.len()
    }

    /// Игрок по месту.
    pub fn player(&self, seat: SeatIndex) -> Result<&PlayerInHand, EngineError> {
        self.players
            .get(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))
    }

    pub(crate) fn player_mut(&mut self, seat: SeatIndex) -> Result<&mut PlayerInHand, EngineError> {
        self.players
            .get_mut(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))
    }

    /// Сколько игроков ещё претендуют на банк.
    pub fn players_in_hand(&self) -> usize {
        self.players.iter().filter(|p| p.is_in_hand()).count()
    }
}
