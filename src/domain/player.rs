use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex};

/// Последнее действие игрока — для истории и внешнего отображения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LastAction {
    Blind,
    Check,
    Call,
    Raise,
    AllIn,
    Fold,
}

/// Состояние игрока внутри одной раздачи.
///
/// Инвариант: stack + total_bet постоянны на протяжении раздачи,
/// пока расчёт не раздаст банк.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerInHand {
    pub player_id: PlayerId,
    /// Место за столом; совпадает с индексом в GameState.players.
    pub seat: SeatIndex,
    /// Текущий стек.
    pub stack: Chips,
    /// Карманные карты: пусто или ровно две.
    pub hole_cards: Vec<Card>,
    pub folded: bool,
    pub all_in: bool,
    /// Всего внесено в банк за раздачу. Не убывает.
    pub total_bet: Chips,
    /// Ставка текущего раунда, сбрасывается на границе улиц.
    pub round_bet: Chips,
    pub last_action: Option<LastAction>,
}

impl PlayerInHand {
    pub fn new(player_id: PlayerId, seat: SeatIndex, stack: Chips) -> Self {
        Self {
            player_id,
            seat,
            stack,
            hole_cards: Vec::new(),
            folded: false,
            all_in: false,
            total_bet: Chips::ZERO,
            round_bet: Chips::ZERO,
            last_action: None,
        }
    }

    /// Сфолдивший или олл-ин игрок больше не действует до конца раздачи.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Претендует ли игрок на банк.
    pub fn is_in_hand(&self) -> bool {
        !self.folded
    }
}
