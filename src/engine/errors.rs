use thiserror::Error;

use crate::domain::deck::InsufficientCards;
use crate::domain::SeatIndex;
use crate::eval::InvalidHandSize;

/// Ошибки движка.
///
/// Любая из них — синхронный отказ без изменения состояния: операция
/// либо выполняется целиком, либо не выполняется вовсе. Движок ничего
/// не ретраит и не восстанавливает — это решения оркестратора.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Некорректная конфигурация: {0}")]
    InvalidConfiguration(&'static str),

    #[error("Место {0} не существует")]
    InvalidSeat(SeatIndex),

    #[error("Сейчас не ход места {0}")]
    NotPlayersTurn(SeatIndex),

    #[error("Игрок уже сфолдил или в олл-ине и действовать не может")]
    PlayerCannotAct,

    #[error("Невозможен check: нужно уравнять текущую ставку")]
    CannotCheck,

    #[error("Рейз обязан превышать текущую ставку раунда")]
    RaiseNotAboveCurrent,

    #[error("Недостаточно фишек для заявленного рейза")]
    NotEnoughChips,

    #[error("Блайнды уже поставлены")]
    BlindsAlreadyPosted,

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error(transparent)]
    InsufficientCards(#[from] InsufficientCards),

    #[error(transparent)]
    InvalidHandSize(#[from] InvalidHandSize),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
