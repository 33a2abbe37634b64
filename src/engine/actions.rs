use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Действие игрока. Закрытый набор вариантов: некорректная форма
/// отсекается уже на уровне типа, без строковых сравнений в рантайме.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PlayerAction {
    Fold,
    /// Пропуск хода. Допустим, только если нечего уравнивать.
    Check,
    /// Уравнять текущую ставку (сколько хватит стека).
    Call,
    /// Повышение ДО указанной суммы — целевой ставки раунда.
    Raise(Chips),
    /// Поставить весь оставшийся стек.
    AllIn,
}
