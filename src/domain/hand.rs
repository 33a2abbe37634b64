use serde::{Deserialize, Serialize};

/// Улица раздачи. Переходы только вперёд, улицы не повторяются.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}
