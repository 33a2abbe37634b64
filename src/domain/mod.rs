//! Доменная модель покера: карты, фишки, колода, игроки, улицы.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;

/// Стабильный идентификатор игрока. Выдаётся внешним слоем.
pub type PlayerId = u64;

/// Индекс места за столом (0..N-1). Фиксирован на всю раздачу.
pub type SeatIndex = u8;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
