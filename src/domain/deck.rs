use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// В колоде не хватает карт для запрошенной раздачи.
///
/// На стандартной колоде с разумным числом игроков не случается,
/// но страховка обязана быть.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("В колоде недостаточно карт: нужно {needed}, осталось {remaining}")]
pub struct InsufficientCards {
    pub needed: usize,
    pub remaining: usize,
}

/// Колода: упорядоченный список карт, раздача идёт с головы.
/// Перемешивание — только через RandomSource, сама колода порядок не меняет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода: ♠2..A, ♥2..A, ♣2..A, ♦2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Новая колода — равномерная случайная перестановка этой.
    /// Исходная не меняется.
    pub fn shuffled<R: RandomSource>(&self, rng: &mut R) -> Deck {
        let mut copy = self.clone();
        rng.shuffle(&mut copy.cards);
        copy
    }

    /// Снять n карт с головы. Возвращает (остаток колоды, снятые карты).
    pub fn deal(mut self, n: usize) -> Result<(Deck, Vec<Card>), InsufficientCards> {
        if n > self.cards.len() {
            return Err(InsufficientCards {
                needed: n,
                remaining: self.cards.len(),
            });
        }
        let rest = self.cards.split_off(n);
        Ok((Deck { cards: rest }, self.cards))
    }
}
