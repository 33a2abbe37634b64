use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};

/// Категория покерной руки, от слабейшей к сильнейшей.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

/// Лучшая 5-карточная рука игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluatedHand {
    pub category: HandCategory,
    /// Числовой тай-брейк: больше — сильнее внутри одной категории.
    ///
    /// Схема (u32): [r0:4][r1:4][r2:4][r3:4][r4:4] — пять значимых
    /// рангов от старшего к младшему, хвост добит двойками. Ранг 2..14
    /// помещается в 4 бита.
    pub tiebreak: u32,
    /// Сами пять карт комбинации, в порядке значимости.
    pub best_five: [Card; 5],
}

impl EvaluatedHand {
    /// Собрать руку из категории и пяти значимых рангов (по убыванию).
    pub(crate) fn build(category: HandCategory, ranks: [Rank; 5], best_five: [Card; 5]) -> Self {
        Self {
            category,
            tiebreak: pack_ranks(ranks),
            best_five,
        }
    }
}

fn pack_ranks(ranks: [Rank; 5]) -> u32 {
    ranks
        .iter()
        .fold(0u32, |acc, r| (acc << 4) | (*r as u32 & 0x0F))
}

/// Полный порядок на руках: категория, затем тай-брейк, затем
/// покарточное сравнение кикеров по убыванию. Последний шаг — запасной,
/// для совместимости: при текущей упаковке тай-брейка он ничего
/// не решает.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    (a.category as u8)
        .cmp(&(b.category as u8))
        .then_with(|| a.tiebreak.cmp(&b.tiebreak))
        .then_with(|| {
            for (ca, cb) in a.best_five.iter().zip(b.best_five.iter()) {
                let ord = ca.rank.cmp(&cb.rank);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        })
}
