//! Битовые маски рангов для поиска стритов.

use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 — двойка, бит 12 — туз.
pub type RankMask = u16;

/// Маска одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << ((rank as u8) - 2)
}

/// Маска набора рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= 1 << ((ranks[i] as u8) - 2);
        i += 1;
    }
    mask
}

/// Все десять стритов и старшая карта каждого, от wheel к бродвею.
/// В wheel (A2345) туз младший, стрит считается пятёрочным.
pub const STRAIGHT_MASKS: [(RankMask, Rank); 10] = [
    (
        mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]),
        Rank::Five,
    ),
    (
        mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
        Rank::Six,
    ),
    (
        mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
        Rank::Seven,
    ),
    (
        mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
        Rank::Eight,
    ),
    (
        mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
        Rank::Nine,
    ),
    (
        mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
        Rank::Ten,
    ),
    (
        mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
        Rank::Jack,
    ),
    (
        mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
        Rank::Queen,
    ),
    (
        mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
        Rank::King,
    ),
    (
        mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
        Rank::Ace,
    ),
];

/// Старший стрит в маске рангов, если есть.
/// Дубликаты рангов на маску не влияют: пара не удлиняет стрит.
pub fn detect_straight(mask: RankMask) -> Option<Rank> {
    STRAIGHT_MASKS
        .iter()
        .rev()
        .find(|(m, _)| mask & *m == *m)
        .map(|(_, high)| *high)
}
