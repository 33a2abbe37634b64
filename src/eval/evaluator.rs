//! Вычисление лучшей 5-карточной комбинации из карманных и общих карт.
//!
//! Вместо перебора всех C(7,5) сочетаний — проверка категорий от
//! сильнейшей к слабейшей по всем картам сразу: масти и ранги считаются
//! один раз, стриты ищутся по битовой маске. Результат тот же, что у
//! честного перебора.

use std::cmp::Ordering;

use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::player::PlayerInHand;
use crate::domain::PlayerId;
use crate::eval::hand_rank::{compare, EvaluatedHand, HandCategory};
use crate::eval::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Неверное количество карт на входе оценщика.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Неверный размер руки: {hole} карманных и {community} общих карт")]
pub struct InvalidHandSize {
    pub hole: usize,
    pub community: usize,
}

/// Оценить лучшую руку: ровно 2 карманные карты и от 3 до 5 общих.
///
/// Оценка по трём общим картам (флоп) тоже определена, хотя на вскрытии
/// она не встречается.
pub fn evaluate(hole: &[Card], community: &[Card]) -> Result<EvaluatedHand, InvalidHandSize> {
    if hole.len() != 2 || !(3..=5).contains(&community.len()) {
        return Err(InvalidHandSize {
            hole: hole.len(),
            community: community.len(),
        });
    }

    let mut cards: Vec<Card> = Vec::with_capacity(7);
    cards.extend_from_slice(hole);
    cards.extend_from_slice(community);
    // Старшие ранги вперёд: дальше любые выборки кикеров — префиксы.
    cards.sort_by(|a, b| b.rank.cmp(&a.rank));

    Ok(evaluate_cards(&cards))
}

/// Оценка 5–7 карт, отсортированных по убыванию ранга.
fn evaluate_cards(cards: &[Card]) -> EvaluatedHand {
    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut suit_counts = [0u8; 4];
    let mut rank_mask: RankMask = 0;

    for card in cards {
        rank_counts[card.rank as usize] += 1;
        suit_counts[suit_index(card.suit)] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let flush_suit = Suit::ALL
        .iter()
        .copied()
        .find(|s| suit_counts[suit_index(*s)] >= 5);

    // Стрит-флеш (и роял) ищем только среди карт флешовой масти.
    if let Some(suit) = flush_suit {
        let suited_mask = cards
            .iter()
            .filter(|c| c.suit == suit)
            .fold(0, |m, c| m | rank_to_bit(c.rank));
        if let Some(high) = detect_straight(suited_mask) {
            let ranks = straight_ranks(high);
            let five = straight_cards(cards, &ranks, Some(suit));
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return EvaluatedHand::build(category, ranks, five);
        }
    }

    // Ранги, сгруппированные по количеству: сначала количество,
    // затем ранг — оба по убыванию.
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(7);
    for v in (2..=14u8).rev() {
        let c = rank_counts[v as usize];
        if c > 0 {
            groups.push((c, rank_from_value(v)));
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    // Каре.
    if groups[0].0 == 4 {
        let quad = groups[0].1;
        let kicker = best_kicker(cards, &[quad]);
        let mut five = take_of_rank(cards, quad, 4);
        five.push(kicker);
        return EvaluatedHand::build(
            HandCategory::FourOfAKind,
            [quad, kicker.rank, Rank::Two, Rank::Two, Rank::Two],
            to_five(five),
        );
    }

    // Фулл-хаус: старший сет плюс старшая пара (вторым сетом пару
    // закрыть тоже можно).
    if groups[0].0 == 3 && groups.len() > 1 && groups[1].0 >= 2 {
        let trips = groups[0].1;
        let pair = groups[1].1;
        let mut five = take_of_rank(cards, trips, 3);
        five.extend(take_of_rank(cards, pair, 2));
        return EvaluatedHand::build(
            HandCategory::FullHouse,
            [trips, pair, Rank::Two, Rank::Two, Rank::Two],
            to_five(five),
        );
    }

    // Флеш: пять старших карт масти.
    if let Some(suit) = flush_suit {
        let five: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|c| c.suit == suit)
            .take(5)
            .collect();
        let ranks = [
            five[0].rank,
            five[1].rank,
            five[2].rank,
            five[3].rank,
            five[4].rank,
        ];
        return EvaluatedHand::build(HandCategory::Flush, ranks, to_five(five));
    }

    // Стрит по всем картам. Дубликаты рангов в маске схлопываются сами:
    // пара не считается двумя звеньями.
    if let Some(high) = detect_straight(rank_mask) {
        let ranks = straight_ranks(high);
        let five = straight_cards(cards, &ranks, None);
        return EvaluatedHand::build(HandCategory::Straight, ranks, five);
    }

    // Сет.
    if groups[0].0 == 3 {
        let trips = groups[0].1;
        let kickers = top_kickers(cards, &[trips], 2);
        let mut five = take_of_rank(cards, trips, 3);
        five.extend_from_slice(&kickers);
        return EvaluatedHand::build(
            HandCategory::ThreeOfAKind,
            [trips, kickers[0].rank, kickers[1].rank, Rank::Two, Rank::Two],
            to_five(five),
        );
    }

    // Две пары; из трёх возможных берутся две старшие.
    if groups[0].0 == 2 && groups.len() > 1 && groups[1].0 == 2 {
        let hi = groups[0].1;
        let lo = groups[1].1;
        let kicker = best_kicker(cards, &[hi, lo]);
        let mut five = take_of_rank(cards, hi, 2);
        five.extend(take_of_rank(cards, lo, 2));
        five.push(kicker);
        return EvaluatedHand::build(
            HandCategory::TwoPair,
            [hi, lo, kicker.rank, Rank::Two, Rank::Two],
            to_five(five),
        );
    }

    // Пара.
    if groups[0].0 == 2 {
        let pair = groups[0].1;
        let kickers = top_kickers(cards, &[pair], 3);
        let mut five = take_of_rank(cards, pair, 2);
        five.extend_from_slice(&kickers);
        return EvaluatedHand::build(
            HandCategory::OnePair,
            [
                pair,
                kickers[0].rank,
                kickers[1].rank,
                kickers[2].rank,
                Rank::Two,
            ],
            to_five(five),
        );
    }

    // Старшая карта: просто пять старших.
    let five: Vec<Card> = cards.iter().copied().take(5).collect();
    let ranks = [
        five[0].rank,
        five[1].rank,
        five[2].rank,
        five[3].rank,
        five[4].rank,
    ];
    EvaluatedHand::build(HandCategory::HighCard, ranks, to_five(five))
}

/// Победители среди не сфолдивших: максимальный класс эквивалентности
/// по силе рук. Несколько победителей — делёж банка.
pub fn find_winners(
    players: &[PlayerInHand],
    community: &[Card],
) -> Result<Vec<PlayerId>, InvalidHandSize> {
    let mut evaluated: Vec<(PlayerId, EvaluatedHand)> = Vec::new();
    for p in players.iter().filter(|p| p.is_in_hand()) {
        evaluated.push((p.player_id, evaluate(&p.hole_cards, community)?));
    }

    let mut best: Option<EvaluatedHand> = None;
    for (_, hand) in &evaluated {
        if best
            .as_ref()
            .map_or(true, |b| compare(hand, b) == Ordering::Greater)
        {
            best = Some(*hand);
        }
    }

    match best {
        None => Ok(Vec::new()),
        Some(best) => Ok(evaluated
            .iter()
            .filter(|(_, h)| compare(h, &best) == Ordering::Equal)
            .map(|(id, _)| *id)
            .collect()),
    }
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Spades => 0,
        Suit::Hearts => 1,
        Suit::Clubs => 2,
        Suit::Diamonds => 3,
    }
}

fn rank_from_value(v: u8) -> Rank {
    match v {
        2 => Rank::Two,
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        10 => Rank::Ten,
        11 => Rank::Jack,
        12 => Rank::Queen,
        13 => Rank::King,
        _ => Rank::Ace,
    }
}

/// Пять рангов стрита по его старшей карте. В wheel туз уходит в конец.
fn straight_ranks(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]
    } else {
        let h = high as u8;
        [
            rank_from_value(h),
            rank_from_value(h - 1),
            rank_from_value(h - 2),
            rank_from_value(h - 3),
            rank_from_value(h - 4),
        ]
    }
}

/// По одной карте на каждый ранг стрита; при стрит-флеше — только
/// карты нужной масти.
fn straight_cards(cards: &[Card], ranks: &[Rank; 5], suit: Option<Suit>) -> [Card; 5] {
    let mut five = Vec::with_capacity(5);
    for &r in ranks {
        if let Some(c) = cards
            .iter()
            .find(|c| c.rank == r && suit.map_or(true, |s| c.suit == s))
        {
            five.push(*c);
        }
    }
    to_five(five)
}

/// Первые n карт данного ранга.
fn take_of_rank(cards: &[Card], rank: Rank, n: usize) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| c.rank == rank)
        .take(n)
        .collect()
}

/// Старшая карта вне исключённых рангов.
fn best_kicker(cards: &[Card], exclude: &[Rank]) -> Card {
    cards
        .iter()
        .copied()
        .find(|c| !exclude.contains(&c.rank))
        .unwrap_or(cards[0])
}

/// n старших карт вне исключённых рангов.
fn top_kickers(cards: &[Card], exclude: &[Rank], n: usize) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| !exclude.contains(&c.rank))
        .take(n)
        .collect()
}

fn to_five(v: Vec<Card>) -> [Card; 5] {
    [v[0], v[1], v[2], v[3], v[4]]
}
