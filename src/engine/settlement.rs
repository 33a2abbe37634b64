//! Расчёт завершённой раздачи: оценка рук и распределение потов.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::HandEventKind;
use crate::engine::side_pots::{compute_side_pots, SidePot};
use crate::engine::state::GameState;
use crate::eval::{compare, evaluate, EvaluatedHand};

/// Доля игрока в конкретном поте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PotShare {
    pub player_id: PlayerId,
    pub amount: Chips,
    /// Индекс пота в списке side_pots (0 — основной).
    pub pot_index: usize,
}

/// Оценённая рука игрока на вскрытии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandResult {
    pub player_id: PlayerId,
    pub seat: SeatIndex,
    pub hand: EvaluatedHand,
}

/// Итог расчёта раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SettlementResult {
    /// Победители без дублей, в порядке первого выигрыша.
    pub winners: Vec<PlayerId>,
    /// Полное распределение банка. Сумма равна банку до расчёта.
    pub distribution: Vec<PotShare>,
    /// Оценки рук всех дошедших до вскрытия.
    pub hand_results: Vec<HandResult>,
    /// Поты, по которым шло распределение.
    pub side_pots: Vec<SidePot>,
}

/// Рассчитать раздачу.
///
/// Возвращает состояние с зачисленными выигрышами (банк обнулён, улица —
/// шоудаун) и детали расчёта. Если не сфолдил только один игрок, он
/// забирает весь банк без вскрытия карт.
pub fn settle(state: &GameState) -> Result<(GameState, SettlementResult), EngineError> {
    let mut next = state.clone();
    next.street = Street::Showdown;
    next.current_actor = None;

    let in_hand: Vec<usize> = state
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_in_hand())
        .map(|(i, _)| i)
        .collect();

    let result = match in_hand.len() {
        0 => return Err(EngineError::Internal("расчёт без единого игрока в раздаче")),
        1 => settle_single_winner(&mut next, in_hand[0]),
        _ => settle_showdown(&mut next)?,
    };

    next.pot = Chips::ZERO;
    next.history.push(HandEventKind::HandFinished);

    Ok((next, result))
}

/// Все остальные сфолдили: единственный оставшийся забирает банк.
fn settle_single_winner(state: &mut GameState, idx: usize) -> SettlementResult {
    let amount = state.pot;
    let winner = &mut state.players[idx];
    winner.stack += amount;
    let player_id = winner.player_id;
    let seat = winner.seat;

    state.history.push(HandEventKind::PotAwarded {
        seat,
        player_id,
        amount,
    });

    SettlementResult {
        winners: vec![player_id],
        distribution: vec![PotShare {
            player_id,
            amount,
            pot_index: 0,
        }],
        hand_results: Vec::new(),
        side_pots: Vec::new(),
    }
}

fn settle_showdown(state: &mut GameState) -> Result<SettlementResult, EngineError> {
    let side_pots = compute_side_pots(state);

    // Оцениваем руки всех не сфолдивших.
    let mut hand_results: Vec<HandResult> = Vec::new();
    for p in state.players.iter().filter(|p| p.is_in_hand()) {
        let hand = evaluate(&p.hole_cards, &state.community_cards)?;
        hand_results.push(HandResult {
            player_id: p.player_id,
            seat: p.seat,
            hand,
        });
    }

    // Порядок оценки: по убыванию силы, при равенстве — по местам
    // (сортировка стабильная). Он же решает, кому достанутся
    // неделящиеся фишки.
    hand_results.sort_by(|a, b| compare(&b.hand, &a.hand));

    let mut winners: Vec<PlayerId> = Vec::new();
    let mut distribution: Vec<PotShare> = Vec::new();

    for (pot_index, pot) in side_pots.iter().enumerate() {
        let contenders: Vec<&HandResult> = hand_results
            .iter()
            .filter(|hr| pot.eligible_players.contains(&hr.player_id))
            .collect();

        if contenders.is_empty() {
            continue;
        }
        let best = contenders[0];

        let pot_winners: Vec<&HandResult> = contenders
            .iter()
            .take_while(|hr| compare(&hr.hand, &best.hand) == Ordering::Equal)
            .copied()
            .collect();

        let share = Chips(pot.amount.0 / pot_winners.len() as u64);
        let remainder = pot.amount.0 % pot_winners.len() as u64;

        for (i, hr) in pot_winners.iter().enumerate() {
            // Первым в порядке оценки — по одной неделящейся фишке.
            let prize = if (i as u64) < remainder {
                share + Chips(1)
            } else {
                share
            };
            if prize.is_zero() {
                continue;
            }
            award(state, hr.seat, hr.player_id, prize);
            distribution.push(PotShare {
                player_id: hr.player_id,
                amount: prize,
                pot_index,
            });
            if !winners.contains(&hr.player_id) {
                winners.push(hr.player_id);
            }
        }
    }

    Ok(SettlementResult {
        winners,
        distribution,
        hand_results,
        side_pots,
    })
}

fn award(state: &mut GameState, seat: SeatIndex, player_id: PlayerId, amount: Chips) {
    if let Some(p) = state.players.get_mut(seat as usize) {
        p.stack += amount;
    }
    state.history.push(HandEventKind::PotAwarded {
        seat,
        player_id,
        amount,
    });
}
