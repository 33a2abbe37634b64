//! Жизненный цикл раздачи: инициализация, блайнды, раздача карт,
//! применение действий, переход улиц, ротация дилера.

use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::domain::player::{LastAction, PlayerInHand};
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::actions::PlayerAction;
use crate::engine::betting::{first_to_act_from, is_round_ended, next_actor};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::state::GameState;
use crate::engine::validation::validate_action;

/// Максимум мест за одним столом.
pub const MAX_SEATS: usize = 10;

/// Итог применения действия.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionOutcome {
    pub state: GameState,
    /// Кто ходит следующим; None — раунд ставок закончен.
    pub next_actor: Option<SeatIndex>,
    pub round_ended: bool,
}

/// Итог перехода улицы.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvanceOutcome {
    pub state: GameState,
    pub new_street: Street,
    /// Раздачу пора завершать: шоудаун либо остался один игрок.
    pub game_ended: bool,
}

/// Новая раздача с нуля: проверка конфигурации и рассадка по местам.
/// Блайнды ещё не поставлены, актёр не назначен — см. post_blinds.
pub fn init_game(
    roster: &[(PlayerId, Chips)],
    small_blind: Chips,
    big_blind: Chips,
) -> Result<GameState, EngineError> {
    init_with_dealer(roster, small_blind, big_blind, 0)
}

fn init_with_dealer(
    roster: &[(PlayerId, Chips)],
    small_blind: Chips,
    big_blind: Chips,
    dealer_seat: SeatIndex,
) -> Result<GameState, EngineError> {
    if roster.len() < 2 {
        return Err(EngineError::InvalidConfiguration("нужно минимум два игрока"));
    }
    if roster.len() > MAX_SEATS {
        return Err(EngineError::InvalidConfiguration("слишком много игроков"));
    }
    if small_blind.is_zero() || big_blind.is_zero() {
        return Err(EngineError::InvalidConfiguration(
            "блайнды должны быть больше нуля",
        ));
    }
    if small_blind >= big_blind {
        return Err(EngineError::InvalidConfiguration(
            "малый блайнд должен быть меньше большого",
        ));
    }

    let players = roster
        .iter()
        .enumerate()
        .map(|(i, &(player_id, stack))| PlayerInHand::new(player_id, i as SeatIndex, stack))
        .collect();

    let mut state = GameState {
        street: Street::Preflop,
        dealer_seat,
        current_actor: None,
        community_cards: Vec::new(),
        pot: Chips::ZERO,
        current_bet: Chips::ZERO,
        last_raise: Chips::ZERO,
        players,
        small_blind,
        big_blind,
        history: HandHistory::new(),
    };

    state.history.push(HandEventKind::HandStarted {
        dealer: dealer_seat,
        small_blind,
        big_blind,
    });

    Ok(state)
}

/// Следующая раздача: стеки и позиция дилера переносятся, всё
/// раундовое обнуляется, журнал начинается заново. Ротацию кнопки
/// делает advance_dealer до этого вызова.
pub fn start_new_hand(state: &GameState) -> Result<GameState, EngineError> {
    let roster: Vec<(PlayerId, Chips)> = state
        .players
        .iter()
        .map(|p| (p.player_id, p.stack))
        .collect();
    init_with_dealer(&roster, state.small_blind, state.big_blind, state.dealer_seat)
}

/// Поставить блайнды и назначить первого актёра.
///
/// Малый блайнд — место (дилер+1), большой — (дилер+2), по кругу.
/// Короткий стек ставит сколько есть и уходит в олл-ин; целевая ставка
/// раунда всё равно равна большому блайнду.
pub fn post_blinds(state: &GameState) -> Result<GameState, EngineError> {
    if state.street != Street::Preflop || !state.pot.is_zero() {
        return Err(EngineError::BlindsAlreadyPosted);
    }

    let n = state.players.len();
    if n < 2 {
        return Err(EngineError::InvalidConfiguration("нужно минимум два игрока"));
    }
    let sb_seat = ((state.dealer_seat as usize + 1) % n) as SeatIndex;
    let bb_seat = ((state.dealer_seat as usize + 2) % n) as SeatIndex;

    let mut next = state.clone();

    let sb_paid = post_one_blind(&mut next, sb_seat, state.small_blind)?;
    let bb_paid = post_one_blind(&mut next, bb_seat, state.big_blind)?;

    next.current_bet = state.big_blind;
    next.last_raise = state.big_blind;

    next.history.push(HandEventKind::BlindsPosted {
        small_blind: (sb_seat, sb_paid),
        big_blind: (bb_seat, bb_paid),
    });

    // Первым ходит следующий за большим блайндом, кто способен действовать.
    next.current_actor = first_to_act_from(&next, ((bb_seat as usize + 1) % n) as SeatIndex);

    Ok(next)
}

fn post_one_blind(
    state: &mut GameState,
    seat: SeatIndex,
    blind: Chips,
) -> Result<Chips, EngineError> {
    let player = state.player_mut(seat)?;
    let paid = blind.min(player.stack);
    player.stack -= paid;
    player.total_bet += paid;
    player.round_bet += paid;
    player.last_action = Some(LastAction::Blind);
    if player.stack.is_zero() {
        player.all_in = true;
    }
    state.pot += paid;
    Ok(paid)
}

/// Раздать каждому игроку по две карманные карты (по местам, подряд).
pub fn deal_hole_cards(state: &GameState, deck: Deck) -> Result<(GameState, Deck), EngineError> {
    let mut next = state.clone();
    let mut deck = deck;
    for idx in 0..next.players.len() {
        let (rest, cards) = deck.deal(2)?;
        deck = rest;
        next.history.push(HandEventKind::HoleCardsDealt {
            seat: next.players[idx].seat,
            cards: cards.clone(),
        });
        next.players[idx].hole_cards = cards;
    }
    Ok((next, deck))
}

/// Открыть флоп: три общие карты.
pub fn deal_flop(state: &GameState, deck: Deck) -> Result<(GameState, Deck), EngineError> {
    deal_community(state, deck, 3)
}

/// Открыть тёрн: одна карта.
pub fn deal_turn(state: &GameState, deck: Deck) -> Result<(GameState, Deck), EngineError> {
    deal_community(state, deck, 1)
}

/// Открыть ривер: одна карта.
pub fn deal_river(state: &GameState, deck: Deck) -> Result<(GameState, Deck), EngineError> {
    deal_community(state, deck, 1)
}

// Какую улицу пора открывать — ответственность вызывающего,
// движок порядок вызовов deal_* не проверяет.
fn deal_community(
    state: &GameState,
    deck: Deck,
    count: usize,
) -> Result<(GameState, Deck), EngineError> {
    let mut next = state.clone();
    let (rest, cards) = deck.deal(count)?;
    next.community_cards.extend_from_slice(&cards);
    next.history.push(HandEventKind::CommunityDealt {
        street: next.street,
        cards,
    });
    Ok((next, rest))
}

/// Применить действие игрока.
///
/// Возвращает новое состояние, следующего актёра и признак конца раунда
/// ставок (оба посчитаны уже по новому состоянию). Любой отказ — Err,
/// снапшот вызывающего не меняется.
pub fn apply_action(
    state: &GameState,
    seat: SeatIndex,
    action: PlayerAction,
) -> Result<ActionOutcome, EngineError> {
    if state.street == Street::Showdown {
        return Err(EngineError::NoActiveHand);
    }
    let player = state.player(seat)?;
    if state.current_actor != Some(seat) {
        return Err(EngineError::NotPlayersTurn(seat));
    }
    validate_action(player, &action, state)?;

    let mut next = state.clone();

    match action {
        PlayerAction::Fold => {
            let p = next.player_mut(seat)?;
            p.folded = true;
            p.last_action = Some(LastAction::Fold);
        }

        PlayerAction::Check => {
            next.player_mut(seat)?.last_action = Some(LastAction::Check);
        }

        PlayerAction::Call => {
            let current_bet = next.current_bet;
            let p = next.player_mut(seat)?;
            let to_call = current_bet.saturating_sub(p.round_bet);
            let paid = to_call.min(p.stack);
            p.stack -= paid;
            p.total_bet += paid;
            p.round_bet += paid;
            if p.stack.is_zero() {
                // Колл на весь стек: олл-ин, даже если уравнять не хватило.
                p.all_in = true;
                p.last_action = Some(LastAction::AllIn);
            } else {
                p.last_action = Some(LastAction::Call);
            }
            next.pot += paid;
        }

        PlayerAction::Raise(to) => {
            let prev_bet = next.current_bet;
            let p = next.player_mut(seat)?;
            // Валидация уже гарантировала: to > prev_bet, diff <= stack.
            let diff = to.saturating_sub(p.round_bet);
            p.stack -= diff;
            p.total_bet += diff;
            p.round_bet = to;
            if p.stack.is_zero() {
                p.all_in = true;
                p.last_action = Some(LastAction::AllIn);
            } else {
                p.last_action = Some(LastAction::Raise);
            }
            next.pot += diff;
            next.current_bet = to;
            next.last_raise = to.saturating_sub(prev_bet);
        }

        PlayerAction::AllIn => {
            let prev_bet = next.current_bet;
            let p = next.player_mut(seat)?;
            let commit = p.stack;
            let new_round_bet = p.round_bet + commit;
            p.stack = Chips::ZERO;
            p.total_bet += commit;
            p.round_bet = new_round_bet;
            p.all_in = true;
            p.last_action = Some(LastAction::AllIn);
            next.pot += commit;
            if new_round_bet > prev_bet {
                // Олл-ин выше текущей ставки — это рейз.
                next.current_bet = new_round_bet;
                next.last_raise = new_round_bet.saturating_sub(prev_bet);
            }
            // Иначе — колл на сколько хватило; current_bet не опускается
            // и чужие долги не пересчитываются.
        }
    }

    let new_stack = next.player(seat)?.stack;
    let pot_after = next.pot;
    next.history.push(HandEventKind::PlayerActed {
        seat,
        action,
        new_stack,
        pot_after,
    });

    let round_ended = is_round_ended(&next);
    let next_seat = if round_ended {
        None
    } else {
        next_actor(&next, seat)
    };
    next.current_actor = next_seat;

    Ok(ActionOutcome {
        state: next,
        next_actor: next_seat,
        round_ended,
    })
}

/// Переход на следующую улицу.
///
/// Сбрасывает раундовые ставки и назначает первого актёра — следующего
/// за дилером, кто способен действовать (на префлопе порядок другой,
/// его задаёт post_blinds).
pub fn advance_round(state: &GameState) -> Result<AdvanceOutcome, EngineError> {
    let new_street = match state.street {
        Street::Preflop => Street::Flop,
        Street::Flop => Street::Turn,
        Street::Turn => Street::River,
        Street::River => Street::Showdown,
        Street::Showdown => {
            return Err(EngineError::Internal("переход улицы после шоудауна"))
        }
    };

    let mut next = state.clone();
    next.street = new_street;
    next.current_bet = Chips::ZERO;
    next.last_raise = Chips::ZERO;
    for p in next.players.iter_mut() {
        p.round_bet = Chips::ZERO;
    }

    let n = next.players.len();
    next.current_actor = if new_street == Street::Showdown || n == 0 {
        None
    } else {
        first_to_act_from(&next, ((next.dealer_seat as usize + 1) % n) as SeatIndex)
    };

    next.history.push(HandEventKind::StreetChanged { street: new_street });

    let game_ended = next.players_in_hand() <= 1 || new_street == Street::Showdown;

    Ok(AdvanceOutcome {
        state: next,
        new_street,
        game_ended,
    })
}

/// Передвинуть кнопку дилера на следующее место. Больше ничего не
/// трогает: новую раздачу собирает start_new_hand.
pub fn advance_dealer(state: &GameState) -> GameState {
    let mut next = state.clone();
    let n = next.players.len().max(1);
    next.dealer_seat = ((next.dealer_seat as usize + 1) % n) as SeatIndex;
    next
}
