//! Тесты расчёта раздачи: победа фолдом, вскрытие, делёж, сайд-поты,
//! возврат некрытой ставки, сохранение фишек.
//!
//! Карты в сценариях задаются вручную — исход вскрытия должен быть
//! детерминированным.

use holdem_engine::domain::{Card, Chips, PlayerId};
use holdem_engine::engine::{
    apply_action, init_game, post_blinds, settle, GameState, PlayerAction,
};

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter()
        .map(|s| s.parse().expect("валидная карта в тесте"))
        .collect()
}

/// Хелпер: стол на n игроков, стеки по 1000, SB=10, BB=20, блайнды поставлены.
fn game(n: u64) -> GameState {
    let roster: Vec<(PlayerId, Chips)> = (1..=n).map(|id| (id, Chips(1000))).collect();
    let state = init_game(&roster, Chips(10), Chips(20)).unwrap();
    post_blinds(&state).unwrap()
}

fn total_chips(state: &GameState) -> u64 {
    state.players.iter().map(|p| p.stack.0).sum::<u64>() + state.pot.0
}

//
// ====================== ПОБЕДА ФОЛДОМ ======================
//

/// Все сфолдили — последний оставшийся забирает банк без вскрытия.
#[test]
fn last_player_standing_takes_pot_without_showdown() {
    let state = game(3);
    let before = total_chips(&state);

    let out = apply_action(&state, 0, PlayerAction::Fold).unwrap();
    let out = apply_action(&out.state, 1, PlayerAction::Fold).unwrap();
    assert_eq!(out.state.players_in_hand(), 1);

    let (settled, result) = settle(&out.state).unwrap();

    assert_eq!(result.winners, vec![3]);
    assert_eq!(result.distribution.len(), 1);
    assert_eq!(result.distribution[0].amount, Chips(30));
    assert!(result.hand_results.is_empty(), "Вскрытия не было");

    assert_eq!(settled.players[2].stack, Chips(1010));
    assert_eq!(settled.pot, Chips::ZERO);
    assert_eq!(total_chips(&settled), before);
}

//
// ====================== ХЕДЗ-АП ОЛЛ-ИН ======================
//

/// Хедз-ап, стеки 1000/1000, блайнды 10/20: шоув и колл дают единый
/// банк 2000, который целиком уходит сильнейшей руке.
#[test]
fn heads_up_all_in_single_pot_goes_to_best_hand() {
    let state = game(2);

    // SB (место 1) шоувит, BB коллирует на весь стек.
    let out = apply_action(&state, 1, PlayerAction::AllIn).unwrap();
    let out = apply_action(&out.state, 0, PlayerAction::Call).unwrap();
    assert!(out.round_ended);
    assert_eq!(out.state.pot, Chips(2000));

    let mut showdown = out.state.clone();
    showdown.players[0].hole_cards = cards(&["♦2", "♣7"]);
    showdown.players[1].hole_cards = cards(&["♠A", "♥A"]);
    showdown.community_cards = cards(&["♣3", "♦4", "♠8", "♣9", "♥K"]);

    let (settled, result) = settle(&showdown).unwrap();

    assert_eq!(result.side_pots.len(), 1);
    assert_eq!(result.side_pots[0].amount, Chips(2000));
    assert_eq!(result.winners, vec![2]);

    assert_eq!(settled.players[1].stack, Chips(2000));
    assert_eq!(settled.players[0].stack, Chips::ZERO);

    let distributed: u64 = result.distribution.iter().map(|s| s.amount.0).sum();
    assert_eq!(distributed, 2000, "Банк распределён до фишки");
}

/// Тот же олл-ин, но обе руки играют борд — точный делёж 1000/1000.
#[test]
fn heads_up_all_in_exact_tie_splits_pot() {
    let state = game(2);

    let out = apply_action(&state, 1, PlayerAction::AllIn).unwrap();
    let out = apply_action(&out.state, 0, PlayerAction::Call).unwrap();

    let mut showdown = out.state.clone();
    showdown.players[0].hole_cards = cards(&["♠2", "♥3"]);
    showdown.players[1].hole_cards = cards(&["♣4", "♦6"]);
    // Бродвей на борде: обе руки равны.
    showdown.community_cards = cards(&["♠10", "♥J", "♦Q", "♣K", "♦A"]);

    let (settled, result) = settle(&showdown).unwrap();

    let mut winners = result.winners.clone();
    winners.sort_unstable();
    assert_eq!(winners, vec![1, 2]);

    assert_eq!(settled.players[0].stack, Chips(1000));
    assert_eq!(settled.players[1].stack, Chips(1000));
}

//
// ====================== ДЕЛЁЖ С ОСТАТКОМ ======================
//

/// Неделящаяся фишка уходит первому победителю в порядке оценки
/// (при равных руках — меньшее место), распределение точно равно банку.
#[test]
fn odd_chip_goes_to_earliest_winner_in_evaluation_order() {
    let roster = vec![(1, Chips(667)), (2, Chips(667)), (3, Chips(667))];
    let mut state = init_game(&roster, Chips(10), Chips(20)).unwrap();

    // Все внесли по 333: банк 999, один общий пот.
    for p in state.players.iter_mut() {
        p.total_bet = Chips(333);
        p.stack = Chips(334);
    }
    state.pot = Chips(999);
    state.players[0].hole_cards = cards(&["♠5", "♥6"]);
    state.players[1].hole_cards = cards(&["♣5", "♦6"]);
    state.players[2].hole_cards = cards(&["♥A", "♦J"]);
    state.community_cards = cards(&["♠2", "♥3", "♦4", "♣K", "♦9"]);

    let (settled, result) = settle(&state).unwrap();

    // Места 0 и 1 — одинаковые стриты до шестёрки, место 2 — старшая карта.
    assert_eq!(result.winners, vec![1, 2]);
    assert_eq!(result.distribution.len(), 2);
    assert_eq!(result.distribution[0].amount, Chips(500));
    assert_eq!(result.distribution[1].amount, Chips(499));

    assert_eq!(settled.players[0].stack, Chips(834));
    assert_eq!(settled.players[1].stack, Chips(833));
    assert_eq!(settled.players[2].stack, Chips(334));

    let distributed: u64 = result.distribution.iter().map(|s| s.amount.0).sum();
    assert_eq!(distributed, 999);
}

//
// ====================== САЙД-ПОТЫ НА ВСКРЫТИИ ======================
//

/// Сценарий 50/200/200: короткий олл-ин выигрывает только основной пот,
/// сайд-пот разыгрывается между оставшимися.
#[test]
fn short_all_in_wins_main_pot_only() {
    let roster = vec![(1, Chips(50)), (2, Chips(200)), (3, Chips(200))];
    let state = init_game(&roster, Chips(10), Chips(20)).unwrap();
    let state = post_blinds(&state).unwrap();
    let initial = total_chips(&state);

    // Префлоп: олл-ин 50, оба колла. Постфлоп-ставки моделируем
    // прямыми вкладами ещё по 100 от мест 1 и 2.
    let out = apply_action(&state, 0, PlayerAction::AllIn).unwrap();
    let out = apply_action(&out.state, 1, PlayerAction::Call).unwrap();
    let out = apply_action(&out.state, 2, PlayerAction::Call).unwrap();
    assert!(out.round_ended);

    let mut showdown = out.state.clone();
    for seat in [1usize, 2] {
        showdown.players[seat].total_bet += Chips(100);
        showdown.players[seat].stack -= Chips(100);
        showdown.pot += Chips(100);
    }
    showdown.players[0].hole_cards = cards(&["♠A", "♥A"]);
    showdown.players[1].hole_cards = cards(&["♣Q", "♠J"]);
    showdown.players[2].hole_cards = cards(&["♥K", "♦K"]);
    showdown.community_cards = cards(&["♣2", "♦7", "♠8", "♥4", "♦10"]);

    let (settled, result) = settle(&showdown).unwrap();

    // Основной пот 150 — паре тузов, сайд-пот 200 — паре королей.
    assert_eq!(result.side_pots.len(), 2);
    assert_eq!(result.side_pots[0].amount, Chips(150));
    assert_eq!(result.side_pots[1].amount, Chips(200));
    assert_eq!(result.winners, vec![1, 3]);

    assert_eq!(settled.players[0].stack, Chips(150));
    assert_eq!(settled.players[1].stack, Chips(50));
    assert_eq!(settled.players[2].stack, Chips(250));
    assert_eq!(total_chips(&settled), initial);
}

/// Некрытая ставка возвращается владельцу отдельным потом, даже если
/// основной пот он проиграл.
#[test]
fn uncalled_bet_is_returned_to_its_owner() {
    let roster = vec![(1, Chips(1000)), (2, Chips(1000))];
    let mut state = init_game(&roster, Chips(10), Chips(20)).unwrap();

    state.players[0].total_bet = Chips(100);
    state.players[0].stack = Chips(900);
    state.players[1].total_bet = Chips(300);
    state.players[1].stack = Chips(700);
    state.pot = Chips(400);

    state.players[0].hole_cards = cards(&["♠A", "♥A"]);
    state.players[1].hole_cards = cards(&["♣2", "♦7"]);
    state.community_cards = cards(&["♣3", "♦4", "♠8", "♣9", "♥K"]);

    let (settled, result) = settle(&state).unwrap();

    // Пот 200 выигрывают тузы, пот 200 — возврат некрытой ставки.
    assert_eq!(result.distribution.len(), 2);
    assert_eq!(result.distribution[0].player_id, 1);
    assert_eq!(result.distribution[0].amount, Chips(200));
    assert_eq!(result.distribution[1].player_id, 2);
    assert_eq!(result.distribution[1].amount, Chips(200));

    assert_eq!(settled.players[0].stack, Chips(1100));
    assert_eq!(settled.players[1].stack, Chips(900));
}

/// Оценки рук на вскрытии возвращаются целиком, сильнейшая — первой.
#[test]
fn hand_results_are_reported_strongest_first() {
    let state = game(3);

    let out = apply_action(&state, 0, PlayerAction::Call).unwrap();
    let out = apply_action(&out.state, 1, PlayerAction::Call).unwrap();
    assert!(out.round_ended);

    let mut showdown = out.state.clone();
    showdown.players[0].hole_cards = cards(&["♣Q", "♠J"]);
    showdown.players[1].hole_cards = cards(&["♥K", "♦K"]);
    showdown.players[2].hole_cards = cards(&["♠A", "♥A"]);
    showdown.community_cards = cards(&["♣2", "♦7", "♠8", "♥4", "♦10"]);

    let (_, result) = settle(&showdown).unwrap();

    assert_eq!(result.hand_results.len(), 3);
    assert_eq!(result.hand_results[0].player_id, 3, "Тузы сильнее всех");
    assert_eq!(result.hand_results[1].player_id, 2);
    assert_eq!(result.hand_results[2].player_id, 1);
}
