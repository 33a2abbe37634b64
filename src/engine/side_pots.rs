use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::engine::state::GameState;

/// Сайд-пот: часть банка, на которую претендуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Кто может выиграть этот пот. Только не сфолдившие.
    pub eligible_players: Vec<PlayerId>,
    /// Размер слоя: вклад, который закрывает участие в этом поте.
    pub min_contribution: Chips,
}

/// Разложить банк на слои сайд-потов.
///
/// Слои считаются по всем, кто вносил фишки: вклады сфолдивших остаются
/// в потах, но сами они ни на что не претендуют. Сумма всех потов
/// в точности равна банку.
///
/// Алгоритм: берём минимальный оставшийся вклад m, образуем пот
/// m × (число вкладчиков), вычитаем m у всех и выкидываем исчерпанных.
/// Последний одинокий вкладчик образует пот на себя одного — некрытая
/// ставка вернётся владельцу при расчёте.
pub fn compute_side_pots(state: &GameState) -> Vec<SidePot> {
    struct Entry {
        player_id: PlayerId,
        folded: bool,
        remaining: Chips,
    }

    let mut entries: Vec<Entry> = state
        .players
        .iter()
        .filter(|p| !p.total_bet.is_zero())
        .map(|p| Entry {
            player_id: p.player_id,
            folded: p.folded,
            remaining: p.total_bet,
        })
        .collect();

    // По возрастанию вклада; внутри уровня порядок мест сохраняется.
    entries.sort_by_key(|e| e.remaining.0);

    let mut pots: Vec<SidePot> = Vec::new();

    while !entries.is_empty() {
        let level = entries[0].remaining;
        let amount = if entries.len() == 1 {
            // Последний вкладчик: остаток без умножения.
            level
        } else {
            level.saturating_mul(entries.len() as u64)
        };

        let eligible: Vec<PlayerId> = entries
            .iter()
            .filter(|e| !e.folded)
            .map(|e| e.player_id)
            .collect();

        if eligible.is_empty() {
            // Слой целиком из вкладов сфолдивших: доливаем в предыдущий
            // пот, чтобы банк оставался разложенным без остатка.
            if let Some(last) = pots.last_mut() {
                last.amount += amount;
            }
        } else {
            pots.push(SidePot {
                amount,
                eligible_players: eligible,
                min_contribution: level,
            });
        }

        for e in entries.iter_mut() {
            e.remaining = e.remaining.saturating_sub(level);
        }
        entries.retain(|e| !e.remaining.is_zero());
    }

    pots
}
