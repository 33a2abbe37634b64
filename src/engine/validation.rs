use crate::domain::player::PlayerInHand;
use crate::engine::actions::PlayerAction;
use crate::engine::errors::EngineError;
use crate::engine::state::GameState;

/// Проверка, допустимо ли действие при текущем состоянии ставок.
/// Ничего не меняет: либо Ok, либо типизированный отказ.
pub fn validate_action(
    player: &PlayerInHand,
    action: &PlayerAction,
    state: &GameState,
) -> Result<(), EngineError> {
    if !player.can_act() {
        return Err(EngineError::PlayerCannotAct);
    }

    match action {
        PlayerAction::Fold => Ok(()),

        PlayerAction::Check => {
            if player.round_bet == state.current_bet {
                Ok(())
            } else {
                Err(EngineError::CannotCheck)
            }
        }

        // Call допустим всегда: нехватка стека превращает его в олл-ин колл.
        PlayerAction::Call => Ok(()),

        PlayerAction::Raise(to) => {
            if *to <= state.current_bet {
                return Err(EngineError::RaiseNotAboveCurrent);
            }
            // Минимальный шаг рейза не проверяется: достаточно превысить
            // текущую ставку. last_raise при этом отслеживается.
            let diff = to.saturating_sub(player.round_bet);
            if player.stack < diff {
                return Err(EngineError::NotEnoughChips);
            }
            Ok(())
        }

        PlayerAction::AllIn => {
            if player.stack.is_zero() {
                return Err(EngineError::PlayerCannotAct);
            }
            Ok(())
        }
    }
}
