use crate::ui::mvi::Reducer;

use super::intent::ProfileIntent;
use super::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Activate { name } => {
                if state.name() == Some(name.as_str()) {
                    state
                } else {
                    ProfileState::Loading { name }
                }
            }

            ProfileIntent::Settled { name, result } => match state {
                ProfileState::Loading { name: current } if current == name => match result {
                    Ok(inference) => ProfileState::Loaded { name, inference },
                    Err(err) => ProfileState::Failed {
                        name,
                        message: err.to_string(),
                    },
                },
                // Stale or duplicate settle
                other => other,
            },

            ProfileIntent::Reset => ProfileState::Idle,
        }
    }
}
