use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;

use super::intent::FormIntent;
use super::state::FormState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Edit { field, value } => {
                *state.value_mut(field) = value;
            }
            FormIntent::SelectGender(gender) => {
                state.gender = gender;
            }
            FormIntent::SaveAccepted => {
                state.data_saved = true;
                state.notice = Some(Notice::Saved);
            }
            FormIntent::SaveRejected(error) => {
                state.notice = Some(Notice::Invalid(error));
            }
            FormIntent::SaveFailed { reason } => {
                state.notice = Some(Notice::SaveFailed(reason));
            }
            FormIntent::NavigationRefused => {
                state.notice = Some(Notice::SaveRequired);
            }
            FormIntent::DismissNotice => {
                state.notice = None;
            }
        }
        state
    }
}
