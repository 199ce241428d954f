use crate::store::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::SelectionState;

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Select { article_id } => SelectionState {
                selected: Some(article_id),
            },
            SelectionIntent::SelectFirst { article_id } => match state.selected {
                Some(_) => state,
                None => SelectionState {
                    selected: Some(article_id),
                },
            },
        }
    }
}
