//! Root state and intent combining all slices.

use crate::store::good::{GoodIntent, GoodReducer, GoodState};
use crate::store::mvi::{Intent, Reducer, StoreState};
use crate::store::selection::{SelectionIntent, SelectionReducer, SelectionState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub good: GoodState,
    pub selection: SelectionState,
}

impl StoreState for AppState {}

/// Every intent the store accepts, tagged by the slice that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIntent {
    Good(GoodIntent),
    Selection(SelectionIntent),
}

impl Intent for AppIntent {}

impl From<GoodIntent> for AppIntent {
    fn from(intent: GoodIntent) -> Self {
        AppIntent::Good(intent)
    }
}

impl From<SelectionIntent> for AppIntent {
    fn from(intent: SelectionIntent) -> Self {
        AppIntent::Selection(intent)
    }
}

/// Routes each intent to its slice. Slices that don't own the intent are
/// passed through as-is, keeping their allocations.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::Good(intent) => AppState {
                good: GoodReducer::reduce(state.good, intent),
                ..state
            },
            AppIntent::Selection(intent) => AppState {
                selection: SelectionReducer::reduce(state.selection, intent),
                ..state
            },
        }
    }
}
