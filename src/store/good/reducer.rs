use std::collections::BTreeMap;
use std::sync::Arc;

use crate::store::mvi::Reducer;

use super::intent::GoodIntent;
use super::state::{article_key, GoodState};

/// Reducer for good counts.
///
/// Copy-on-write: if the caller still holds the previous state, the map
/// is cloned before mutation and the old snapshot stays untouched.
pub struct GoodReducer;

impl Reducer for GoodReducer {
    type State = GoodState;
    type Intent = GoodIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GoodIntent::Increment { article_id } => {
                let mut counts = state.into_inner();
                let count = Arc::make_mut(&mut counts)
                    .entry(article_key(article_id))
                    .or_insert(0);
                *count = count.saturating_add(1);
                GoodState::from_arc(counts)
            }

            GoodIntent::SetAll { counts } => GoodState::from_map(
                counts
                    .into_iter()
                    .map(|c| (article_key(c.id), c.good))
                    .collect::<BTreeMap<_, _>>(),
            ),

            GoodIntent::Set { article_id, good } => {
                let mut counts = state.into_inner();
                Arc::make_mut(&mut counts).insert(article_key(article_id), good);
                GoodState::from_arc(counts)
            }
        }
    }
}
