use crate::api::ArticleId;
use crate::store::mvi::StoreState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected: Option<ArticleId>,
}

impl StoreState for SelectionState {}

impl SelectionState {
    pub fn is_selected(&self, article_id: ArticleId) -> bool {
        self.selected == Some(article_id)
    }
}
