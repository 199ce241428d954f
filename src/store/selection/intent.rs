use crate::api::ArticleId;
use crate::store::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionIntent {
    /// User picked an article.
    Select { article_id: ArticleId },
    /// A list loaded; select its first entry unless something is already selected.
    SelectFirst { article_id: ArticleId },
}

impl Intent for SelectionIntent {}
