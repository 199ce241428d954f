//! Stateful helpers sitting between the API client and a view layer.
//!
//! - [`GoodCountHook`] - read good counts, like an article optimistically
//! - [`ArticleLoader`] - one article by id
//! - [`ArticleListLoader`] - the summary list, seeding counts and selection

mod article;
mod good;

pub use article::{ArticleListLoader, ArticleLoader, Loadable};
pub use good::GoodCountHook;
