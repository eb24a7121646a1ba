//! Tagged lookup requests.
//!
//! The optional arguments of `accounts` and `products` are turned into exactly one
//! lookup variant at the boundary. Precedence for products is
//! `id > query > ids > pagination`; a blank query or an empty id list counts as absent.

use super::schema::{AccountArgs, ProductArgs};
use crate::paging::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountLookup {
    ById(String),
    List(Page),
}

impl AccountLookup {
    /// An `id` wins over any pagination sent alongside it.
    pub fn from_args(args: AccountArgs) -> Self {
        match args.id {
            Some(id) => Self::ById(id),
            None => Self::List(args.pagination.unwrap_or_default().page()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLookup {
    ById(String),
    Search { query: String, page: Page },
    ByIds(Vec<String>),
    List(Page),
}

impl ProductLookup {
    pub fn from_args(args: ProductArgs) -> Self {
        let page = args.pagination.unwrap_or_default().page();
        if let Some(id) = args.id {
            return Self::ById(id);
        }
        if let Some(query) = args.query.filter(|q| !q.trim().is_empty()) {
            return Self::Search { query, page };
        }
        if let Some(ids) = args.ids.filter(|ids| !ids.is_empty()) {
            return Self::ByIds(ids);
        }
        Self::List(page)
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::ById(_) => "by_id",
            Self::Search { .. } => "search",
            Self::ByIds(_) => "by_ids",
            Self::List(_) => "list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::PaginationInput;

    fn product_args(
        id: Option<&str>,
        query: Option<&str>,
        ids: Option<Vec<&str>>,
    ) -> ProductArgs {
        ProductArgs {
            id: id.map(str::to_string),
            query: query.map(str::to_string),
            ids: ids.map(|ids| ids.into_iter().map(str::to_string).collect()),
            pagination: Some(PaginationInput::new(5, 10)),
        }
    }

    #[test]
    fn account_id_beats_pagination() {
        let lookup = AccountLookup::from_args(AccountArgs {
            id: Some("a1".into()),
            pagination: Some(PaginationInput::new(1, 2)),
        });
        assert_eq!(lookup, AccountLookup::ById("a1".into()));
    }

    #[test]
    fn account_list_defaults_missing_pagination() {
        let lookup = AccountLookup::from_args(AccountArgs::default());
        assert_eq!(lookup, AccountLookup::List(Page::new(0, 0)));
    }

    #[test]
    fn product_precedence() {
        let all = product_args(Some("p1"), Some("lamp"), Some(vec!["p2"]));
        assert_eq!(ProductLookup::from_args(all), ProductLookup::ById("p1".into()));

        let search = product_args(None, Some("lamp"), Some(vec!["p2"]));
        assert_eq!(
            ProductLookup::from_args(search),
            ProductLookup::Search {
                query: "lamp".into(),
                page: Page::new(5, 10)
            }
        );

        let ids = product_args(None, None, Some(vec!["p2", "p3"]));
        assert_eq!(
            ProductLookup::from_args(ids),
            ProductLookup::ByIds(vec!["p2".into(), "p3".into()])
        );

        let list = product_args(None, None, None);
        assert_eq!(ProductLookup::from_args(list), ProductLookup::List(Page::new(5, 10)));
    }

    #[test]
    fn blank_query_and_empty_ids_are_absent() {
        let blank = product_args(None, Some("  "), Some(vec!["p2"]));
        assert_eq!(ProductLookup::from_args(blank).mode(), "by_ids");

        let empty = product_args(None, None, Some(vec![]));
        assert_eq!(ProductLookup::from_args(empty).mode(), "list");
    }
}
