//! Bidirectional cursor paginator.
//!
//! A [`Paginator`] is built per request, configured through its setters and
//! consumed by a single [`Paginator::paginate`] call.

use std::collections::HashMap;

use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{Bson, Document};
use mongodb::Collection;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::cursor::{abbreviate, decode_cursor, encode_cursor, CursorError, KeyKind};
use super::query::{build_cursor_condition, build_sort, merge_filters};
use crate::constants::{DEFAULT_PAGE_LIMIT, IDENTITY_KEY};

/// Sort direction applied to every pagination key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ASC" => Some(Order::Asc),
            "DESC" => Some(Order::Desc),
            _ => None,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Order::Asc => Order::Desc,
            Order::Desc => Order::Asc,
        }
    }

    /// MongoDB sort direction.
    pub fn direction(self) -> i32 {
        match self {
            Order::Asc => 1,
            Order::Desc => -1,
        }
    }

    /// Operator selecting records strictly after a cursor in this order.
    fn operator(self) -> &'static str {
        match self {
            Order::Asc => "$gt",
            Order::Desc => "$lt",
        }
    }
}

/// Cursors to continue from; `None` when there is nothing to page to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    pub after_cursor: Option<String>,
    pub before_cursor: Option<String>,
}

/// One page of records plus its cursors.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingResult<T> {
    pub data: Vec<T>,
    pub cursor: Cursor,
}

impl<T> PagingResult<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagingResult<U> {
        PagingResult {
            data: self.data.into_iter().map(f).collect(),
            cursor: self.cursor,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PaginationError {
    #[error("invalid cursor: {0}")]
    Cursor(#[from] CursorError),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("failed to decode document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),
}

/// Ordered, filtered record source the paginator queries.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Return at most `limit` documents matching `filter`, ordered by `sort`.
    async fn fetch(
        &self,
        filter: Document,
        sort: Document,
        limit: i64,
    ) -> Result<Vec<Document>, PaginationError>;
}

impl PageSource for Collection<Document> {
    async fn fetch(
        &self,
        filter: Document,
        sort: Document,
        limit: i64,
    ) -> Result<Vec<Document>, PaginationError> {
        let cursor = self.find(filter).sort(sort).limit(limit).await?;
        Ok(cursor.try_collect().await?)
    }
}

impl<S: PageSource + ?Sized> PageSource for &S {
    async fn fetch(
        &self,
        filter: Document,
        sort: Document,
        limit: i64,
    ) -> Result<Vec<Document>, PaginationError> {
        (**self).fetch(filter, sort, limit).await
    }
}

pub struct Paginator<S> {
    source: S,
    pagination_keys: Vec<String>,
    key_kinds: HashMap<String, KeyKind>,
    after_cursor: Option<String>,
    before_cursor: Option<String>,
    limit: u64,
    order: Order,
}

impl<S: PageSource> Paginator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pagination_keys: vec![IDENTITY_KEY.to_string()],
            key_kinds: HashMap::new(),
            after_cursor: None,
            before_cursor: None,
            limit: DEFAULT_PAGE_LIMIT,
            order: Order::Asc,
        }
    }

    /// Sort and tie-break keys, most significant first. An empty list keeps
    /// the identity key.
    pub fn set_pagination_keys<I, K>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if !keys.is_empty() {
            self.pagination_keys = keys;
        }
        self
    }

    /// Declare how cursor values of `key` are read back. Undeclared keys
    /// are [`KeyKind::Inferred`].
    pub fn set_key_kind(&mut self, key: impl Into<String>, kind: KeyKind) -> &mut Self {
        self.key_kinds.insert(key.into(), kind);
        self
    }

    pub fn set_after_cursor(&mut self, cursor: impl Into<String>) -> &mut Self {
        self.after_cursor = Some(cursor.into());
        self
    }

    pub fn set_before_cursor(&mut self, cursor: impl Into<String>) -> &mut Self {
        self.before_cursor = Some(cursor.into());
        self
    }

    /// Page size; zero is raised to one.
    pub fn set_limit(&mut self, limit: u64) -> &mut Self {
        self.limit = limit.max(1);
        self
    }

    pub fn set_order(&mut self, order: Order) -> &mut Self {
        self.order = order;
        self
    }

    /// Run the query and return one page plus the cursors around it.
    pub async fn paginate<T: DeserializeOwned>(
        self,
        filter: Document,
    ) -> Result<PagingResult<T>, PaginationError> {
        let query = self.build_filter(filter)?;
        let sort = build_sort(&self.pagination_keys, self.effective_order());
        let fetch_limit = i64::try_from(self.limit)
            .unwrap_or(i64::MAX)
            .saturating_add(1);

        debug!(
            "Paginating by {:?} ({:?}, limit {}), after={:?}, before={:?}",
            self.pagination_keys,
            self.order,
            self.limit,
            self.after_cursor.as_deref().map(abbreviate),
            self.before_cursor.as_deref().map(abbreviate),
        );

        let mut documents = self.source.fetch(query, sort, fetch_limit).await?;

        let has_more = documents.len() as u64 > self.limit;
        if has_more {
            documents.truncate(self.limit as usize);
        }

        if documents.is_empty() {
            return Ok(PagingResult {
                data: Vec::new(),
                cursor: Cursor::default(),
            });
        }

        if self.walks_backward() {
            documents.reverse();
        }

        let mut cursor = Cursor::default();
        if self.before_cursor.is_some() || has_more {
            cursor.after_cursor = documents
                .last()
                .map(|d| encode_cursor(d, &self.pagination_keys));
        }
        if self.after_cursor.is_some() || (has_more && self.before_cursor.is_some()) {
            cursor.before_cursor = documents
                .first()
                .map(|d| encode_cursor(d, &self.pagination_keys));
        }

        debug!(
            "Fetched {} record(s), has_more={}",
            documents.len(),
            has_more
        );

        let data = documents
            .into_iter()
            .map(mongodb::bson::from_document)
            .collect::<Result<Vec<T>, _>>()?;

        Ok(PagingResult { data, cursor })
    }

    /// The after-cursor wins when both are set.
    fn walks_backward(&self) -> bool {
        self.after_cursor.is_none() && self.before_cursor.is_some()
    }

    fn effective_order(&self) -> Order {
        if self.walks_backward() {
            self.order.flip()
        } else {
            self.order
        }
    }

    fn build_filter(&self, filter: Document) -> Result<Document, CursorError> {
        let resume = self
            .after_cursor
            .as_deref()
            .or(self.before_cursor.as_deref());

        let condition = match resume {
            Some(raw) => {
                let values = self.cursor_values(raw)?;
                Some(build_cursor_condition(
                    &self.pagination_keys,
                    &values,
                    self.effective_order().operator(),
                ))
            }
            None => None,
        };

        Ok(merge_filters(filter, condition))
    }

    /// Cursor values lined up with the pagination keys.
    fn cursor_values(&self, raw: &str) -> Result<Vec<Bson>, CursorError> {
        let entries = decode_cursor(raw, &self.key_kinds)?;

        self.pagination_keys
            .iter()
            .map(|key| {
                entries
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, value)| value.clone())
                    .ok_or_else(|| CursorError::MissingKey { key: key.clone() })
            })
            .collect()
    }
}
