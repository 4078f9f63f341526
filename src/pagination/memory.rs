//! In-memory [`PageSource`] for tests.
//!
//! Evaluates the subset of MongoDB filter and sort documents the paginator
//! generates: equality, `$gt`, `$lt`, `$and` and `$or`.

use std::cell::RefCell;
use std::cmp::Ordering;

use mongodb::bson::{Bson, Document};

use super::cursor::lookup;
use super::{PageSource, PaginationError};

pub struct MemorySource {
    documents: Vec<Document>,
    queries: RefCell<Vec<(Document, Document, i64)>>,
}

impl MemorySource {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Every `(filter, sort, limit)` this source was asked for, in order.
    pub fn queries(&self) -> Vec<(Document, Document, i64)> {
        self.queries.borrow().clone()
    }
}

impl PageSource for MemorySource {
    async fn fetch(
        &self,
        filter: Document,
        sort: Document,
        limit: i64,
    ) -> Result<Vec<Document>, PaginationError> {
        let mut matched: Vec<Document> = self
            .documents
            .iter()
            .filter(|d| matches(d, &filter))
            .cloned()
            .collect();

        matched.sort_by(|a, b| compare_by(a, b, &sort));
        matched.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        self.queries.borrow_mut().push((filter, sort, limit));
        Ok(matched)
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, condition)| match key.as_str() {
        "$and" => clauses(condition).all(|c| matches(document, c)),
        "$or" => clauses(condition).any(|c| matches(document, c)),
        field => {
            let value = lookup(document, field).unwrap_or(&Bson::Null);
            match condition {
                Bson::Document(ops) if ops.keys().all(|k| k.starts_with('$')) => {
                    ops.iter().all(|(op, operand)| {
                        let ordering = compare(value, operand);
                        match op.as_str() {
                            "$gt" => same_type(value, operand) && ordering == Ordering::Greater,
                            "$lt" => same_type(value, operand) && ordering == Ordering::Less,
                            "$eq" => ordering == Ordering::Equal,
                            other => panic!("unsupported operator {}", other),
                        }
                    })
                }
                expected => compare(value, expected) == Ordering::Equal,
            }
        }
    })
}

fn clauses(condition: &Bson) -> impl Iterator<Item = &Document> {
    condition
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(Bson::as_document)
}

fn compare_by(a: &Document, b: &Document, sort: &Document) -> Ordering {
    sort.iter().fold(Ordering::Equal, |acc, (key, direction)| {
        acc.then_with(|| {
            let ordering = compare(
                lookup(a, key).unwrap_or(&Bson::Null),
                lookup(b, key).unwrap_or(&Bson::Null),
            );
            if direction.as_i32() == Some(-1) {
                ordering.reverse()
            } else {
                ordering
            }
        })
    })
}

// MongoDB's cross-type comparison order, trimmed to the types used in tests.
fn type_rank(value: &Bson) -> u8 {
    match value {
        Bson::Null | Bson::Undefined => 1,
        Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) => 2,
        Bson::String(_) => 3,
        Bson::Document(_) => 4,
        Bson::ObjectId(_) => 7,
        Bson::Boolean(_) => 8,
        Bson::DateTime(_) => 9,
        _ => 100,
    }
}

fn same_type(a: &Bson, b: &Bson) -> bool {
    type_rank(a) == type_rank(b)
}

fn compare(a: &Bson, b: &Bson) -> Ordering {
    match (a, b) {
        (Bson::String(x), Bson::String(y)) => x.cmp(y),
        (Bson::ObjectId(x), Bson::ObjectId(y)) => x.bytes().cmp(&y.bytes()),
        (Bson::DateTime(x), Bson::DateTime(y)) => x.cmp(y),
        (Bson::Boolean(x), Bson::Boolean(y)) => x.cmp(y),
        _ if type_rank(a) == 2 && type_rank(b) == 2 => {
            as_f64(a).partial_cmp(&as_f64(b)).unwrap_or(Ordering::Equal)
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn as_f64(value: &Bson) -> f64 {
    match value {
        Bson::Int32(n) => f64::from(*n),
        Bson::Int64(n) => *n as f64,
        Bson::Double(n) => *n,
        _ => f64::NAN,
    }
}
