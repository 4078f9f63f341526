//! Filter and sort documents for cursor queries.

use mongodb::bson::{doc, Bson, Document};

use super::Order;

/// Build the compound tuple comparison `(k0, k1, ..) op (v0, v1, ..)`.
///
/// Branch `i` requires equality on keys `0..i` and `operator` on key `i`;
/// the result is the `$or` of all branches.
pub fn build_cursor_condition(keys: &[String], values: &[Bson], operator: &str) -> Document {
    let branches: Vec<Bson> = keys
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (key, value))| {
            let mut branch = Document::new();
            for (prefix_key, prefix_value) in keys.iter().zip(values).take(i) {
                branch.insert(prefix_key.as_str(), prefix_value.clone());
            }
            branch.insert(key.as_str(), doc! { operator: value.clone() });
            Bson::Document(branch)
        })
        .collect();

    doc! { "$or": branches }
}

/// Sort document applying `order` to every key, in key order.
pub fn build_sort(keys: &[String], order: Order) -> Document {
    keys.iter()
        .map(|key| (key.clone(), Bson::Int32(order.direction())))
        .collect()
}

/// Combine the caller's filter with an optional cursor condition.
pub fn merge_filters(filter: Document, cursor_condition: Option<Document>) -> Document {
    match cursor_condition {
        None => filter,
        Some(condition) if filter.is_empty() => condition,
        Some(condition) => doc! { "$and": [filter, condition] },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_single_key_condition() {
        let condition = build_cursor_condition(&keys(&["_id"]), &[Bson::Int32(5)], "$gt");
        assert_eq!(condition, doc! { "$or": [ { "_id": { "$gt": 5 } } ] });
    }

    #[test]
    fn test_composite_condition_is_lexicographic() {
        let condition = build_cursor_condition(
            &keys(&["department", "last_name", "_id"]),
            &[
                Bson::String("Sales".into()),
                Bson::String("Doe".into()),
                Bson::Int32(9),
            ],
            "$lt",
        );

        assert_eq!(
            condition,
            doc! {
                "$or": [
                    { "department": { "$lt": "Sales" } },
                    { "department": "Sales", "last_name": { "$lt": "Doe" } },
                    { "department": "Sales", "last_name": "Doe", "_id": { "$lt": 9 } }
                ]
            }
        );
    }

    #[test]
    fn test_sort_follows_key_order() {
        let sort = build_sort(&keys(&["hired_at", "_id"]), Order::Desc);
        assert_eq!(sort, doc! { "hired_at": -1, "_id": -1 });
        assert_eq!(sort.keys().collect::<Vec<_>>(), vec!["hired_at", "_id"]);
    }

    #[test]
    fn test_merge_filters() {
        let condition = doc! { "$or": [ { "_id": { "$gt": 1 } } ] };

        assert_eq!(merge_filters(doc! { "a": 1 }, None), doc! { "a": 1 });
        assert_eq!(merge_filters(doc! {}, Some(condition.clone())), condition);
        assert_eq!(
            merge_filters(doc! { "department": "Sales" }, Some(condition.clone())),
            doc! { "$and": [ { "department": "Sales" }, condition ] }
        );
    }
}
