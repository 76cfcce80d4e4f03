//! Ordering of stored records by a single field

use std::cmp::Ordering;

use serde_json::Value;

use crate::models::book::{Record, SortField, SortOrder};

/// Stable sort of `records` on `field`. `Desc` flips the comparison, so
/// records that tie keep their file order in both directions.
///
/// Records without the field compare as the number `0`. `status` is never
/// stored, so sorting on it keeps file order unless a record carries a
/// literal `status` key.
pub fn sort_records(mut records: Vec<Record>, field: SortField, order: SortOrder) -> Vec<Record> {
    let default = Value::from(0);
    let key = field.key();
    records.sort_by(|a, b| {
        let ord = compare_values(a.get(key).unwrap_or(&default), b.get(key).unwrap_or(&default));
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    records
}

/// Total order over JSON values: null < bool < number < string < array < object.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y.iter())
            .map(|(l, r)| compare_values(l, r))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Object(x), Value::Object(y)) => x.len().cmp(&y.len()),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
