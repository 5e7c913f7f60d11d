//! Decoding of result rows into [`Record`]s.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Number, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo};

use crate::application::ports::Record;

/// Columns in select order. When two columns share an alias the first one wins.
pub fn row_to_record(row: &PgRow) -> Record {
    let mut record = Record::new();
    for (index, column) in row.columns().iter().enumerate() {
        let value = decode_column(row, index, column.type_info().name());
        record.entry(column.name().to_string()).or_insert(value);
    }
    record
}

fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Value {
    match type_name {
        "BOOL" => get::<bool>(row, index).map(Value::Bool),
        "INT2" => get::<i16>(row, index).map(|v| Value::Number(v.into())),
        "INT4" => get::<i32>(row, index).map(|v| Value::Number(v.into())),
        "INT8" => get::<i64>(row, index).map(|v| Value::Number(v.into())),
        "FLOAT4" => get::<f32>(row, index).and_then(|v| float(f64::from(v))),
        "FLOAT8" => get::<f64>(row, index).and_then(float),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "CHAR" => {
            get::<String>(row, index).map(Value::String)
        }
        "DATE" => get::<NaiveDate>(row, index).map(|v| Value::String(v.to_string())),
        "TIMESTAMP" => get::<NaiveDateTime>(row, index).map(|v| Value::String(v.to_string())),
        "TIMESTAMPTZ" => get::<DateTime<Utc>>(row, index).map(|v| Value::String(v.to_rfc3339())),
        "JSON" | "JSONB" => get::<Value>(row, index),
        "INT4[]" => get::<Vec<i32>>(row, index)
            .map(|v| Value::Array(v.into_iter().map(|n| Value::Number(n.into())).collect())),
        "INT8[]" => get::<Vec<i64>>(row, index)
            .map(|v| Value::Array(v.into_iter().map(|n| Value::Number(n.into())).collect())),
        "FLOAT8[]" => get::<Vec<f64>>(row, index)
            .map(|v| Value::Array(v.into_iter().filter_map(float).collect())),
        "TEXT[]" | "VARCHAR[]" => get::<Vec<String>>(row, index)
            .map(|v| Value::Array(v.into_iter().map(Value::String).collect())),
        other => {
            tracing::warn!(
                column = index,
                type_name = other,
                "Unsupported column type, returning null"
            );
            None
        }
    }
    .unwrap_or(Value::Null)
}

/// NULL and undecodable values both come back as `None`.
fn get<'r, T>(row: &'r PgRow, index: usize) -> Option<T>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get::<Option<T>, _>(index).ok().flatten()
}

fn float(value: f64) -> Option<Value> {
    Number::from_f64(value).map(Value::Number)
}
