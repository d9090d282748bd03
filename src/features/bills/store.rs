use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::{PgColumn, PgRow};
use sqlx::types::Uuid;
use sqlx::{Column, FromRow, PgPool, Row, TypeInfo};

use crate::core::error::AppError;
use crate::features::bills::dto::{BillRecord, TagFlags};
use crate::features::bills::filter::{BILL_TABLE, BillFilter, build_bills_query};
use crate::features::definitions::{TAG_DEFINITIONS, TaxonomyCode, find_tag};
use crate::features::stats::dto::{StateCount, TagCount, TaxonomyCount};

/// Read-only access to the bill table. Every call is independent; nothing is
/// cached between calls.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Matching bills ordered by state, then bill identifier.
    async fn fetch_bills(&self, filter: &BillFilter) -> Result<Vec<BillRecord>, AppError>;
    async fn list_states(&self) -> Result<Vec<String>, AppError>;
    async fn count_bills(&self) -> Result<i64, AppError>;
    async fn taxonomy_counts(&self) -> Result<Vec<TaxonomyCount>, AppError>;
    /// At most `limit` states by descending bill count, ties by state code.
    async fn top_states(&self, limit: i64) -> Result<Vec<StateCount>, AppError>;
    /// One entry per defined tag, in definition order.
    async fn tag_counts(&self) -> Result<Vec<TagCount>, AppError>;
    async fn ping(&self) -> Result<(), AppError>;
}

pub struct PgBillStore {
    pool: PgPool,
}

impl PgBillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BillStore for PgBillStore {
    async fn fetch_bills(&self, filter: &BillFilter) -> Result<Vec<BillRecord>, AppError> {
        let mut query = build_bills_query(filter);
        let bills = query
            .build_query_as::<BillRecord>()
            .fetch_all(&self.pool)
            .await?;
        Ok(bills)
    }

    async fn list_states(&self) -> Result<Vec<String>, AppError> {
        let states = sqlx::query_scalar::<_, String>(&format!(
            "SELECT DISTINCT state FROM {BILL_TABLE} ORDER BY state"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(states)
    }

    async fn count_bills(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {BILL_TABLE}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn taxonomy_counts(&self) -> Result<Vec<TaxonomyCount>, AppError> {
        let counts = sqlx::query_as::<_, TaxonomyCount>(&format!(
            "SELECT taxonomy_code, COUNT(*) AS count FROM {BILL_TABLE} \
             GROUP BY taxonomy_code ORDER BY taxonomy_code"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }

    async fn top_states(&self, limit: i64) -> Result<Vec<StateCount>, AppError> {
        let counts = sqlx::query_as::<_, StateCount>(&format!(
            "SELECT state, COUNT(*) AS count FROM {BILL_TABLE} \
             GROUP BY state ORDER BY count DESC, state LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(counts)
    }

    async fn tag_counts(&self) -> Result<Vec<TagCount>, AppError> {
        let row = sqlx::query(&tag_counts_sql()).fetch_one(&self.pool).await?;

        let mut counts = Vec::with_capacity(TAG_DEFINITIONS.len());
        for tag in TAG_DEFINITIONS.iter() {
            counts.push(TagCount {
                tag,
                count: row.try_get::<i64, _>(tag.key)?,
            });
        }
        Ok(counts)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Counts every tag in a single pass over the table.
pub(crate) fn tag_counts_sql() -> String {
    let columns = TAG_DEFINITIONS
        .iter()
        .map(|tag| format!("COUNT(*) FILTER (WHERE {key}) AS {key}", key = tag.key))
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {columns} FROM {BILL_TABLE}")
}

const MODELLED_COLUMNS: [&str; 4] = ["state", "bill", "status", "taxonomy_code"];

impl<'r> FromRow<'r, PgRow> for BillRecord {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let code: String = row.try_get("taxonomy_code")?;
        let taxonomy_code = code
            .parse::<TaxonomyCode>()
            .map_err(|err| sqlx::Error::ColumnDecode {
                index: "taxonomy_code".to_string(),
                source: Box::new(err),
            })?;

        let status = match row.try_get::<Option<String>, _>("status") {
            Ok(status) => status,
            Err(sqlx::Error::ColumnNotFound(_)) => None,
            Err(err) => return Err(err),
        };

        let mut tags = TagFlags::default();
        for (index, tag) in TAG_DEFINITIONS.iter().enumerate() {
            // NULL reads as "tag absent".
            let flag = row.try_get::<Option<bool>, _>(tag.key)?.unwrap_or(false);
            tags.set(index, flag);
        }

        let mut extra = Map::new();
        for column in row.columns() {
            let name = column.name();
            if MODELLED_COLUMNS.contains(&name) || find_tag(name).is_some() {
                continue;
            }
            extra.insert(name.to_string(), decode_extra_column(row, column)?);
        }

        Ok(Self {
            state: row.try_get("state")?,
            bill: row.try_get("bill")?,
            status,
            taxonomy_code,
            tags,
            extra,
        })
    }
}

/// Decodes a column outside the modelled set into JSON. Types without a
/// mapping here are emitted as `null`.
fn decode_extra_column(row: &PgRow, column: &PgColumn) -> Result<Value, sqlx::Error> {
    let index = column.ordinal();
    let value = match column.type_info().name() {
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "CITEXT" => {
            row.try_get::<Option<String>, _>(index)?.map(Value::from)
        }
        "BOOL" => row.try_get::<Option<bool>, _>(index)?.map(Value::from),
        "INT2" => row.try_get::<Option<i16>, _>(index)?.map(Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(index)?.map(Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(index)?.map(Value::from),
        "FLOAT4" => row.try_get::<Option<f32>, _>(index)?.map(Value::from),
        "FLOAT8" => row.try_get::<Option<f64>, _>(index)?.map(Value::from),
        "JSON" | "JSONB" => row.try_get::<Option<Value>, _>(index)?,
        "UUID" => row
            .try_get::<Option<Uuid>, _>(index)?
            .map(|value| Value::from(value.to_string())),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)?
            .map(|value| Value::from(value.to_string())),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(index)?
            .map(|value| Value::from(value.to_string())),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map(|value| Value::from(value.format("%Y-%m-%dT%H:%M:%S%.f").to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(index)?
            .map(|value| Value::from(value.to_rfc3339())),
        "TEXT[]" | "VARCHAR[]" => row
            .try_get::<Option<Vec<String>>, _>(index)?
            .map(Value::from),
        _ => None,
    };

    Ok(value.unwrap_or(Value::Null))
}
