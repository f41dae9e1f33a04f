use async_trait::async_trait;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, PgPool, Row};

use crate::database::manager::DatabaseError;

/// A value bound into a parameterised query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

/// Equality condition on a single column.
pub type Filter = (&'static str, SqlValue);

/// A row type stored in its own table with a database-assigned `id`.
pub trait Entity:
    for<'r> FromRow<'r, PgRow> + Serialize + Clone + Send + Sync + Unpin + 'static
{
    const TABLE: &'static str;
    /// Human name used in "<Label> not found".
    const LABEL: &'static str;
    /// Writable columns, in the order `values()` yields them.
    const COLUMNS: &'static [&'static str];
    /// Columns carrying a UNIQUE constraint.
    const UNIQUE: &'static [&'static str] = &[];

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn values(&self) -> Vec<SqlValue>;

    fn value_of(&self, column: &str) -> Option<SqlValue> {
        if column == "id" {
            return Some(SqlValue::Int(self.id()));
        }
        Self::COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|idx| self.values().into_iter().nth(idx))
    }

    fn not_found() -> DatabaseError {
        DatabaseError::NotFound(format!("{} not found", Self::LABEL))
    }
}

/// Storage operations shared by every entity.
#[async_trait]
pub trait Store<T: Entity>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, DatabaseError>;
    async fn find_where(&self, filters: &[Filter]) -> Result<Vec<T>, DatabaseError>;
    /// Missing rows surface as `DatabaseError::NotFound`.
    async fn find_by_id(&self, id: i64) -> Result<T, DatabaseError>;
    async fn find_one_where(&self, filters: &[Filter]) -> Result<Option<T>, DatabaseError>;
    async fn insert(&self, entity: &T) -> Result<T, DatabaseError>;
    /// Full-row write of every writable column.
    async fn update(&self, entity: &T) -> Result<T, DatabaseError>;
    async fn delete(&self, id: i64) -> Result<(), DatabaseError>;
    async fn sum(&self, column: &'static str, filters: &[Filter]) -> Result<i64, DatabaseError>;
}

pub fn ensure_column<T: Entity>(column: &str) -> Result<(), DatabaseError> {
    if column == "id" || T::COLUMNS.contains(&column) {
        Ok(())
    } else {
        Err(DatabaseError::QueryError(format!(
            "unknown column '{}' on {}",
            column,
            T::TABLE
        )))
    }
}

/// Postgres-backed store for one entity table.
pub struct PgRepository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Entity> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    fn where_clause(filters: &[Filter]) -> Result<String, DatabaseError> {
        if filters.is_empty() {
            return Ok(String::new());
        }
        let mut parts = Vec::with_capacity(filters.len());
        for (idx, (column, _)) in filters.iter().enumerate() {
            ensure_column::<T>(column)?;
            parts.push(format!("\"{}\" = ${}", column, idx + 1));
        }
        Ok(format!(" WHERE {}", parts.join(" AND ")))
    }

    fn select_sql(filters: &[Filter]) -> Result<String, DatabaseError> {
        Ok(format!(
            "SELECT * FROM \"{}\"{} ORDER BY id",
            T::TABLE,
            Self::where_clause(filters)?
        ))
    }

    fn insert_sql() -> String {
        let columns: Vec<String> = T::COLUMNS.iter().map(|c| format!("\"{}\"", c)).collect();
        let params: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("${}", i)).collect();
        format!(
            "INSERT INTO \"{}\" ({}) VALUES ({}) RETURNING *",
            T::TABLE,
            columns.join(", "),
            params.join(", ")
        )
    }

    fn update_sql() -> String {
        let assignments: Vec<String> = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("\"{}\" = ${}", c, i + 1))
            .collect();
        format!(
            "UPDATE \"{}\" SET {}, updated_at = now() WHERE id = ${} RETURNING *",
            T::TABLE,
            assignments.join(", "),
            T::COLUMNS.len() + 1
        )
    }
}

#[async_trait]
impl<T: Entity> Store<T> for PgRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, DatabaseError> {
        self.find_where(&[]).await
    }

    async fn find_where(&self, filters: &[Filter]) -> Result<Vec<T>, DatabaseError> {
        let sql = Self::select_sql(filters)?;
        let mut q = sqlx::query_as::<_, T>(&sql);
        for (_, value) in filters {
            q = bind_value_query_as(q, value);
        }
        Ok(q.fetch_all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<T, DatabaseError> {
        let sql = format!("SELECT * FROM \"{}\" WHERE id = $1", T::TABLE);
        match sqlx::query_as::<_, T>(&sql).bind(id).fetch_one(&self.pool).await {
            Ok(row) => Ok(row),
            Err(sqlx::Error::RowNotFound) => Err(T::not_found()),
            Err(other) => Err(other.into()),
        }
    }

    async fn find_one_where(&self, filters: &[Filter]) -> Result<Option<T>, DatabaseError> {
        let sql = format!("{} LIMIT 1", Self::select_sql(filters)?);
        let mut q = sqlx::query_as::<_, T>(&sql);
        for (_, value) in filters {
            q = bind_value_query_as(q, value);
        }
        Ok(q.fetch_optional(&self.pool).await?)
    }

    async fn insert(&self, entity: &T) -> Result<T, DatabaseError> {
        let sql = Self::insert_sql();
        let values = entity.values();
        let mut q = sqlx::query_as::<_, T>(&sql);
        for value in &values {
            q = bind_value_query_as(q, value);
        }
        q.fetch_one(&self.pool).await.map_err(write_error::<T>)
    }

    async fn update(&self, entity: &T) -> Result<T, DatabaseError> {
        let sql = Self::update_sql();
        let values = entity.values();
        let mut q = sqlx::query_as::<_, T>(&sql);
        for value in &values {
            q = bind_value_query_as(q, value);
        }
        match q.bind(entity.id()).fetch_one(&self.pool).await {
            Ok(row) => Ok(row),
            Err(sqlx::Error::RowNotFound) => Err(T::not_found()),
            Err(other) => Err(write_error::<T>(other)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM \"{}\" WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(T::not_found());
        }
        Ok(())
    }

    async fn sum(&self, column: &'static str, filters: &[Filter]) -> Result<i64, DatabaseError> {
        ensure_column::<T>(column)?;
        let sql = format!(
            "SELECT COALESCE(SUM(\"{}\"), 0)::BIGINT AS total FROM \"{}\"{}",
            column,
            T::TABLE,
            Self::where_clause(filters)?
        );
        let mut q = sqlx::query(&sql);
        for (_, value) in filters {
            q = bind_value_query(q, value);
        }
        let row = q.fetch_one(&self.pool).await?;
        let total: i64 = row.try_get("total")?;
        Ok(total)
    }
}

/// Unique violations (SQLSTATE 23505) become `UniqueViolation` naming the column.
fn write_error<T: Entity>(err: sqlx::Error) -> DatabaseError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            let constraint = db.constraint().unwrap_or_default();
            let column = T::UNIQUE
                .iter()
                .find(|c| constraint.contains(*c))
                .or_else(|| T::UNIQUE.first())
                .copied()
                .unwrap_or("id");
            return DatabaseError::UniqueViolation(column.to_string());
        }
    }
    err.into()
}

fn bind_value_query<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    v: &SqlValue,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match v {
        SqlValue::Int(i) => q.bind(*i),
        SqlValue::Text(s) => q.bind(s.clone()),
    }
}

fn bind_value_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &SqlValue,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    match v {
        SqlValue::Int(i) => q.bind(*i),
        SqlValue::Text(s) => q.bind(s.clone()),
    }
}
