use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// Conversion from a database row into a model.
///
/// Implemented manually instead of via `FromRow` so bounded-string columns
/// get a length check with a column-named error on overflow.
pub trait TryFromRow<R>: Sized {
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Read a required text column into a `HeaplessString<N>`.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s)
        .map_err(|_| format!("column '{col_name}' exceeds {N} chars").into())
}

/// Read a nullable text column into an `Option<HeaplessString<N>>`.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| format!("column '{col_name}' exceeds {N} chars").into())
}
