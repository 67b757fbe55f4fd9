use std::cmp::Ordering;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use crate::error::*;

/// A table row with named integer columns.
pub trait Row {
    /// The integer in `column`, or `None` if the column is absent or null.
    fn integer(&self, column: &str) -> Option<i32>;
}

impl<S: BuildHasher> Row for HashMap<String, i32, S> {
    fn integer(&self, column: &str) -> Option<i32> {
        self.get(column).copied()
    }
}

/// A row backed by a map of nullable integer columns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapRow {
    pub(crate) value: HashMap<String, Option<i32>>,
}

impl Row for MapRow {
    fn integer(&self, column: &str) -> Option<i32> {
        self.value.get(column).copied().flatten()
    }
}

impl<K, V> From<HashMap<K, V>> for MapRow
where
    K: Into<String>,
    V: Into<Option<i32>>,
{
    fn from(map: HashMap<K, V, RandomState>) -> Self {
        Self {
            value: map.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MapRow
where
    K: Eq + Hash + Into<String>,
    V: Into<Option<i32>>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            value: HashMap::from_iter(iter.into_iter().map(|(k, v)| (k.into(), v.into()))),
        }
    }
}

/// Orders rows by a list of integer columns, most significant first.
///
/// Every row compared must hold an integer in every sort column. A missing or null value is a
/// caller error and is reported as [`Error::MissingColumn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowComparator {
    columns: Vec<String>,
}

impl RowComparator {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Compares column by column and stops at the first column that differs. Rows equal in
    /// every sort column compare as `Equal`.
    pub fn compare<L, R>(&self, left: &L, right: &R) -> Result<Ordering>
    where
        L: Row + ?Sized,
        R: Row + ?Sized,
    {
        for column in &self.columns {
            let left_value = left
                .integer(column)
                .ok_or_else(|| Error::MissingColumn(column.clone()))?;
            let right_value = right
                .integer(column)
                .ok_or_else(|| Error::MissingColumn(column.clone()))?;
            match left_value.cmp(&right_value) {
                Ordering::Equal => continue,
                ordering => return Ok(ordering),
            }
        }
        Ok(Ordering::Equal)
    }

    /// Stable-sorts `rows`. Fails without reordering anything if a row is missing a sort column.
    pub fn sort<R: Row>(&self, rows: &mut [R]) -> Result<()> {
        for row in rows.iter() {
            if let Some(column) = self.columns.iter().find(|c| row.integer(c).is_none()) {
                return Err(Error::MissingColumn(column.clone()));
            }
        }
        // Every row holds every column now, so compare cannot fail.
        rows.sort_by(|left, right| self.compare(left, right).unwrap_or(Ordering::Equal));
        Ok(())
    }
}
