use crate::{
    error::{Err, Result},
    types::VId,
};
use std::collections::BTreeMap;

/// Per-vertex values, one column per published task name.
///
/// Column `name` holds the value of vertex `vid` at index `vid`.
#[derive(Debug, Clone)]
pub struct PropertyTable<V> {
    columns: BTreeMap<String, Vec<V>>,
}

impl<V> PropertyTable<V> {
    pub fn new() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Result<&[V]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Err::UnknownProperty(String::from(name)))
    }

    pub fn get(&self, name: &str, vid: VId) -> Result<&V> {
        let column = self.column(name)?;
        column.get(vid).ok_or(Err::OutOfRangeVertex {
            vid,
            num_vertices: column.len(),
        })
    }

    pub(crate) fn insert(&mut self, name: &str, values: Vec<V>) {
        self.columns.insert(String::from(name), values);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Vec<V>> {
        self.columns.remove(name)
    }
}

impl<V> Default for PropertyTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
