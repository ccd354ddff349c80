//! Aggregation of parsed data files into an ordered name -> data mapping.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::DataLoader;
use crate::name::{resolve_name, NameSource};
use crate::reporter::Reporter;

/// One collected data file.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedRecord {
    pub data: serde_json::Value,
    pub source: PathBuf,
}

/// Records keyed by sanitized name, in first-seen order.
///
/// Inserting an existing name replaces its record but keeps the position
/// of the first insertion.
#[derive(Debug, Default)]
pub struct Collection {
    records: IndexMap<String, CollectedRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under `name`. Returns the record it replaced, if any.
    pub fn insert(&mut self, name: String, record: CollectedRecord) -> Option<CollectedRecord> {
        self.records.insert(name, record)
    }

    pub fn get(&self, name: &str) -> Option<&CollectedRecord> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CollectedRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }
}

/// Loads every file yielded by `files` and collects it under its resolved
/// name.
///
/// The first traversal or parse error aborts the whole collection.
/// Renames and collisions are reported and the later file wins.
pub fn collect<I>(
    files: I,
    loader: &dyn DataLoader,
    name_source: NameSource,
    reporter: &dyn Reporter,
) -> Result<Collection>
where
    I: IntoIterator<Item = Result<PathBuf>>,
{
    let mut collection = Collection::new();
    for file in files {
        let file = file?;
        let data = loader.load(&file)?;
        let candidate = resolve_name(&file, name_source);
        if candidate.is_renamed() {
            reporter.renamed(&candidate.raw, &candidate.sanitized);
        }
        collect_one(&mut collection, candidate.sanitized, data, &file, reporter);
    }
    Ok(collection)
}

fn collect_one(
    collection: &mut Collection,
    name: String,
    data: serde_json::Value,
    file: &Path,
    reporter: &dyn Reporter,
) {
    if collection.get(&name).is_some() {
        reporter.collision(&name, file);
    }
    reporter.included(&name, file);
    collection.insert(name, CollectedRecord { data, source: file.to_path_buf() });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(data: serde_json::Value, source: &str) -> CollectedRecord {
        CollectedRecord { data, source: PathBuf::from(source) }
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut collection = Collection::new();
        collection.insert("foo".into(), record(json!(1), "a/foo.json"));
        collection.insert("bar".into(), record(json!(2), "a/bar.json"));
        let replaced = collection.insert("foo".into(), record(json!(3), "b/foo.json"));

        assert_eq!(replaced.map(|r| r.data), Some(json!(1)));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["foo", "bar"]);
        assert_eq!(collection.get("foo").unwrap().data, json!(3));
        assert_eq!(collection.get("foo").unwrap().source, PathBuf::from("b/foo.json"));
    }
}
