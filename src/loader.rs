use crate::elements::{Dataset, Element, SELECTOR_KEY};
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a content dump could not be read
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file {0} does not exist")]
    Missing(PathBuf),

    #[error("cannot read content dump: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected an array or object of element records, found {0}")]
    UnexpectedShape(&'static str),

    #[error("element {index}: selector must be a string, found {found}")]
    InvalidSelector { index: usize, found: &'static str },
}

/// Field that receives the element id of object-shaped dumps
pub const ID_KEY: &str = "id";

/// Loads the element dump at `path`.
///
/// Never fails: a missing or malformed source yields an empty dataset and a log entry.
pub fn load(path: impl AsRef<Path>) -> Dataset {
    let path = path.as_ref();
    match try_load(path) {
        Ok(dataset) => {
            ::log::info!("Loaded {} elements from {}", dataset.len(), path.display());
            dataset
        }
        Err(LoadError::Missing(p)) => {
            ::log::warn!("File {} does not exist!", p.display());
            Dataset::empty()
        }
        Err(e) => {
            ::log::error!("Error loading {}: {}", path.display(), e);
            Dataset::empty()
        }
    }
}

/// Loads the element dump at `path`, reporting why it failed
pub fn try_load(path: &Path) -> Result<Dataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }

    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    parse(&contents)
}

/// Parses a dump held in memory.
///
/// Accepts a JSON array of element records, or an object whose values are element
/// records (taken in key order). In the object form each key is kept as the record's
/// `id` field unless the record already carries one.
pub fn parse(json: &str) -> Result<Dataset, LoadError> {
    let records = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items,
        Value::Object(map) => map
            .into_iter()
            .map(|(id, mut record)| {
                if let Value::Object(fields) = &mut record {
                    fields
                        .entry(ID_KEY)
                        .or_insert_with(|| Value::String(id));
                }
                record
            })
            .collect(),
        other => return Err(LoadError::UnexpectedShape(shape_name(&other))),
    };

    let mut elements = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let element: Element = serde_json::from_value(record)?;
        match element.fields.get(SELECTOR_KEY) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => {
                return Err(LoadError::InvalidSelector {
                    index,
                    found: shape_name(other),
                });
            }
        }
        elements.push(element);
    }

    Ok(Dataset::new(elements))
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
