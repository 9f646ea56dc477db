use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::text_utils::indent_json;

/// An entity from a data file, together with the JSON object it was read from.
/// The raw object is what gets embedded back into the generated page.
#[derive(Debug, Clone)]
pub struct Record<T> {
    pub data: T,
    pub raw: Value,
}

/// Parses the array stored under `key`. Returns `None` when the document has no such key.
pub fn parse_records<T: DeserializeOwned>(content: &str, key: &str) -> io::Result<Option<Vec<Record<T>>>> {
    let mut document: Value = match serde_json::from_str(content) {
        Ok(doc) => doc,
        Err(e) => return Err(io::Error::new(ErrorKind::InvalidData, format!("Error parsing JSON: {}", e))),
    };

    let Some(items) = document.get_mut(key).map(Value::take) else {
        return Ok(None);
    };

    let Value::Array(items) = items else {
        return Err(io::Error::new(ErrorKind::InvalidData, format!("\"{}\" must be a list", key)));
    };

    let mut records = Vec::with_capacity(items.len());
    for (pos, raw) in items.into_iter().enumerate() {
        let data = match T::deserialize(&raw) {
            Ok(data) => data,
            Err(e) => return Err(io::Error::new(ErrorKind::InvalidData, format!("Invalid entry #{} in \"{}\": {}", pos, key, e))),
        };
        records.push(Record { data, raw });
    }

    Ok(Some(records))
}

pub fn read_records<T: DeserializeOwned>(path: &Path, key: &str) -> io::Result<Option<Vec<Record<T>>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error reading data file {}: {}", path.display(), e))),
    };

    parse_records(&content, key).map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
}

/// `{"<key>": [...]}` pretty printed, every line indented by four spaces
pub fn embed_records<T>(key: &str, records: &[Record<T>]) -> String {
    let mut document = Map::new();
    let raws: Vec<Value> = records.iter().map(|r| r.raw.clone()).collect();
    document.insert(key.to_string(), Value::Array(raws));

    // A Value built from parsed JSON always serializes
    let json = serde_json::to_string_pretty(&Value::Object(document)).unwrap_or_default();
    indent_json(&json, 4)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, Debug)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_parse_records() {
        let json = r#"{"items": [{"name": "a", "extra": 1}, {"name": "b"}]}"#;
        let records = parse_records::<Item>(json, "items").unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].data.name, "a");
        assert_eq!(records[0].raw["extra"], 1);
        assert_eq!(records[1].data.name, "b");
    }

    #[test]
    fn test_missing_key() {
        let records = parse_records::<Item>(r#"{"other": []}"#, "items").unwrap();
        assert!(records.is_none());
    }

    #[test]
    fn test_invalid_entry() {
        let err = parse_records::<Item>(r#"{"items": [{"title": "x"}]}"#, "items").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("#0"));

        let err = parse_records::<Item>(r#"{"items": {}}"#, "items").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let err = parse_records::<Item>("not json", "items").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_embed_keeps_key_order_and_unicode() {
        let json = r#"{"items": [{"zeta": "São Paulo", "alpha": 2}]}"#;
        let records = parse_records::<Value>(json, "items").unwrap().unwrap();
        let embedded = embed_records("items", &records);
        assert_eq!(embedded, r#"    {
      "items": [
        {
          "zeta": "São Paulo",
          "alpha": 2
        }
      ]
    }"#);
    }
}
