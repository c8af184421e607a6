//! Custom index tables loaded from JSON files.
//!
//! A file holds one definition or an array of them:
//!
//! ```json
//! {
//!   "method": "CUSTOM:RENT",
//!   "description": "Median monthly rent",
//!   "values": { "1970": 108, "2000": 602, "2024": 1406 }
//! }
//! ```

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use timebucks_core::{IndexTable, IndexTransformation, Method, TransformationRegistry};

/// One custom method definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexDefinition {
    /// Method name written into calculated notations.
    pub method: String,
    /// Human readable description shown by `--list-methods`.
    #[serde(default)]
    pub description: Option<String>,
    /// Index value per year, keyed by the year as text.
    pub values: BTreeMap<String, Decimal>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndexFile {
    One(IndexDefinition),
    Many(Vec<IndexDefinition>),
}

impl IndexDefinition {
    /// Build the transformation this definition describes.
    pub fn into_transformation(self) -> Result<IndexTransformation> {
        let method = Method::new(self.method.as_str());
        if !method.is_notation_safe() {
            bail!(
                "method name '{method}' cannot be written in notation \
                 (expected upper case letters, optionally followed by ':' and letters or digits)"
            );
        }
        if self.values.is_empty() {
            bail!("method '{method}' has no index values");
        }

        let points = self
            .values
            .into_iter()
            .map(|(year, value)| {
                let parsed = year
                    .trim()
                    .parse::<i32>()
                    .with_context(|| format!("method '{method}': '{year}' is not a year"))?;
                Ok((parsed, value))
            })
            .collect::<Result<Vec<_>>>()?;
        let table = IndexTable::new(self.method, points)?;
        let description = self
            .description
            .unwrap_or_else(|| format!("custom index {method}"));
        Ok(IndexTransformation::new(method, description, table))
    }
}

/// Parse index definitions from JSON text.
pub fn parse_definitions(json: &str) -> Result<Vec<IndexDefinition>> {
    let file: IndexFile = serde_json::from_str(json).context("invalid index file")?;
    Ok(match file {
        IndexFile::One(definition) => vec![definition],
        IndexFile::Many(definitions) => definitions,
    })
}

/// Load every definition in `path` into `registry`.
///
/// Returns the registered method names in file order.
pub fn load(path: &Path, registry: &TransformationRegistry) -> Result<Vec<Method>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read index file {}", path.display()))?;
    let definitions =
        parse_definitions(&json).with_context(|| format!("in index file {}", path.display()))?;

    let mut methods = Vec::with_capacity(definitions.len());
    for definition in definitions {
        let transformation = definition
            .into_transformation()
            .with_context(|| format!("in index file {}", path.display()))?;
        let method = transformation.method().clone();
        if method.is_builtin() {
            tracing::warn!(%method, file = %path.display(), "index file redefines a built-in method");
        }
        tracing::info!(
            %method,
            points = transformation.table().len(),
            file = %path.display(),
            "loaded custom index"
        );
        registry.register(method.clone(), transformation);
        methods.push(method);
    }
    Ok(methods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_single_definition() {
        let defs = parse_definitions(
            r#"{"method": "CUSTOM:RENT", "description": "rent", "values": {"1970": 108, "2024": 1406.5}}"#,
        )
        .unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].method, "CUSTOM:RENT");
        assert_eq!(defs[0].values.get("1970"), Some(&dec!(108)));
        assert_eq!(defs[0].values.get("2024"), Some(&dec!(1406.5)));
    }

    #[test]
    fn test_parse_array() {
        let defs = parse_definitions(
            r#"[{"method": "A", "values": {"2000": 1}}, {"method": "B", "values": {"2000": 2}}]"#,
        )
        .unwrap();
        let names: Vec<&str> = defs.iter().map(|d| d.method.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(defs[0].description.is_none());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(parse_definitions("{").is_err());
        assert!(parse_definitions(r#"{"method": "A"}"#).is_err());
        assert!(parse_definitions(r#"{"method": "A", "values": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_rejects_unwritable_method_name() {
        let def = IndexDefinition {
            method: "rent".to_string(),
            description: None,
            values: BTreeMap::from([("2000".to_string(), dec!(1))]),
        };
        let err = def.into_transformation().unwrap_err();
        assert!(err.to_string().contains("cannot be written in notation"));
    }

    #[test]
    fn test_rejects_non_numeric_year() {
        let defs = parse_definitions(r#"{"method": "A", "values": {"year": 1}}"#).unwrap();
        let err = defs[0].clone().into_transformation().unwrap_err();
        assert!(err.to_string().contains("'year' is not a year"), "{err}");
    }

    #[test]
    fn test_rejects_non_positive_value() {
        let def = IndexDefinition {
            method: "CUSTOM:BAD".to_string(),
            description: None,
            values: BTreeMap::from([("2000".to_string(), dec!(1)), ("2010".to_string(), dec!(0))]),
        };
        assert!(def.into_transformation().is_err());
    }

    #[test]
    fn test_default_description() {
        let def = IndexDefinition {
            method: "CUSTOM:RENT".to_string(),
            description: None,
            values: BTreeMap::from([("2000".to_string(), dec!(1))]),
        };
        let t = def.into_transformation().unwrap();
        assert_eq!(
            timebucks_core::Transformation::description(&t),
            "custom index CUSTOM:RENT"
        );
    }

    #[test]
    fn test_load_can_redefine_builtin() {
        use std::io::Write;
        use timebucks_core::{Currency, TemporalDate, TimeBucks};

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"method": "CPI", "values": {{"1900": 1}}}}"#).unwrap();

        let registry = TransformationRegistry::new();
        let methods = load(file.path(), &registry).unwrap();
        assert_eq!(methods, vec![Method::cpi()]);
        assert!(methods[0].is_builtin());

        let tb = TimeBucks::natural(dec!(100), Currency::Usd, TemporalDate::from_year(1970));
        let flat = registry
            .transform(&tb, "CPI", TemporalDate::from_year(2024))
            .unwrap();
        assert_eq!(flat.amount(), dec!(100));
        assert_eq!(registry.len(), 3);
    }
}
