//! Parameter catalog: the registry of measurable lab parameters.
//!
//! Each entry merges aliases, interpretation texts and threshold table
//! under one canonical name. The catalog is built once (built-in table or
//! a JSON file), validated, and shared read-only behind an `Arc`.

pub mod builtin;
pub mod thresholds;

pub use thresholds::resolve_threshold;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::models::ParameterDefinition;
use crate::pipeline::extraction::fallback::proximity_pattern;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {0}: {1}")]
    Load(String, String),

    #[error("Failed to parse catalog {0}: {1}")]
    Parse(String, String),

    #[error("Parameter with empty name")]
    EmptyName,

    #[error("Duplicate parameter name: {0}")]
    DuplicateName(String),

    #[error("Parameter {0} has no aliases")]
    NoAliases(String),

    #[error("Parameter {name} has invalid range for key '{key}'")]
    InvalidRange { name: String, key: String },

    #[error("Alias '{alias}' cannot be compiled: {source}")]
    Pattern {
        alias: String,
        #[source]
        source: regex::Error,
    },
}

/// A validated definition plus its precompiled fallback patterns
/// (one per alias, same order).
#[derive(Debug)]
pub struct CatalogEntry {
    definition: ParameterDefinition,
    proximity_patterns: Vec<Regex>,
}

impl CatalogEntry {
    pub fn definition(&self) -> &ParameterDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.definition.aliases
    }

    pub fn proximity_patterns(&self) -> &[Regex] {
        &self.proximity_patterns
    }
}

#[derive(Debug)]
pub struct ParameterCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

static BUILTIN: LazyLock<Arc<ParameterCatalog>> = LazyLock::new(|| {
    Arc::new(
        ParameterCatalog::new(builtin::definitions()).expect("built-in catalog must be valid"),
    )
});

impl ParameterCatalog {
    /// Validate definitions and compile their alias patterns.
    /// Aliases are folded to lower case.
    pub fn new(definitions: Vec<ParameterDefinition>) -> Result<Self, CatalogError> {
        let mut entries = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for mut definition in definitions {
            let name = definition.name.trim().to_string();
            if name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if index.contains_key(&name) {
                return Err(CatalogError::DuplicateName(name));
            }

            definition.aliases = definition
                .aliases
                .iter()
                .map(|a| a.trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect();
            if definition.aliases.is_empty() {
                return Err(CatalogError::NoAliases(name));
            }

            for (key, range) in &definition.thresholds {
                if !range.low.is_finite() || !range.high.is_finite() || range.low > range.high {
                    return Err(CatalogError::InvalidRange {
                        name,
                        key: key.clone(),
                    });
                }
            }

            let proximity_patterns = definition
                .aliases
                .iter()
                .map(|alias| {
                    proximity_pattern(alias).map_err(|source| CatalogError::Pattern {
                        alias: alias.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            definition.name = name.clone();
            index.insert(name, entries.len());
            entries.push(CatalogEntry {
                definition,
                proximity_patterns,
            });
        }

        Ok(Self { entries, index })
    }

    /// The built-in catalog, built on first use.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Load a catalog from a JSON array of parameter definitions.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Load(path.display().to_string(), e.to_string()))?;
        let definitions: Vec<ParameterDefinition> = serde_json::from_str(&json)
            .map_err(|e| CatalogError::Parse(path.display().to_string(), e.to_string()))?;
        let catalog = Self::new(definitions)?;
        tracing::info!(
            path = %path.display(),
            parameters = catalog.len(),
            "Loaded parameter catalog"
        );
        Ok(catalog)
    }

    /// Entries in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReferenceRange;
    use std::collections::BTreeMap;
    use std::io::Write;

    fn def(name: &str, aliases: &[&str]) -> ParameterDefinition {
        ParameterDefinition {
            name: name.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            description: String::new(),
            low_meaning: String::new(),
            high_meaning: String::new(),
            advice: String::new(),
            normal_range: String::new(),
            thresholds: BTreeMap::new(),
        }
    }

    #[test]
    fn builtin_catalog_builds() {
        let catalog = ParameterCatalog::builtin();
        assert_eq!(catalog.len(), 37);
        assert!(catalog.get("Hemoglobin").is_some());
        assert!(catalog.get("hemoglobin").is_none());
    }

    #[test]
    fn builtin_is_shared() {
        let a = ParameterCatalog::builtin();
        let b = ParameterCatalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn one_pattern_per_alias() {
        let catalog = ParameterCatalog::builtin();
        for entry in catalog.iter() {
            assert_eq!(entry.aliases().len(), entry.proximity_patterns().len());
        }
    }

    #[test]
    fn preserves_definition_order() {
        let catalog = ParameterCatalog::new(vec![def("B", &["b"]), def("A", &["a"])]).unwrap();
        let names: Vec<_> = catalog.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn aliases_folded_to_lowercase() {
        let catalog = ParameterCatalog::new(vec![def("Ferritin", &["  FERRITIN ", ""])]).unwrap();
        assert_eq!(catalog.get("Ferritin").unwrap().aliases(), ["ferritin"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = ParameterCatalog::new(vec![def("TSH", &["tsh"]), def("TSH", &["t"])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(n) if n == "TSH"));
    }

    #[test]
    fn rejects_empty_name() {
        let err = ParameterCatalog::new(vec![def("  ", &["x"])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName));
    }

    #[test]
    fn rejects_parameter_without_aliases() {
        let err = ParameterCatalog::new(vec![def("TSH", &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::NoAliases(_)));
    }

    #[test]
    fn rejects_inverted_range() {
        let mut d = def("TSH", &["tsh"]);
        d.thresholds
            .insert("default".into(), ReferenceRange::new(4.0, 0.4));
        let err = ParameterCatalog::new(vec![d]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRange { key, .. } if key == "default"));
    }

    #[test]
    fn aliases_with_regex_metacharacters_compile() {
        let catalog =
            ParameterCatalog::new(vec![def("Glucose (Fasting)", &["glucose (fasting)", "a+b"])])
                .unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "name": "Ferritin",
                "aliases": ["ferritin"],
                "description": "Iron stores.",
                "low_meaning": "Low iron stores.",
                "high_meaning": "Iron overload.",
                "advice": "Ask your doctor.",
                "normal_range": "24-336 ng/mL",
                "thresholds": {{"default": [24, 336]}}
            }}]"#
        )
        .unwrap();

        let catalog = ParameterCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        let ferritin = catalog.get("Ferritin").unwrap().definition();
        assert_eq!(ferritin.thresholds["default"], ReferenceRange::new(24.0, 336.0));
    }

    #[test]
    fn load_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ParameterCatalog::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Load(..)));
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = ParameterCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(..)));
    }
}
