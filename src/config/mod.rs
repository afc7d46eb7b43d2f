//! Parameter store with typed "load with default" lookups.
//!
//! The store is a flat key/value source. Every lookup supplies a default,
//! so a missing key never fails:
//! - absent key: the default is used (logged at debug level)
//! - present but incompatible value: the default is used (logged as a warning)
//!
//! # Parameter file format
//!
//! A flat YAML mapping with scalar or sequence values:
//!
//! ```yaml
//! L: 256.0
//! N_full: 64
//! scalar_mass: 0.1
//! kerr_center: [128.0, 128.0, 128.0]
//! initial_f_file: data/flatspace_initial_f_eta7e-2.txt
//! ```

pub mod base;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ParamError, ParamResult};

pub use base::DerivedContext;

/// Key/value source of simulation parameters.
///
/// Implementors only provide raw lookup; typed resolution is shared.
pub trait ParameterStore {
    /// Raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Directory that relative paths in this store are resolved against.
    fn base_dir(&self) -> Option<&Path> {
        None
    }

    /// Whether `key` is present.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Resolve `key` as `T`, falling back to `default`.
    ///
    /// The default is substituted both when the key is absent and when the
    /// stored value cannot be read as `T`.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(value) = self.get(key) else {
            debug!(key, "parameter not set, using default");
            return default;
        };

        match serde_yaml::from_value(value.clone()) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(key, error = %e, "parameter has incompatible type, using default");
                default
            }
        }
    }

    /// Resolve a path parameter, anchoring relative paths at [`Self::base_dir`].
    fn load_path(&self, key: &str, default: &str) -> PathBuf {
        let path: PathBuf = self.load(key, PathBuf::from(default));
        match self.base_dir() {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }
}

/// Parameter store backed by a flat YAML document.
#[derive(Debug, Clone, Default)]
pub struct YamlParameterStore {
    values: Mapping,
    base_dir: Option<PathBuf>,
}

impl YamlParameterStore {
    /// Empty store; every lookup resolves to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a parameter file.
    ///
    /// Relative paths inside the file resolve against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - The document is not a flat mapping
    pub fn from_file<P: AsRef<Path>>(path: P) -> ParamResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut store = Self::from_yaml(&content)?;
        store.base_dir = path.parent().map(Path::to_path_buf);
        Ok(store)
    }

    /// Parse a parameter store from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing fails, the top level is not a mapping, a key
    /// is not a string, or a value is itself a mapping.
    pub fn from_yaml(yaml: &str) -> ParamResult<Self> {
        if yaml
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'))
        {
            return Ok(Self::default());
        }

        let document: Value = serde_yaml::from_str(yaml)?;
        let values = match document {
            Value::Null => Mapping::new(),
            Value::Mapping(map) => map,
            _ => return Err(ParamError::config("parameter file must be a key/value mapping")),
        };

        // Poka-Yoke: flat keys only
        for (key, value) in &values {
            let Some(name) = key.as_str() else {
                return Err(ParamError::config(format!(
                    "parameter keys must be strings, got {key:?}"
                )));
            };
            if value.is_mapping() {
                return Err(ParamError::config(format!(
                    "parameter '{name}' is a nested mapping; only scalar and sequence values are supported"
                )));
            }
        }

        Ok(Self {
            values,
            base_dir: None,
        })
    }

    /// Set the directory relative paths resolve against.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(Value::from(key), value.into());
    }

    /// Number of parameters set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParameterStore for YamlParameterStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec3;

    #[test]
    fn test_load_missing_key_uses_default() {
        let store = YamlParameterStore::new();
        assert!(store.is_empty());
        assert!((store.load::<f64>("scalar_mass", 0.1) - 0.1).abs() < f64::EPSILON);
        assert_eq!(store.load("kerr_center", Vec3::splat(2.0)), Vec3::splat(2.0));
    }

    #[test]
    fn test_load_present_values() {
        let store = YamlParameterStore::from_yaml(
            "scalar_mass: 0.5\nN_full: 32\nkerr_center: [1.0, 2.0, 3.0]\ninitial_f: [0.1, 0.2]\n",
        )
        .unwrap();

        assert_eq!(store.len(), 4);
        assert!((store.load::<f64>("scalar_mass", 0.1) - 0.5).abs() < f64::EPSILON);
        assert_eq!(store.load("N_full", 0_usize), 32);
        assert_eq!(store.load("kerr_center", Vec3::default()), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(store.load("initial_f", Vec::<f64>::new()), vec![0.1, 0.2]);
    }

    #[test]
    fn test_load_integer_as_float() {
        let store = YamlParameterStore::from_yaml("kerr_mass: 2").unwrap();
        assert!((store.load::<f64>("kerr_mass", 1.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_type_mismatch_uses_default() {
        let store = YamlParameterStore::from_yaml(
            "scalar_mass: heavy\nkerr_center: [1.0, 2.0]\nN_full: -4\n",
        )
        .unwrap();

        assert!((store.load::<f64>("scalar_mass", 0.1) - 0.1).abs() < f64::EPSILON);
        assert_eq!(store.load("kerr_center", Vec3::splat(4.0)), Vec3::splat(4.0));
        assert_eq!(store.load("N_full", 64_usize), 64);
    }

    #[test]
    fn test_empty_document_is_empty_store() {
        assert!(YamlParameterStore::from_yaml("").unwrap().is_empty());
        assert!(YamlParameterStore::from_yaml("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_nested_mapping() {
        let err = YamlParameterStore::from_yaml("kerr:\n  mass: 1.0\n").unwrap_err();
        assert!(err.to_string().contains("nested mapping"));
    }

    #[test]
    fn test_rejects_non_mapping_document() {
        assert!(YamlParameterStore::from_yaml("- 1.0\n- 2.0\n").is_err());
        assert!(YamlParameterStore::from_yaml("42").is_err());
    }

    #[test]
    fn test_rejects_non_string_key() {
        let err = YamlParameterStore::from_yaml("1: 2.0\n").unwrap_err();
        assert!(err.to_string().contains("keys must be strings"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = YamlParameterStore::from_yaml("scalar_mass: [1.0\n").unwrap_err();
        assert!(matches!(err, ParamError::YamlParse(_)));
    }

    #[test]
    fn test_insert_and_contains() {
        let mut store = YamlParameterStore::new();
        assert!(!store.contains("kerr_spin"));
        store.insert("kerr_spin", 0.3);
        assert!(store.contains("kerr_spin"));
        assert!((store.load::<f64>("kerr_spin", 0.0) - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_path_relative_to_base_dir() {
        let store = YamlParameterStore::from_yaml("initial_f_file: data/f.txt\n")
            .unwrap()
            .with_base_dir("/runs/kerr");

        assert_eq!(
            store.load_path("initial_f_file", "unused.txt"),
            PathBuf::from("/runs/kerr/data/f.txt")
        );
        assert_eq!(
            store.load_path("initial_r_file", "r.txt"),
            PathBuf::from("/runs/kerr/r.txt")
        );
    }

    #[test]
    fn test_load_path_absolute_untouched() {
        let store = YamlParameterStore::from_yaml("initial_f_file: /abs/f.txt\n")
            .unwrap()
            .with_base_dir("/runs/kerr");
        assert_eq!(
            store.load_path("initial_f_file", "f.txt"),
            PathBuf::from("/abs/f.txt")
        );
    }

    #[test]
    fn test_load_path_without_base_dir() {
        let store = YamlParameterStore::new();
        assert_eq!(store.load_path("initial_f_file", "f.txt"), PathBuf::from("f.txt"));
    }

    #[test]
    fn test_load_from_file_sets_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.yaml");
        std::fs::write(&path, "scalar_width: 4.0\n").unwrap();

        let store = YamlParameterStore::from_file(&path).unwrap();
        assert_eq!(store.base_dir(), Some(dir.path()));
        assert!((store.load::<f64>("scalar_width", 1.0) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let err = YamlParameterStore::from_file("/nonexistent/params.yaml").unwrap_err();
        assert!(matches!(err, ParamError::Io(_)));
    }
}
