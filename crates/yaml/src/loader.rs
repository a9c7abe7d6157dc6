//! YAML file loader

use crate::node::Node;
use crate::options::LoaderOptions;
use crate::value::YamlValue;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};
use types::{ConfigError, FileSet, Loader, Result, Value};

/// Name this loader registers under
pub const NAME: &str = "yaml";

/// Paths handled by this loader
pub const PATH_PATTERN: &str = r"^.*\.(yaml|yml)$";

static PATH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PATH_PATTERN).expect("YAML path pattern is a valid regex"));

/// Loader for single YAML files
#[derive(Debug, Clone, Default)]
pub struct YamlLoader {
    options: LoaderOptions,
}

impl YamlLoader {
    /// Create a loader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with explicit options
    pub fn with_options(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Load `path` from `files`, keeping the concrete value type
    pub fn load_value(&self, path: &str, files: &FileSet) -> Result<YamlValue> {
        let content = files.get(path).ok_or_else(|| ConfigError::PathNotFound {
            path: path.to_string(),
        })?;

        if let Some(limit) = self.options.max_document_bytes {
            if content.len() > limit {
                warn!(path = %path, size = content.len(), limit = limit, "YAML document exceeds size limit");
                return Err(ConfigError::TooLarge {
                    path: path.to_string(),
                    size: content.len(),
                    limit,
                });
            }
        }

        debug!(path = %path, bytes = content.len(), "Loading YAML document");

        let node = Node::parse(content).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            source: Box::new(e),
        })?;

        debug!(path = %path, kind = %node.kind(), "Parsed YAML document");
        Ok(YamlValue::with_key_order(node, self.options.key_order))
    }
}

impl Loader for YamlLoader {
    fn type_name(&self) -> &'static str {
        NAME
    }

    fn path_pattern(&self) -> &Regex {
        &PATH_REGEX
    }

    fn allow_dir(&self) -> bool {
        false
    }

    fn load(&self, path: &str, files: &FileSet) -> Result<Box<dyn Value>> {
        Ok(Box::new(self.load_value(path, files)?))
    }

    fn clear(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::KeyOrder;
    use types::{Entries, Kind};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn files(entries: &[(&str, &str)]) -> FileSet {
        entries.iter().map(|(path, content)| (*path, *content)).collect()
    }

    #[test]
    fn test_loader_identity() {
        let loader = YamlLoader::new();
        assert_eq!(loader.type_name(), "yaml");
        assert!(!loader.allow_dir());
        loader.clear();
    }

    #[test]
    fn test_path_pattern() {
        let loader = YamlLoader::new();
        assert!(loader.accepts("config.yaml"));
        assert!(loader.accepts("conf/app.yml"));
        assert!(!loader.accepts("config.YAML"));
        assert!(!loader.accepts("config.json"));
        assert!(!loader.accepts("config.yaml.bak"));
        assert!(!loader.accepts("yaml"));
    }

    #[test]
    fn test_load_sample_document() {
        init_tracing();
        let files = files(&[("app.yaml", "a: 1\nb: [2,3]\nc: {d: 4}\n")]);
        let root = YamlLoader::new().load("app.yaml", &files).unwrap();

        assert_eq!(root.kind(), Kind::Struct);
        let b = root.lookup(&["b"]).unwrap();
        let items: Vec<(String, i64)> = Entries::new(b.list().unwrap())
            .map(|(label, value)| (label, value.int64().unwrap()))
            .collect();
        assert_eq!(items, vec![("0".to_string(), 2), ("1".to_string(), 3)]);
        assert_eq!(root.lookup(&["c", "d"]).unwrap().int64().unwrap(), 4);
        assert!(root.lookup(&["z"]).is_none());
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let files = files(&[("app.yaml", "a: 1\n")]);
        let err = YamlLoader::new().load("other.yaml", &files).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "path not found (path: other.yaml)");

        let err = YamlLoader::new().load("broken.yaml", &FileSet::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        init_tracing();
        let files = files(&[
            ("indent.yaml", "a: 1\n  b: 2\n"),
            ("flow.yaml", "key: [unclosed\n"),
            ("dupe.yaml", "1: int\n\"1\": str\n"),
        ]);
        for path in ["indent.yaml", "flow.yaml", "dupe.yaml"] {
            let err = YamlLoader::new().load(path, &files).unwrap_err();
            assert!(matches!(err, ConfigError::Parse { .. }), "{path}: {err}");
            assert!(err.to_string().ends_with(&format!("(path: {path})")));
        }
    }

    #[test]
    fn test_stream_loads_first_document() {
        let files = files(&[
            ("trailing.yaml", "a: 1\n---\n"),
            ("multi.yaml", "a: 1\n---\nb: 2\n"),
        ]);
        for path in ["trailing.yaml", "multi.yaml"] {
            let root = YamlLoader::new().load(path, &files).unwrap();
            assert_eq!(root.lookup(&["a"]).unwrap().int64().unwrap(), 1, "{path}");
            assert!(root.lookup(&["b"]).is_none(), "{path}");
        }
    }

    #[test]
    fn test_size_limit() {
        let files = files(&[("big.yaml", "key: a fairly long value\n")]);
        let loader = YamlLoader::with_options(LoaderOptions::default().with_max_document_bytes(8));
        let err = loader.load("big.yaml", &files).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge { limit: 8, .. }));

        let loader = YamlLoader::with_options(LoaderOptions::default().with_max_document_bytes(1024));
        assert!(loader.load("big.yaml", &files).is_ok());
    }

    #[test]
    fn test_options_key_order_applies() {
        let files = files(&[("order.yml", "b: 1\nc: 2\na: 3\n")]);
        let loader = YamlLoader::with_options(LoaderOptions::default().with_key_order(KeyOrder::Sorted));
        let root = loader.load("order.yml", &files).unwrap();
        let labels: Vec<String> = Entries::new(root.structure().unwrap())
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_file_is_null() {
        let files = files(&[("empty.yaml", "")]);
        let root = YamlLoader::new().load("empty.yaml", &files).unwrap();
        assert_eq!(root.kind(), Kind::Null);
    }

    #[test]
    fn test_marshal_then_reload_is_equivalent() {
        let files = files(&[(
            "app.yaml",
            "server:\n  host: localhost\n  ports: [80, 443]\nratio: 0.5\nflags: {debug: false}\n",
        )]);
        let loader = YamlLoader::new();
        let root = loader.load("app.yaml", &files).unwrap();

        let mut reloaded = FileSet::new();
        reloaded.insert("copy.yaml", root.marshal().unwrap());
        let copy = loader.load("copy.yaml", &reloaded).unwrap();
        assert_eq!(copy.interface().unwrap(), root.interface().unwrap());
    }
}
