//! Loader interface implemented by each format adapter

use crate::{FileSet, Result, Value};
use regex::Regex;

/// Format adapter registered with the host
pub trait Loader: Send + Sync {
    /// Short name identifying the format, e.g. `"yaml"`
    fn type_name(&self) -> &'static str;

    /// Pattern matched against candidate paths
    fn path_pattern(&self) -> &Regex;

    /// Whether this loader accepts directories as well as single files
    fn allow_dir(&self) -> bool;

    /// Load `path` from `files` into a root value
    fn load(&self, path: &str, files: &FileSet) -> Result<Box<dyn Value>>;

    /// Release any cached state held by the loader
    fn clear(&self);

    /// Returns true if `path` should be handled by this loader
    fn accepts(&self, path: &str) -> bool {
        self.path_pattern().is_match(path)
    }
}
