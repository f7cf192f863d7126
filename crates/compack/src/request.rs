//! One run's immutable input set

use serde::Serialize;

/// Version offered when the prompt is answered with an empty line
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Everything a scaffolding run needs, collected up front.
///
/// Built once from the prompts (or the debug preset) and never mutated for
/// the duration of the run. Serializes so debug mode can echo the collected
/// inputs as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldRequest {
    /// Directory holding the component source files
    pub component_dir: String,
    /// Directory the package directory is created under
    pub target_dir: String,
    /// npm-style package name
    pub package_name: String,
    /// Author name
    pub dev_name: String,
    /// Author email
    pub dev_email: String,
    /// Initial semver version string
    pub version: String,
}

impl ScaffoldRequest {
    /// Fixed input set used by `-d`/`--debug` instead of prompting
    pub fn debug_preset() -> Self {
        Self {
            component_dir: "component".to_string(),
            target_dir: "dist".to_string(),
            package_name: "debug-package".to_string(),
            dev_name: "Debug User".to_string(),
            dev_email: "debug@example.com".to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}
