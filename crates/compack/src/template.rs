//! Placeholder substitution for boilerplate files
//!
//! Replacement is literal substring substitution, never regex: a token such
//! as `<package-name>` is matched byte-for-byte, so regex metacharacters in
//! tokens or values cannot misfire. Tokens are applied in insertion order.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::error::ScaffoldError;
use crate::request::ScaffoldRequest;

/// Ordered placeholder -> value mapping, derived once per run.
///
/// The mapping is threaded through the scaffolding call chain as an explicit
/// parameter; nothing about it is global.
#[derive(Debug, Clone, Default)]
pub struct TemplateValues {
    pairs: Vec<(String, String)>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the run's mapping from the request
    pub fn from_request(request: &ScaffoldRequest) -> Self {
        let mut values = Self::new();
        values.set("<package-name>", &request.package_name);
        values.set("<package-version>", &request.version);
        values.set("<dev-name>", &request.dev_name);
        values.set("<dev-email>", &request.dev_email);
        values.set("<current-year>", &Local::now().format("%Y").to_string());
        values
    }

    /// Add or update a token. An updated token keeps its original position.
    pub fn set(&mut self, token: &str, value: &str) {
        if let Some(pair) = self.pairs.iter_mut().find(|(t, _)| t == token) {
            pair.1 = value.to_string();
        } else {
            self.pairs.push((token.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every occurrence of each token, in insertion order.
    ///
    /// If a replacement value itself contains a later token, that token gets
    /// rewritten by the later pass. Values here come from validated user
    /// input that cannot contain tokens, so the ordering hazard is documented
    /// rather than resolved.
    pub fn apply(&self, content: &str) -> String {
        let mut out = content.to_string();
        for (token, value) in &self.pairs {
            out = out.replace(token, value);
        }
        out
    }

    /// Read a file, substitute every token, write the result back in place
    pub fn fill_file(&self, path: &Path) -> Result<(), ScaffoldError> {
        let content = fs::read_to_string(path).map_err(|source| ScaffoldError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let filled = self.apply(&content);

        fs::write(path, filled).map_err(|source| ScaffoldError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_apply_basic() {
        let mut values = TemplateValues::new();
        values.set("<package-version>", "0.1.0");
        values.set("<dev-name>", "Ann");

        let out = values.apply("v<package-version> by <dev-name>");
        assert_eq!(out, "v0.1.0 by Ann");
    }

    #[test]
    fn test_apply_is_literal_not_regex() {
        let mut values = TemplateValues::new();
        values.set("<a.b>", "X");

        // A regex engine would let the dot match any character; literal
        // substitution must not.
        let out = values.apply("<a.b> <azb>");
        assert_eq!(out, "X <azb>");
    }

    #[test]
    fn test_apply_replaces_every_occurrence() {
        let mut values = TemplateValues::new();
        values.set("<package-name>", "pkg");

        let out = values.apply("<package-name>/<package-name>");
        assert_eq!(out, "pkg/pkg");
    }

    #[test]
    fn test_apply_follows_insertion_order() {
        // A value containing a later token is rewritten by the later pass.
        // Undefined behavior per the contract; this pins what we do today.
        let mut values = TemplateValues::new();
        values.set("<first>", "<second>");
        values.set("<second>", "two");

        let out = values.apply("<first>");
        assert_eq!(out, "two");
    }

    #[test]
    fn test_from_request_covers_all_tokens() {
        let values = TemplateValues::from_request(&ScaffoldRequest::debug_preset());

        assert_eq!(values.get("<package-name>"), Some("debug-package"));
        assert_eq!(values.get("<package-version>"), Some("0.1.0"));
        assert_eq!(values.get("<dev-name>"), Some("Debug User"));
        assert_eq!(values.get("<dev-email>"), Some("debug@example.com"));
        assert!(values.get("<current-year>").is_some());
    }

    #[test]
    fn test_fill_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "# <package-name>\n").unwrap();

        let mut values = TemplateValues::new();
        values.set("<package-name>", "my-pkg");
        values.fill_file(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# my-pkg\n");
    }
}
