//! Interactive collection of a scaffold request
//!
//! Each field is asked for on stdin, validated, and re-asked on mismatch with
//! a field-specific message. Only the version field has a default, taken on
//! an empty answer. A closed input stream is fatal.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use regex::Regex;

use crate::request::{ScaffoldRequest, DEFAULT_VERSION};

/// One prompted field: what to print, how to validate, what to say on a miss
struct Query {
    description: &'static str,
    message: &'static str,
    default: Option<&'static str>,
    validate: fn(&str) -> bool,
}

const COMPONENT_DIR: Query = Query {
    description: "Directory location of your component",
    message: "Invalid directory name, please try again",
    default: None,
    validate: valid_dir_name,
};

const TARGET_DIR: Query = Query {
    description: "Target directory for output",
    message: "Invalid directory name, please try again",
    default: None,
    validate: valid_dir_name,
};

const PACKAGE_NAME: Query = Query {
    description: "Name of your package",
    message: "Invalid package name, please try again",
    default: None,
    validate: valid_package_name,
};

const DEV_NAME: Query = Query {
    description: "Your name",
    message: "Letters and spaces only, please",
    default: None,
    validate: valid_dev_name,
};

const DEV_EMAIL: Query = Query {
    description: "Your email",
    message: "Invalid email, please try again",
    default: None,
    validate: valid_email,
};

const VERSION: Query = Query {
    description: "Initial component version (semver)",
    message: "Semver versioning requires 3 numbers separated by dots: 0.1.0",
    default: Some(DEFAULT_VERSION),
    validate: valid_version,
};

/// Plain name with no path separators, wildcards, or dots
pub fn valid_dir_name(input: &str) -> bool {
    Regex::new(r#"^[^\\/?%*:|"<>.]+$"#).unwrap().is_match(input)
}

/// npm package name rule: no leading dot, not `node_modules`, and none of
/// `@`, whitespace, `+`, `%` anywhere
pub fn valid_package_name(input: &str) -> bool {
    !input.starts_with('.')
        && input != "node_modules"
        && Regex::new(r"^[^@\s+%]+$").unwrap().is_match(input)
}

/// Letters and single spaces between words
pub fn valid_dev_name(input: &str) -> bool {
    Regex::new(r"^[A-Za-z]+( +[A-Za-z]+)*$").unwrap().is_match(input)
}

pub fn valid_email(input: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .unwrap()
        .is_match(input)
}

/// Three dot-separated numbers, nothing else
pub fn valid_version(input: &str) -> bool {
    Regex::new(r"^\d+\.\d+\.\d+$").unwrap().is_match(input)
}

/// Ask every query in order and assemble the request
pub fn collect_request() -> Result<ScaffoldRequest> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    Ok(ScaffoldRequest {
        component_dir: ask(&mut input, &COMPONENT_DIR)?,
        target_dir: ask(&mut input, &TARGET_DIR)?,
        package_name: ask(&mut input, &PACKAGE_NAME)?,
        dev_name: ask(&mut input, &DEV_NAME)?,
        dev_email: ask(&mut input, &DEV_EMAIL)?,
        version: ask(&mut input, &VERSION)?,
    })
}

/// Ask one query until a valid answer (or an accepted default) comes back
fn ask(input: &mut impl BufRead, query: &Query) -> Result<String> {
    loop {
        match query.default {
            Some(default) => print!("{} [{}]: ", query.description, default),
            None => print!("{}: ", query.description),
        }
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input stream closed while prompting for: {}", query.description);
        }

        let answer = line.trim();
        if answer.is_empty() {
            if let Some(default) = query.default {
                return Ok(default.to_string());
            }
        } else if (query.validate)(answer) {
            return Ok(answer.to_string());
        }

        println!("{}", query.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_name_validation() {
        assert!(valid_dir_name("component"));
        assert!(valid_dir_name("my-component"));
        assert!(!valid_dir_name("a/b"));
        assert!(!valid_dir_name("a\\b"));
        assert!(!valid_dir_name("dotted.dir"));
        assert!(!valid_dir_name(""));
    }

    #[test]
    fn test_package_name_validation() {
        assert!(valid_package_name("my-package"));
        assert!(valid_package_name("pkg_1"));
        assert!(!valid_package_name(".hidden"));
        assert!(!valid_package_name("node_modules"));
        assert!(!valid_package_name("@scope/pkg"));
        assert!(!valid_package_name("has space"));
        assert!(!valid_package_name("a+b"));
        assert!(!valid_package_name("a%b"));
    }

    #[test]
    fn test_dev_name_validation() {
        assert!(valid_dev_name("Ann"));
        assert!(valid_dev_name("Ann B Smith"));
        assert!(!valid_dev_name("Ann2"));
        assert!(!valid_dev_name(" Ann"));
        assert!(!valid_dev_name(""));
    }

    #[test]
    fn test_email_validation() {
        assert!(valid_email("ann@example.com"));
        assert!(valid_email("a.b+tag@sub.example.co"));
        assert!(!valid_email("ann@example"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("@example.com"));
    }

    #[test]
    fn test_version_validation() {
        assert!(valid_version("0.1.0"));
        assert!(valid_version("12.34.56"));
        assert!(!valid_version("1.2"));
        assert!(!valid_version("v1.2.3"));
        assert!(!valid_version("1.2.3-beta"));
    }

    #[test]
    fn test_ask_retries_then_accepts() {
        let mut input = io::Cursor::new(b"bad name!\n1.2.3\n".to_vec());
        let answer = ask(&mut input, &VERSION).unwrap();

        assert_eq!(answer, "1.2.3");
    }

    #[test]
    fn test_ask_empty_takes_default() {
        let mut input = io::Cursor::new(b"\n".to_vec());
        let answer = ask(&mut input, &VERSION).unwrap();

        assert_eq!(answer, DEFAULT_VERSION);
    }

    #[test]
    fn test_ask_eof_is_fatal() {
        let mut input = io::Cursor::new(Vec::new());

        assert!(ask(&mut input, &VERSION).is_err());
    }
}
