//! Boilerplate file resolution and copying
//!
//! The boilerplate set is fixed: ignore files, a type declaration stub, and
//! the README/package.json pair that later gets placeholder-filled. Files
//! are looked up in one resolved directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// The fixed set of files copied into every package root
pub const BOILERPLATE_FILES: [&str; 5] = [
    ".gitignore",
    ".npmignore",
    "index.d.ts",
    "README.md",
    "package.json",
];

/// Names of the boilerplate files that get placeholder-filled after copying
pub const TEMPLATED_FILES: [&str; 2] = ["README.md", "package.json"];

/// Where the shipped boilerplate files live
pub struct BoilerplateStore {
    dir: PathBuf,
}

impl BoilerplateStore {
    /// Resolve the boilerplate directory.
    ///
    /// Order: `COMPACK_BOILERPLATE_DIR` env var, then a user override under
    /// the platform data dir, then `../share/compack/boilerplate` relative to
    /// the executable, then `./boilerplate`.
    pub fn resolve() -> Self {
        if let Ok(dir) = std::env::var("COMPACK_BOILERPLATE_DIR") {
            return Self {
                dir: PathBuf::from(dir),
            };
        }

        if let Some(data_dir) = dirs::data_dir() {
            let user_dir = data_dir.join("compack").join("boilerplate");
            if user_dir.is_dir() {
                return Self { dir: user_dir };
            }
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(parent) = exe_path.parent() {
                let shared = parent.join("../share/compack/boilerplate");
                if shared.is_dir() {
                    return Self { dir: shared };
                }
            }
        }

        Self {
            dir: PathBuf::from("boilerplate"),
        }
    }

    /// Use a specific directory (tests, `--boilerplate-dir`)
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copy the fixed boilerplate set into the package root
    pub fn copy_into(&self, package_root: &Path) -> Result<(), ScaffoldError> {
        for name in BOILERPLATE_FILES {
            let from = self.dir.join(name);
            if !from.is_file() {
                return Err(ScaffoldError::MissingBoilerplate(from));
            }

            let to = package_root.join(name);
            fs::copy(&from, &to).map_err(|source| ScaffoldError::Copy {
                from: from.clone(),
                to,
                source,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_test_boilerplate(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(".gitignore"), "node_modules/\n").unwrap();
        fs::write(dir.join(".npmignore"), "tests/\n").unwrap();
        fs::write(dir.join("index.d.ts"), "export * from './src/index';\n").unwrap();
        fs::write(dir.join("README.md"), "# <package-name>\nby <dev-name>\n").unwrap();
        fs::write(
            dir.join("package.json"),
            "{\n  \"name\": \"<package-name>\",\n  \"version\": \"<package-version>\"\n}\n",
        )
        .unwrap();
    }

    #[test]
    fn test_copy_into_copies_whole_set() {
        let tmp = tempfile::tempdir().unwrap();
        let boilerplate_dir = tmp.path().join("boilerplate");
        let package_root = tmp.path().join("pkg");
        write_test_boilerplate(&boilerplate_dir);
        fs::create_dir(&package_root).unwrap();

        let store = BoilerplateStore::with_dir(boilerplate_dir);
        store.copy_into(&package_root).unwrap();

        for name in BOILERPLATE_FILES {
            assert!(package_root.join(name).is_file(), "missing {}", name);
        }
    }

    #[test]
    fn test_copy_into_fails_on_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let boilerplate_dir = tmp.path().join("boilerplate");
        let package_root = tmp.path().join("pkg");
        write_test_boilerplate(&boilerplate_dir);
        fs::remove_file(boilerplate_dir.join("README.md")).unwrap();
        fs::create_dir(&package_root).unwrap();

        let store = BoilerplateStore::with_dir(boilerplate_dir);
        let err = store.copy_into(&package_root).unwrap_err();

        assert!(matches!(err, ScaffoldError::MissingBoilerplate(_)));
        assert!(err.to_string().contains("README.md"));
    }
}
