//! Scaffolding orchestration: one request in, one package directory out
//!
//! Steps, in order: create the package layout, route component files into
//! `src/` and `tests/`, fold the generated export indexes, copy boilerplate,
//! fill placeholders. The first failure aborts the run; files already created
//! are left behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::boilerplate::{BoilerplateStore, TEMPLATED_FILES};
use crate::error::ScaffoldError;
use crate::request::ScaffoldRequest;
use crate::scanner::ExportScan;
use crate::template::TemplateValues;

/// What a finished run produced, for the success report
#[derive(Debug)]
pub struct ScaffoldSummary {
    pub package_root: PathBuf,
    pub files_copied: usize,
    pub module_files: usize,
    pub exports: usize,
}

/// Drives one scaffolding run
pub struct Scaffolder<'a> {
    request: &'a ScaffoldRequest,
    store: &'a BoilerplateStore,
}

impl<'a> Scaffolder<'a> {
    pub fn new(request: &'a ScaffoldRequest, store: &'a BoilerplateStore) -> Self {
        Self { request, store }
    }

    pub fn run(&self) -> Result<ScaffoldSummary, ScaffoldError> {
        let target_dir = Path::new(&self.request.target_dir);
        let package_root = target_dir.join(&self.request.package_name);
        let src_dir = package_root.join("src");
        let tests_dir = package_root.join("tests");

        // The target dir may pre-exist; the package dir and its children must
        // not. Existing package dirs are fatal, never merged into.
        if !target_dir.exists() {
            fs::create_dir_all(target_dir).map_err(|source| ScaffoldError::CreateDir {
                path: target_dir.to_path_buf(),
                source,
            })?;
        }
        create_new_dir(&package_root)?;
        create_new_dir(&src_dir)?;
        create_new_dir(&tests_dir)?;

        tracing::debug!(package_root = %package_root.display(), "created package layout");

        let (files_copied, module_files) = self.copy_component_files(&src_dir, &tests_dir)?;
        let exports = self.write_indexes(&package_root, &src_dir, &module_files)?;

        self.store.copy_into(&package_root)?;

        let values = TemplateValues::from_request(self.request);
        for name in TEMPLATED_FILES {
            values.fill_file(&package_root.join(name))?;
        }

        Ok(ScaffoldSummary {
            package_root,
            files_copied,
            module_files: module_files.len(),
            exports,
        })
    }

    /// Copy every file directly under the component dir, spec files to
    /// `tests/`, everything else to `src/`. Returns the copy count and the
    /// module file names in sorted order.
    fn copy_component_files(
        &self,
        src_dir: &Path,
        tests_dir: &Path,
    ) -> Result<(usize, Vec<String>), ScaffoldError> {
        let component_dir = Path::new(&self.request.component_dir);

        let mut entries: Vec<_> = fs::read_dir(component_dir)
            .map_err(|source| ScaffoldError::Read {
                path: component_dir.to_path_buf(),
                source,
            })?
            .filter_map(|entry| entry.ok())
            .collect();

        // Sorted processing keeps the generated indexes deterministic
        entries.sort_by_key(|entry| entry.file_name());

        let mut copied = 0;
        let mut module_files = Vec::new();

        for entry in entries {
            let from = entry.path();
            if !from.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let to = if is_spec_file(&name) {
                tests_dir.join(&name)
            } else {
                src_dir.join(&name)
            };

            fs::copy(&from, &to).map_err(|source| ScaffoldError::Copy {
                from: from.clone(),
                to,
                source,
            })?;
            copied += 1;

            if is_module_file(&name) {
                module_files.push(name);
            }
        }

        Ok((copied, module_files))
    }

    /// Fold both generated indexes in memory, then write each once.
    ///
    /// Collect-then-write-once means no shared file is ever append-targeted
    /// by more than one in-flight operation, so index lines cannot interleave
    /// or go missing. Returns the number of re-exported names.
    fn write_indexes(
        &self,
        package_root: &Path,
        src_dir: &Path,
        module_files: &[String],
    ) -> Result<usize, ScaffoldError> {
        let mut aggregation = String::new();
        let mut runtime = String::new();
        let mut exports = 0;

        for name in module_files {
            aggregation.push_str(&format!("export * from './{}';\n", name));

            for record in ExportScan::open(&src_dir.join(name))? {
                let record = record?;
                tracing::debug!(module = %name, export = %record.name, kind = ?record.kind, "discovered export");
                runtime.push_str(&format!(
                    "exports.{} = require('./src/{}').{};\n",
                    record.name, name, record.name
                ));
                exports += 1;
            }
        }

        write_file(&src_dir.join("index.ts"), &aggregation)?;
        write_file(&package_root.join("index.js"), &runtime)?;

        Ok(exports)
    }
}

/// Spec files are routed to `tests/` instead of `src/`
pub fn is_spec_file(name: &str) -> bool {
    name.ends_with(".spec.ts") || name.ends_with(".spec.js")
}

/// Module files are aggregated into the package's export surface.
/// `a.module.spec.ts` is a spec file, not a module file.
pub fn is_module_file(name: &str) -> bool {
    name.ends_with(".module.ts") || name.ends_with(".module.js")
}

/// `create_dir`, with an already-existing directory reported as its own error
fn create_new_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            ScaffoldError::DirExists(path.to_path_buf())
        } else {
            ScaffoldError::CreateDir {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    fs::write(path, content).map_err(|source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    })
}
