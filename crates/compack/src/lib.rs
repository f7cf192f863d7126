//! compack - Package a source component as an npm-style package
//!
//! "Write the component once. Let the tool make it a package."
//!
//! compack exists because turning a working component into a publishable
//! package is tedious: directory layout, export indexes, README, manifest.
//! Every package needs the same moves, and doing them by hand introduces
//! drift between packages.
//!
//! compack is deliberately textual. It copies files, line-scans module files
//! for exported names, and fills placeholder tokens in boilerplate. It is not
//! a build system, not a module resolver, and not a compiler front-end.

pub mod boilerplate;
pub mod error;
pub mod prompt;
pub mod request;
pub mod scaffold;
pub mod scanner;
pub mod template;

pub use boilerplate::BoilerplateStore;
pub use error::ScaffoldError;
pub use request::ScaffoldRequest;
pub use scaffold::{ScaffoldSummary, Scaffolder};
pub use scanner::{ExportKind, ExportRecord, ExportScan};
pub use template::TemplateValues;
