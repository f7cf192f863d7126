//! compack - package a source component as an npm-style package
//!
//! Prompts for a component directory and package coordinates (or takes a
//! fixed preset with `-d`/`--debug`), then scaffolds `<target>/<package>`
//! with the src/tests layout, generated export indexes, and filled-in
//! boilerplate.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use compack::{prompt, BoilerplateStore, ScaffoldRequest, Scaffolder};

#[derive(Parser)]
#[command(name = "compack")]
#[command(about = "Package a source component as an npm-style package")]
#[command(version)]
#[command(after_help = r#"PLACEHOLDER TOKENS:
    Boilerplate README.md and package.json may contain:
    <package-name>      Package name
    <package-version>   Initial version
    <dev-name>          Author name
    <dev-email>         Author email
    <current-year>      Current year

FILE ROUTING:
    *.spec.ts / *.spec.js       copied to tests/
    everything else             copied to src/
    *.module.ts / *.module.js   also aggregated into the export indexes

EXAMPLES:
    compack                     # interactive prompts
    compack -d                  # fixed debug inputs, no prompts
    compack --boilerplate-dir ./my-boilerplate
"#)]
struct Cli {
    /// Use the fixed debug input set instead of interactive prompts
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Directory holding the boilerplate files (overrides resolution)
    #[arg(long, value_name = "PATH")]
    boilerplate_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let request = if cli.debug {
        let preset = ScaffoldRequest::debug_preset();
        println!("{}", serde_json::to_string_pretty(&preset)?);
        preset
    } else {
        prompt::collect_request()?
    };

    let store = match cli.boilerplate_dir {
        Some(dir) => BoilerplateStore::with_dir(dir),
        None => BoilerplateStore::resolve(),
    };
    tracing::debug!(boilerplate_dir = %store.dir().display(), "resolved boilerplate");

    println!("info: Creating package: {}", request.package_name);

    let summary = Scaffolder::new(&request, &store)
        .run()
        .with_context(|| format!("Failed to scaffold package: {}", request.package_name))?;

    println!("success: Package created: {}", summary.package_root.display());
    println!(
        "  {} files copied, {} module files, {} exported names",
        summary.files_copied, summary.module_files, summary.exports
    );
    println!();
    println!("Next steps:");
    println!("  cd {}", summary.package_root.display());
    println!("  npm install");

    Ok(())
}
