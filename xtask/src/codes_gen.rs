// Licensed under the Apache-2.0 license

//! Generate the C++ code enum headers from the shipped catalogs.
//!
//! Every header is rendered before anything is written, so a catalog error
//! leaves the output directory untouched.

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use ngc_codes_generator::catalog::{self, Catalog, ALL_CATALOGS};
use ngc_codes_generator::output::GENERATED_BANNER;
use ngc_codes_generator::{generate_header_with_dialect, DialectKind};
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) struct Options {
    /// Restrict generation to one catalog.
    pub catalog: Option<String>,
    /// Dialect override; `None` uses each catalog's default.
    pub dialect: Option<DialectKind>,
    pub stdout: bool,
    pub check: bool,
    pub out_dir: PathBuf,
}

pub(crate) fn default_out_dir() -> PathBuf {
    crate::project_root()
        .join("codes")
        .join("generated")
        .join("include")
}

/// A rendered header, without the banner.
struct Rendered {
    catalog: &'static Catalog,
    code: String,
}

impl Rendered {
    /// Contents of the committed file.
    fn file_text(&self) -> String {
        format!("{GENERATED_BANNER}{}", self.code)
    }
}

pub(crate) fn generate(options: &Options) -> Result<()> {
    let rendered = render_all(options)?;

    if options.stdout {
        print!("{}", stdout_text(&rendered));
        return Ok(());
    }

    if options.check {
        check_headers(&options.out_dir, &rendered)
    } else {
        write_headers(&options.out_dir, &rendered)
    }
}

/// Bare headers, back to back, as printed by `--stdout`.
fn stdout_text(rendered: &[Rendered]) -> String {
    rendered.iter().map(|header| header.code.as_str()).collect()
}

fn selected_catalogs(name: Option<&str>) -> Result<Vec<&'static Catalog>> {
    match name {
        Some(name) => {
            let catalog = catalog::find(name).ok_or_else(|| {
                let known: Vec<&str> = ALL_CATALOGS.iter().map(|c| c.name).collect();
                anyhow!("unknown catalog {name:?} (expected one of {known:?})")
            })?;
            Ok(vec![catalog])
        }
        None => Ok(ALL_CATALOGS.iter().collect()),
    }
}

fn render_all(options: &Options) -> Result<Vec<Rendered>> {
    let mut rendered = Vec::new();
    for catalog in selected_catalogs(options.catalog.as_deref())? {
        let kind = options.dialect.unwrap_or(catalog.default_dialect);
        debug!("rendering {} with {:?} dialect", catalog.name, kind);
        let code = generate_header_with_dialect(catalog, &kind.dialect())
            .with_context(|| format!("Failed to generate {}", catalog.file_name))?;
        rendered.push(Rendered { catalog, code });
    }
    Ok(rendered)
}

fn write_headers(dest_dir: &Path, rendered: &[Rendered]) -> Result<()> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

    for header in rendered {
        let path = dest_dir.join(header.catalog.file_name);
        let content = header.file_text();
        if fs::read_to_string(&path).ok().as_deref() == Some(content.as_str()) {
            println!("  ✓ {} is up to date", header.catalog.file_name);
            continue;
        }
        fs::write(&path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "  ✓ Generated {} ({} bytes)",
            header.catalog.file_name,
            content.len()
        );
    }
    Ok(())
}

fn check_headers(dest_dir: &Path, rendered: &[Rendered]) -> Result<()> {
    let mut stale = Vec::new();
    for header in rendered {
        let path = dest_dir.join(header.catalog.file_name);
        match fs::read_to_string(&path) {
            Ok(existing) if existing == header.file_text() => {
                println!("  ✓ {} is up to date", header.catalog.file_name);
            }
            Ok(_) => stale.push(header.catalog.file_name),
            Err(e) => {
                debug!("cannot read {}: {e}", path.display());
                stale.push(header.catalog.file_name);
            }
        }
    }

    if !stale.is_empty() {
        for file_name in &stale {
            println!("  ✗ {file_name} is out of date");
        }
        bail!(
            "{} generated header(s) out of date; run `cargo xtask codes-gen`",
            stale.len()
        );
    }
    Ok(())
}
