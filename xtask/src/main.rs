// Licensed under the Apache-2.0 license

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use ngc_codes_generator::DialectKind;
use simple_logger::SimpleLogger;
use std::path::{Path, PathBuf};

mod codes_gen;

#[derive(Parser)]
#[command(name = "xtask", about = "Code generation tasks", version)]
struct Xtask {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    xtask: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the G-code/M-code enum headers
    CodesGen {
        /// Only generate this catalog (gcode, mcode)
        #[arg(long)]
        catalog: Option<String>,

        /// Override the catalog's default dialect
        #[arg(long, value_enum)]
        dialect: Option<DialectArg>,

        /// Print the headers instead of writing them
        #[arg(long, conflicts_with = "check")]
        stdout: bool,

        /// Fail if a committed header differs from the generated one
        #[arg(long)]
        check: bool,

        /// Output directory (defaults to codes/generated/include)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    /// `#pragma once`, `std::uint8_t` enums, abort on invalid values
    Abort,
    /// Include guard, default enums, throw on invalid values
    Exception,
}

impl From<DialectArg> for DialectKind {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Abort => DialectKind::Abort,
            DialectArg::Exception => DialectKind::Exception,
        }
    }
}

/// Root of the workspace this xtask belongs to.
pub(crate) fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    let cli = Xtask::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = SimpleLogger::new().with_level(level).env().init();

    let result = match cli.xtask {
        Commands::CodesGen {
            catalog,
            dialect,
            stdout,
            check,
            out_dir,
        } => codes_gen::generate(&codes_gen::Options {
            catalog,
            dialect: dialect.map(DialectKind::from),
            stdout,
            check,
            out_dir: out_dir.unwrap_or_else(codes_gen::default_out_dir),
        }),
    };
    result.unwrap_or_else(|e| {
        eprintln!("{e:#}");
        std::process::exit(1);
    });
}
