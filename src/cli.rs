use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use crate::manifest::{DEFAULT_MANIFEST_NAME, ManifestReader};
use crate::query::{Answer, answer_all};

/// Exit status for missing or malformed arguments.
pub const USAGE_EXIT_CODE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "blext-meta")]
#[command(about = "Reads a Blender extension manifest and answers packaging queries")]
#[command(version)]
pub struct Cli {
    /// Extension source directory containing the manifest
    pub path: PathBuf,

    /// Queries to answer, in order: id, version, zipglob, zipname.
    /// Everything after the path is a query; unknown names are skipped
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub queries: Vec<OsString>,

    /// Manifest file name inside the source directory (must precede the path)
    #[arg(long, default_value = DEFAULT_MANIFEST_NAME)]
    pub manifest_name: String,

    /// Print answers as a JSON array instead of one per line (must precede the path)
    #[arg(long)]
    pub json: bool,
}

pub fn run_cli() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            e.print().ok();
            std::process::exit(USAGE_EXIT_CODE);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

/// Reads the manifest and writes every answer to `out`.
///
/// Nothing is written unless the manifest was read successfully.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let reader = ManifestReader::new().manifest_name(cli.manifest_name.as_str());
    let record = reader.read_manifest(&cli.path)?;

    let answers = answer_all(&record, cli.queries.as_slice());
    let rendered = if cli.json {
        render_json(&answers)?
    } else {
        render_lines(&answers)
    };

    out.write_all(rendered.as_bytes())
        .context("Failed to write answers to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn render_lines(answers: &[Answer]) -> String {
    answers
        .iter()
        .map(|answer| format!("{}\n", answer.value))
        .collect()
}

fn render_json(answers: &[Answer]) -> Result<String> {
    let json = serde_json::to_string_pretty(answers)
        .context("Failed to serialize answers to JSON")?;
    Ok(format!("{}\n", json))
}
