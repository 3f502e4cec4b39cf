use std::fs;
use std::io::Read;

use anyhow::Context;
use plandiff_types::JobDiff;

use crate::cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let document = read_input(cli.input.as_deref())?;
    tracing::debug!(bytes = document.len(), "read diff document");

    let job = JobDiff::from_json(&document).context("failed to parse diff document")?;
    let out = plandiff_render::format(&job, !cli.no_color, cli.verbose);
    print!("{out}");

    Ok(())
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != "-" => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}
