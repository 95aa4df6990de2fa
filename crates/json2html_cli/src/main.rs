/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! json2html CLI
//!
//! Renders a JSON bibliography into one MLA HTML fragment per entry.
//!
//! Usage: json2html [refs.json] [--output-dir content] [--template-dir templates]

mod cli;

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use json2html::{ConvertOptions, Json2Html, Templates};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "json2html=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let file_options = match &cli.config {
        Some(path) => ConvertOptions::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ConvertOptions::load_from_project()?.unwrap_or_default(),
    };
    let options = cli.apply(file_options);

    let converter = if cli.builtin_template {
        Json2Html::with_options(Templates::builtin()?, options)
    } else {
        let dir = options.template_dir.clone();
        Json2Html::from_options(options)
            .with_context(|| format!("loading templates from {}", dir.display()))?
    };

    tracing::debug!(
        style = %converter.options().style,
        output_dir = %converter.options().output_dir.display(),
        "converter ready"
    );

    let input = read_input(&cli)?;
    let output = converter.convert(input)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.as_bytes().is_empty() {
        writeln!(stdout)?;
    }
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    match cli.input_path() {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
