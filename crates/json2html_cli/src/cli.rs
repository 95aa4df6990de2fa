/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::Parser;
use json2html::{ConvertOptions, WriteErrorPolicy};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "json2html")]
#[command(author, version, about = "Render a JSON bibliography as MLA HTML citations")]
pub struct Cli {
    /// JSON input file; reads stdin when absent or `-`
    pub input: Option<PathBuf>,

    /// Options file (TOML); defaults to .json2html.toml or json2html.toml if present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing entry.html
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// Use the bundled MLA entry template instead of a template directory
    #[arg(long, conflicts_with = "template_dir")]
    pub builtin_template: bool,

    /// Directory rendered entries are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Citation style
    #[arg(long)]
    pub style: Option<String>,

    /// Encode non-ASCII output as numeric character references
    #[arg(long)]
    pub encode: bool,

    /// Do not HTML-escape literal text input
    #[arg(long)]
    pub no_escape: bool,

    /// Keep writing remaining entries after a write failure
    #[arg(long)]
    pub keep_going: bool,
}

impl Cli {
    /// The input file, or `None` to read stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| p.as_os_str() != "-")
    }

    /// Apply command-line flags on top of file-based options.
    pub fn apply(&self, mut options: ConvertOptions) -> ConvertOptions {
        if let Some(dir) = &self.template_dir {
            options.template_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            options.output_dir = dir.clone();
        }
        if let Some(style) = &self.style {
            options.style = style.clone();
        }
        if self.encode {
            options.encode = true;
        }
        if self.no_escape {
            options.escape = false;
        }
        if self.keep_going {
            options.on_write_error = WriteErrorPolicy::Continue;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_options() {
        let cli = Cli::try_parse_from([
            "json2html",
            "refs.json",
            "--output-dir",
            "out",
            "--style",
            "APA",
            "--no-escape",
            "--keep-going",
        ])
        .unwrap();
        let options = cli.apply(ConvertOptions::default());

        assert_eq!(options.output_dir, PathBuf::from("out"));
        assert_eq!(options.template_dir, PathBuf::from("templates"));
        assert_eq!(options.style, "APA");
        assert!(!options.escape);
        assert!(!options.encode);
        assert_eq!(options.on_write_error, WriteErrorPolicy::Continue);
        assert_eq!(cli.input_path(), Some(Path::new("refs.json")));
    }

    #[test]
    fn test_absent_flags_keep_file_options() {
        let cli = Cli::try_parse_from(["json2html"]).unwrap();
        let file_options = ConvertOptions {
            escape: false,
            encode: true,
            ..Default::default()
        };
        assert_eq!(cli.apply(file_options.clone()), file_options);
        assert_eq!(cli.input_path(), None);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let cli = Cli::try_parse_from(["json2html", "-"]).unwrap();
        assert_eq!(cli.input_path(), None);
    }

    #[test]
    fn test_builtin_conflicts_with_template_dir() {
        assert!(Cli::try_parse_from([
            "json2html",
            "--builtin-template",
            "--template-dir",
            "t"
        ])
        .is_err());
    }
}
