//! CLI argument structure using clap

use clap::{Parser, ValueEnum};
use kanjitest_core::{GenerationOptions, Language};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kanjitest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of grid columns
    #[arg(short, long)]
    pub columns: usize,

    /// Number of grid rows (columns × rows must be even)
    #[arg(short, long)]
    pub rows: usize,

    /// Translation language [default: en]
    #[arg(short, long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Worksheet title [default: "Kanji test"]
    #[arg(short, long)]
    pub title: Option<String>,

    /// Worksheet subtitle, LaTeX allowed [default: depends on --language]
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Instructions printed above the grid
    #[arg(short, long)]
    pub instructions: Option<String>,

    /// Output directory [default: output]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Random seed; -1 draws a different worksheet every run
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    pub seed: i64,

    /// Vocabulary table (`jp;fr;en`) [default: words.csv]
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// Directory holding document.txt, content.txt and word.txt [default: model]
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// TOML file supplying defaults for any option not given here
    #[arg(long, env = "KANJITEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// pdflatex binary (overrides KANJITEST_LATEX and PATH)
    #[arg(long)]
    pub latex: Option<PathBuf>,

    /// Keep the .tex sources and pdflatex byproducts
    #[arg(long, overrides_with = "no_keep_source")]
    pub keep_source: bool,

    /// Delete the sources even if the config file sets keep_source
    #[arg(long, overrides_with = "keep_source")]
    pub no_keep_source: bool,

    /// Only write the .tex sources, do not run pdflatex
    #[arg(long)]
    pub no_render: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageArg {
    Fr,
    En,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Fr => Language::Fr,
            LanguageArg::En => Language::En,
        }
    }
}

impl Cli {
    /// Options for the core resolver; rendering flags stay with the CLI
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            language: self.language.map(Language::from),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            instructions: self.instructions.clone(),
            columns: self.columns,
            rows: self.rows,
            output: self.output.clone(),
            seed: self.seed,
            words: self.words.clone(),
            templates: self.templates.clone(),
            config: self.config.clone(),
            latex: self.latex.clone(),
            keep_source: match (self.keep_source, self.no_keep_source) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        }
    }
}
