//! Generate command - sample a worksheet and render test and solution

use anyhow::Result;
use colored::Colorize;
use kanjitest_core::{GenerationOptions, Renderer, generate, rng_from_seed};
use kanjitest_latex::PdfLatex;

/// Run the whole pipeline
///
/// # Arguments
///
/// * `options` - Unvalidated options from the command line
/// * `no_render` - Stop after writing the .tex sources
/// * `verbose` - Print each step
pub fn run(options: GenerationOptions, no_render: bool, verbose: bool) -> Result<()> {
    if verbose {
        println!("{} Validating configuration", "→".cyan());
    }

    let config = options.resolve()?;

    if verbose {
        println!(
            "{} {} × {} grid ({} points, font size {}pt)",
            "→".cyan(),
            config.grid.columns(),
            config.grid.rows(),
            config.grid.points(),
            config.grid.font_size()
        );
        match config.seed {
            Some(seed) => println!("{} Using seed {}", "→".cyan(), seed),
            None => println!("{} Using a random seed", "→".cyan()),
        }
        println!(
            "{} Reading '{}' with templates from '{}'",
            "→".cyan(),
            config.words.display(),
            config.templates.display()
        );
    }

    let mut rng = rng_from_seed(config.seed);
    let pdflatex = PdfLatex::new(config.latex.clone());
    let renderer: Option<&dyn Renderer> = if no_render { None } else { Some(&pdflatex) };

    if verbose && renderer.is_some() {
        println!(
            "{} Rendering into '{}' with pdflatex",
            "→".cyan(),
            config.output.display()
        );
    }

    let outcome = generate(&config, renderer, &mut rng)?;

    for artifact in &outcome.artifacts {
        println!("{} Wrote {}", "✓".green().bold(), artifact.display());
    }
    for source in &outcome.sources {
        println!("{} Wrote {}", "✓".green().bold(), source.display());
    }

    Ok(())
}
