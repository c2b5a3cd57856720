/// Catalog Linter: checks a story catalog for stories that will not play well.
///
/// Usage: catalog_linter <catalog.json|catalog.ron>

use clap::Parser;
use mad_libs::schema::catalog::Catalog;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(about = "Validate a mad-libs story catalog", long_about = None)]
struct Args {
    /// Catalog file to check.
    catalog: PathBuf,
}

fn main() {
    let args = Args::parse();

    let catalog = match Catalog::load(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("ERROR: Failed to load catalog: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Loaded {} themes, {} stories",
        catalog.len(),
        catalog.story_count()
    );

    let (errors, warnings) = lint_catalog(&catalog);

    println!("\n=== Catalog Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_catalog(catalog: &Catalog) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for theme in catalog.themes() {
        if theme.stories.is_empty() {
            warnings.push(format!(
                "Theme '{}' has no stories and will end the game if chosen",
                theme.name
            ));
        }

        for (i, story) in theme.stories.iter().enumerate() {
            let label = if story.title.trim().is_empty() {
                errors.push(format!("Theme '{}' story #{} has an empty title", theme.name, i + 1));
                format!("'{}' story #{}", theme.name, i + 1)
            } else {
                format!("'{}' / '{}'", theme.name, story.title)
            };

            let blanks = story.blank_count();
            let prompts = story.placeholders.len();

            if prompts == 0 && blanks > 0 {
                errors.push(format!(
                    "Story {} has {} blanks but no placeholders",
                    label, blanks
                ));
            } else if blanks != prompts {
                // Extra blanks stay as "___"; extra answers are thrown away.
                warnings.push(format!(
                    "Story {} has {} blanks but {} placeholders",
                    label, blanks, prompts
                ));
            }

            for (j, placeholder) in story.placeholders.iter().enumerate() {
                if placeholder.prompt.trim().is_empty() {
                    errors.push(format!(
                        "Story {} placeholder #{} has an empty prompt",
                        label,
                        j + 1
                    ));
                }
            }
        }
    }

    (errors, warnings)
}
