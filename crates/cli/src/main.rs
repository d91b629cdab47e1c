//! `presetvault` -- preset submission processor.
//!
//! Takes one community submission (metadata, exported JSON, screenshot)
//! and merges it into the flat-file catalog in the current directory:
//! writes `presets/<id>.json` and `presets/<id>.png`, then appends a
//! summary entry to `index.json`.
//!
//! # Environment variables
//!
//! | Variable       | Required | Default | Description                        |
//! |----------------|----------|---------|------------------------------------|
//! | `CATALOG_ROOT` | no       | `.`     | Directory holding `index.json`     |
//! | `RUST_LOG`     | no       | `presetvault=info` | tracing filter          |

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use presetvault_catalog::{process_submission, Catalog, Submission};

fn print_usage() {
    eprintln!("Character Preset Submission Processor");
    eprintln!("{}", "=".repeat(60));
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  presetvault <name> <author> <desc> <tags> <json> <screenshot>");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  presetvault \\");
    eprintln!("    'Malenia Cosplay' \\");
    eprintln!("    'github_username' \\");
    eprintln!("    'Accurate Malenia recreation' \\");
    eprintln!("    'cosplay,female,redhead' \\");
    eprintln!("    ~/Downloads/character.json \\");
    eprintln!("    ~/Downloads/screenshot.png");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  name:       Display name for the preset");
    eprintln!("  author:     GitHub username of submitter");
    eprintln!("  desc:       Description of the character");
    eprintln!("  tags:       Comma-separated tags (cosplay,male,female,etc)");
    eprintln!("  json:       Path to exported JSON from the character tool");
    eprintln!("  screenshot: Path to screenshot PNG");
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "presetvault=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [name, author, description, tags, export, screenshot] = args.as_slice() else {
        print_usage();
        std::process::exit(1);
    };

    let root = std::env::var("CATALOG_ROOT").unwrap_or_else(|_| ".".into());
    let catalog = Catalog::new(&root);

    let submission = Submission {
        name: name.clone(),
        author: author.clone(),
        description: description.clone(),
        tags: tags.clone(),
        export_path: PathBuf::from(export),
        screenshot_path: PathBuf::from(screenshot),
    };

    match process_submission(&catalog, &submission) {
        Ok(id) => {
            println!();
            println!("{}", "=".repeat(60));
            println!("SUCCESS! Added preset {id}: {name}");
            println!("{}", "=".repeat(60));
            println!();
            println!("Next steps:");
            println!("  git add index.json presets/{id}.*");
            println!("  git commit -m 'Add preset: {name} by {author}'");
            println!("  git push");
            println!();
            println!("Preset will be live immediately after push!");
        }
        Err(e) => {
            tracing::error!(error = %e, "Submission failed");
            std::process::exit(1);
        }
    }
}
