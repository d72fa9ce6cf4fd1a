//! rubric - Table-of-contents generator for HTML documents

use std::process::ExitCode;

use clap::Parser;

use rubric::render::render;
use rubric::{Outline, RenderOptions, extract_headings_file};

#[derive(Parser)]
#[command(name = "rubric")]
#[command(version, about = "Generate a table of contents from an HTML document", long_about = None)]
#[command(after_help = "EXAMPLES:
    rubric page.html                     Print TOC markup for #article-content
    rubric page.html --content-id main   Outline a different container
    rubric page.html --json              Print the outline tree as JSON
    rubric page.html --info              Show outline statistics")]
struct Cli {
    /// Input HTML file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Id of the content container to outline
    #[arg(long, default_value = "article-content")]
    content_id: String,

    /// Print the outline tree as JSON instead of markup
    #[arg(long)]
    json: bool,

    /// Show outline statistics without printing markup
    #[arg(short, long)]
    info: bool,

    /// Add tooltip attributes to rendered links
    #[arg(long)]
    tooltips: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let Some(headings) = extract_headings_file(&cli.input, &cli.content_id)
        .map_err(|e| format!("{}: {e}", cli.input))?
    else {
        return Err(format!("no element with id \"{}\"", cli.content_id));
    };

    let Some(outline) = Outline::from_headings(&headings) else {
        // An empty outline hides the panel; nothing to print
        if cli.info {
            println!("File: {}", cli.input);
            println!("Headings: 0");
        }
        return Ok(());
    };

    if cli.info {
        println!("File: {}", cli.input);
        println!("Headings: {}", headings.len());
        println!("Displayed: {}", outline.len());
        println!("Roots: {}", outline.forest.len());
        println!("Min level: h{}", outline.min_level);
        println!("Max display level: h{}", outline.max_display_level);
        return Ok(());
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&outline.forest).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let options = RenderOptions {
        tooltips: cli.tooltips,
    };
    println!("{}", render(&outline.forest, &options));

    Ok(())
}
