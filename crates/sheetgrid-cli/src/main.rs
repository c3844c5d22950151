//! Sheetgrid CLI - view remote character sheets from the terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetgrid::prelude::*;
use sheetgrid::{
    ProvisionClient, ProvisionedSheet, UrlProvider, ALL_SECTIONS, DEFAULT_SHEET_NAME,
};

#[derive(Parser)]
#[command(name = "sheetgrid")]
#[command(author, version, about = "Remote character-sheet viewer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a spreadsheet and print its sections
    Show {
        /// Spreadsheet URL (must contain the /d/{id}/ segment)
        url: String,

        /// Tab to query
        #[arg(short, long, default_value = DEFAULT_SHEET_NAME)]
        sheet: String,

        /// Override the provider host (testing)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show row counts and section coverage for a spreadsheet
    Info {
        /// Spreadsheet URL
        url: String,

        /// Tab to query
        #[arg(short, long, default_value = DEFAULT_SHEET_NAME)]
        sheet: String,

        /// Override the provider host (testing)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Provision a new sheet via a creation endpoint, then show it
    Create {
        /// Name for the new sheet
        name: String,

        /// Creation endpoint URL
        #[arg(short, long)]
        endpoint: String,

        /// Tab to query after creation
        #[arg(short, long, default_value = DEFAULT_SHEET_NAME)]
        sheet: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            url,
            sheet,
            base_url,
        } => show(&url, &sheet, base_url.as_deref()).await,
        Commands::Info {
            url,
            sheet,
            base_url,
        } => info(&url, &sheet, base_url.as_deref()).await,
        Commands::Create {
            name,
            endpoint,
            sheet,
        } => create(&name, &endpoint, &sheet).await,
    }
}

fn client_for(base_url: Option<&str>) -> SheetsClient {
    match base_url {
        Some(base) => SheetsClient::with_base_url(base),
        None => SheetsClient::new(),
    }
}

async fn load_sheet(url: &str, sheet: &str, base_url: Option<&str>) -> Result<CharacterSheet> {
    let locator = SheetLocator::from_url_with_sheet(url, sheet)?;
    let loader = SheetLoader::new(client_for(base_url));

    loader
        .load(&locator)
        .await
        .with_context(|| format!("failed to load sheet '{}'", locator.spreadsheet_id))?;

    let grid = loader
        .grid()
        .context("load completed without producing a grid")?;
    Ok(CharacterSheet::new(grid))
}

async fn show(url: &str, sheet: &str, base_url: Option<&str>) -> Result<()> {
    let character = load_sheet(url, sheet, base_url).await?;
    let form = character.form();

    println!("Name: {}", form.name());
    println!();
    print_section("Character Info", character.character_info());
    print_section("Base Attributes", character.base_attributes());
    print_section("Derived Stats", character.derived_stats());
    Ok(())
}

async fn info(url: &str, sheet: &str, base_url: Option<&str>) -> Result<()> {
    let character = load_sheet(url, sheet, base_url).await?;
    let grid = character.grid();

    println!("Rows: {}", grid.len());
    println!("Widest row: {} columns", grid.max_width());
    for section in ALL_SECTIONS {
        println!(
            "  {}: rows [{}, {}), {} present",
            section.name,
            section.start,
            section.end,
            grid.section(section).len()
        );
    }
    Ok(())
}

async fn create(name: &str, endpoint: &str, sheet: &str) -> Result<()> {
    let provider = ProvisionedSheet {
        client: ProvisionClient::new(endpoint),
        name: name.to_string(),
    };
    let url = provider
        .resolve()
        .await
        .with_context(|| format!("failed to provision sheet '{name}'"))?;

    eprintln!("Created sheet: {url}");
    show(&url, sheet, None).await
}

/// Print rows as an aligned table under a heading
fn print_section(title: &str, rows: &[Row]) {
    println!("== {title} ==");
    if rows.is_empty() {
        println!("(no rows)");
        println!();
        return;
    }

    let columns = rows.iter().map(Row::width).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    let rendered: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            (0..columns)
                .map(|col| row.cell(col).to_string())
                .collect::<Vec<_>>()
        })
        .collect();
    for row in &rendered {
        for (col, text) in row.iter().enumerate() {
            widths[col] = widths[col].max(text.len());
        }
    }

    for row in &rendered {
        let line = row
            .iter()
            .enumerate()
            .map(|(col, text)| format!("{:<width$}", text, width = widths[col]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
    println!();
}
