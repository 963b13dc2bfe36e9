//! CLI Adapter.

mod wizard;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::commands::generate::{self, GenerateOptions, GenerateReport};
use crate::domain::{AppError, SiteConfig, palette};
use crate::services::{HttpTurnstileClient, TurnstileApiConfig};

#[derive(Parser)]
#[command(name = "dealersite")]
#[command(version)]
#[command(
    about = "Generate customized car-dealership websites from a shared Astro template",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a site from a configuration file or interactive answers
    #[clap(visible_alias = "g")]
    Generate {
        /// Path to the JSON configuration file (interactive mode when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Directory holding the site template
        #[arg(short, long, default_value = "template")]
        template: PathBuf,
        /// Destination directory (defaults to ./<slug>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the available color palettes
    #[clap(visible_alias = "p")]
    Palettes,
}

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { config, template, output } => run_generate(config, template, output),
        Commands::Palettes => run_palettes(),
    }
}

fn run_palettes() -> Result<(), AppError> {
    println!("Available palettes:");
    for name in palette::names() {
        println!("  {}", name);
    }
    Ok(())
}

fn run_generate(
    config_path: Option<PathBuf>,
    template: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let config = match config_path {
        Some(path) => load_config(&path)?,
        None => wizard::run()?,
    };

    let provisioner = HttpTurnstileClient::from_env(&TurnstileApiConfig::default())?;
    let options = GenerateOptions { template_dir: template, output_dir: output };
    let report = generate::execute(config, &options, provisioner.as_ref())?;

    print_summary(&report);
    Ok(())
}

fn load_config(path: &Path) -> Result<SiteConfig, AppError> {
    if !path.exists() {
        return Err(AppError::ConfigFileNotFound(path.display().to_string()));
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| AppError::ParseError {
        what: path.display().to_string(),
        details: e.to_string(),
    })
}

fn print_summary(report: &GenerateReport) {
    let config = &report.config;

    println!();
    println!("  ==========================================");
    println!("  Site created successfully!");
    println!("  ==========================================");
    println!();
    println!("  Project:    {}", config.name);
    println!("  Directory:  {}/", config.slug);
    println!("  Domain:     {}", config.domain);
    println!("  Palette:    {}", config.colors.tailwind);
    println!();
    println!("  Next steps:");
    println!("    cd {}", config.slug);
    println!("    npm install");
    println!("    # Fill in VENPU_API_KEY and RESEND_API_KEY in .env");
    println!("    npm run dev");
    println!();
    println!("  Images to replace:");
    println!("    public/logo.webp              main logo (navbar + footer)");
    println!("    src/assets/slide-01..05.jpg   hero slider images");
    println!("    public/image-service-0*.webp  service card images");
    println!("    public/frontis*.webp          storefront photos / OG images");

    if !report.defaulted_sections.is_empty() {
        println!();
        println!("  Left at template defaults:");
        for section in &report.defaulted_sections {
            println!("  - {}: no data supplied, edit {}", section.section, section.edit_path);
        }
    }

    println!();
    println!("  Configuration saved to: {}/site.config.json", config.slug);
}
