//! Generation pipeline: the strict step sequence that turns template +
//! configuration into a deployable site directory.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, ColorReplacementMap, SiteConfig, palette};
use crate::ports::{TurnstileProvisioner, WidgetRequest};
use crate::services::{
    FragmentRenderer, materialize, recolor_tree, transformers, write_env_file,
};

/// Inputs of one generation run, besides the configuration itself.
pub struct GenerateOptions {
    /// Directory holding the site template.
    pub template_dir: PathBuf,
    /// Destination directory; `./{slug}` when unset.
    pub output_dir: Option<PathBuf>,
}

/// A content section left at template defaults because the configuration
/// supplied no data for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultedSection {
    pub section: &'static str,
    pub edit_path: &'static str,
}

/// Outcome of a successful generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// The fully validated configuration the run was executed with.
    pub config: SiteConfig,
    pub destination: PathBuf,
    pub defaulted_sections: Vec<DefaultedSection>,
}

/// Execute the pipeline: validate, materialize, rewrite, recolor, provision,
/// persist `.env` and the provenance snapshot.
///
/// `provisioner` is `None` when no Cloudflare credentials are ambient; the
/// widget step then degrades to empty credentials with a console notice.
/// Fatal failures abort the remaining steps but do not retract output already
/// written under the destination.
pub fn execute<P: TurnstileProvisioner>(
    config: SiteConfig,
    options: &GenerateOptions,
    provisioner: Option<&P>,
) -> Result<GenerateReport, AppError> {
    let config = config.validated()?;

    if !options.template_dir.is_dir() {
        return Err(AppError::TemplateNotFound(options.template_dir.display().to_string()));
    }

    let destination = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?.join(&config.slug),
    };

    println!();
    println!("  Creating site \"{}\" in {}/...", config.name, config.slug);
    println!();

    println!("  [1/6] Copying template...");
    materialize(&options.template_dir, &destination)?;

    println!("  [2/6] Customizing files...");
    let fragments = FragmentRenderer::new()?;
    transformers::apply_all(&destination, &config, &fragments)?;

    println!("  [3/6] Applying color scheme...");
    if let Some(target) = palette::find(&config.colors.tailwind) {
        let map = ColorReplacementMap::build(target);
        recolor_tree(&destination, &map)?;
    }

    println!("  [4/6] Creating Cloudflare Turnstile widget...");
    let credential = match provisioner {
        Some(provisioner) => provisioner.provision(&WidgetRequest::for_site(&config)),
        None => {
            println!("    (skipped: CLOUDFLARE_API_TOKEN or CLOUDFLARE_ACCOUNT_ID not set)");
            None
        }
    };

    println!("  [5/6] Writing .env...");
    write_env_file(&destination, credential.as_ref(), &fragments)?;

    println!("  [6/6] Saving configuration...");
    let snapshot = serde_json::to_string_pretty(&config).map_err(|e| AppError::ParseError {
        what: "site.config.json".to_string(),
        details: e.to_string(),
    })?;
    fs::write(destination.join("site.config.json"), snapshot)?;

    let mut defaulted_sections = Vec::new();
    if config.testimonials.is_empty() {
        defaulted_sections.push(DefaultedSection {
            section: "Testimonials",
            edit_path: "src/components/testimonials/Testimonials.astro",
        });
    }
    if config.hero_slides.is_empty() {
        defaulted_sections.push(DefaultedSection {
            section: "Hero slider",
            edit_path: "src/components/hero-slider/Hero.tsx",
        });
    }
    if config.services.is_empty() {
        defaulted_sections.push(DefaultedSection {
            section: "Services",
            edit_path: "src/components/service-cars/Services.astro",
        });
    }

    Ok(GenerateReport { config, destination, defaulted_sections })
}
