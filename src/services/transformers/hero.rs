//! Hero slider: replace the slide data when slides are configured, otherwise
//! only rename the brand mention in the template copy.

use minijinja::context;

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::replace_regex_first;

const SLIDE_ARRAY: &str = r"(?s)const slideImages: SlideData\[\] = \[.*?\];";

// Stock alt texts of the template's five bundled slide images.
const DEFAULT_ALTS: [&str; 5] = [
    "Interior moderno de automovil",
    "Automovil de lujo en carretera",
    "Concesionario de automoviles",
    "Auto electrico cargando",
    "Llaves de automovil",
];

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    if config.hero_slides.is_empty() {
        return Ok(content.replace("En Wild Cars", &format!("En {}", config.name)));
    }

    let entries = config
        .hero_slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let alt = slide
                .alt
                .as_deref()
                .filter(|alt| !alt.is_empty())
                .or_else(|| DEFAULT_ALTS.get(i).copied())
                .unwrap_or("Vehiculo");
            fragments.render(
                "hero_slide_entry",
                context! {
                    index => i + 1,
                    alt => alt,
                    title => slide.title.clone(),
                    subtitle => slide.subtitle.clone(),
                },
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let replacement = format!("const slideImages: SlideData[] = [\n{}\n];", entries.join(",\n"));
    replace_regex_first(content, SLIDE_ARRAY, &replacement)
}
