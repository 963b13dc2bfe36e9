//! Services listing: rebuild the service-card array; template samples stay
//! when no services are configured.

use minijinja::context;

use crate::domain::{AppError, SiteConfig};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::replace_regex_first;

const SERVICES_ARRAY: &str = r"(?s)const services = \[.*?\];";

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    if config.services.is_empty() {
        return Ok(content.to_string());
    }

    let entries = config
        .services
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let image = service
                .image
                .clone()
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| format!("/image-service-0{}.webp", i + 1));
            fragments.render(
                "service_entry",
                context! {
                    image => image,
                    title => service.title.clone(),
                    description => service.description.clone(),
                },
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let replacement = format!("const services = [\n{}\n];", entries.join(",\n"));
    replace_regex_first(content, SERVICES_ARRAY, &replacement)
}
