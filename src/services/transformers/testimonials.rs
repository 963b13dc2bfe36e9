//! Testimonials: rebuild the testimonial array with configured entries; the
//! template's sample quotes stay when none are configured.

use minijinja::context;

use crate::domain::{AppError, SiteConfig, Testimonial};
use crate::services::fragments::FragmentRenderer;
use crate::services::transformers::replace_regex_first;

const TESTIMONIAL_ARRAY: &str = r"(?s)const testimonials: Testimonial\[\] = \[.*?\];";

pub(super) fn render(
    content: &str,
    config: &SiteConfig,
    fragments: &FragmentRenderer,
) -> Result<String, AppError> {
    if config.testimonials.is_empty() {
        return Ok(content.to_string());
    }

    let entries = config
        .testimonials
        .iter()
        .map(|testimonial| {
            fragments.render(
                "testimonial_entry",
                context! {
                    name => testimonial.name.clone(),
                    text => testimonial.text.clone(),
                    rating => format!("{}", rating_of(testimonial)),
                    initials => initials(&testimonial.name),
                },
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let replacement = format!("const testimonials: Testimonial[] = [\n{}\n];", entries.join(",\n"));
    replace_regex_first(content, TESTIMONIAL_ARRAY, &replacement)
}

fn rating_of(testimonial: &Testimonial) -> f64 {
    match testimonial.rating {
        Some(rating) if rating > 0.0 => rating,
        _ => 5.0,
    }
}

/// Uppercase avatar initials: first letter of the first two words.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
