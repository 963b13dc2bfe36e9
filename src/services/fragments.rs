//! Rendering of config-derived text fragments.
//!
//! The rewrite rules splice generated literals into template source files;
//! every multi-line literal and the `.env` file are rendered through one
//! shared minijinja environment so the emitted shapes live in one place.

use minijinja::{Environment, Value};

use crate::domain::AppError;

const FOOTER_CONTACT_ENTRY: &str = r#"    {
        type: "{{ kind }}",
        value: "{{ value|dq }}",
        icon: "{{ icon }}",
        link: "{{ link|dq }}",
        isExternal: {{ external }}
    }"#;

const TESTIMONIAL_ENTRY: &str = r#"    {
        name: "{{ name|dq }}",
        description: "{{ text|dq }}",
        rating: {{ rating }},
        avatar: "{{ initials }}"
    }"#;

const SERVICE_ENTRY: &str = r#"  {
    img: '{{ image|sq }}',
    title: '{{ title|sq }}',
    desc: '{{ description|sq }}'
  }"#;

const HERO_SLIDE_ENTRY: &str = r#"  {
    src: slide0{{ index }}.src,
    alt: "{{ alt|dq }}",
    title: "{{ title|dq }}",
    subtitle: "{{ subtitle|dq }}",
  }"#;

const ENV_FILE: &str = r#"VENPU_API_URL="https://api.venpu.cl"
VENPU_API_KEY=""
RESEND_API_KEY=""
PUBLIC_TURNSTILE_SITE_KEY="{{ sitekey }}"
TURNSTILE_SECRET_KEY="{{ secret }}"
"#;

/// Escape a free-text field for embedding in a double-quoted source literal.
pub fn escape_double_quoted(text: &str) -> String {
    text.replace('"', "\\\"").replace('`', "\\`")
}

/// Escape a free-text field for embedding in a single-quoted source literal.
pub fn escape_single_quoted(text: &str) -> String {
    text.replace('\'', "\\'")
}

/// Shared environment holding every fragment template.
pub struct FragmentRenderer {
    env: Environment<'static>,
}

impl FragmentRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_filter("dq", |value: String| escape_double_quoted(&value));
        env.add_filter("sq", |value: String| escape_single_quoted(&value));

        let templates = [
            ("footer_contact_entry", FOOTER_CONTACT_ENTRY),
            ("testimonial_entry", TESTIMONIAL_ENTRY),
            ("service_entry", SERVICE_ENTRY),
            ("hero_slide_entry", HERO_SLIDE_ENTRY),
            ("env_file", ENV_FILE),
        ];
        for (name, source) in templates {
            env.add_template(name, source).map_err(|e| {
                AppError::RenderError(format!("failed to register fragment '{name}': {e}"))
            })?;
        }

        Ok(Self { env })
    }

    pub fn render(&self, name: &str, ctx: Value) -> Result<String, AppError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| AppError::RenderError(format!("unknown fragment '{name}': {e}")))?;
        template
            .render(ctx)
            .map_err(|e| AppError::RenderError(format!("fragment '{name}' failed: {e}")))
    }
}
