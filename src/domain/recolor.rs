//! Palette substitution map: the derived, per-run mapping that retints the
//! whole template from its native palette to the configured one.

use crate::domain::palette::{self, LEGACY_ACCENT_HEX, Palette, SOURCE_PALETTE};

/// Substitutions to apply to every text file of the generated tree.
///
/// One hex pair per shade level plus the legacy accent constant, and one
/// `red-{shade}` style-token pair per shade level. Keys are distinct
/// fixed-width hex strings, so no replacement's output can be matched by a
/// later replacement's pattern regardless of application order.
#[derive(Debug, Default)]
pub struct ColorReplacementMap {
    hexes: Vec<(String, String)>,
    classes: Vec<(String, String)>,
}

impl ColorReplacementMap {
    /// Build the map from the template's native palette to `target`.
    ///
    /// The identity target yields an empty map: no rewrite pass is needed.
    pub fn build(target: &Palette) -> Self {
        if target.name == SOURCE_PALETTE {
            return Self::default();
        }

        let source = palette::source();
        let mut hexes = Vec::with_capacity(palette::SHADE_LEVELS.len() + 1);
        let mut classes = Vec::with_capacity(palette::SHADE_LEVELS.len());

        for ((level, source_hex), (_, target_hex)) in source.shades().zip(target.shades()) {
            hexes.push((source_hex.to_string(), target_hex.to_string()));
            classes.push((
                format!("{SOURCE_PALETTE}-{level}"),
                format!("{}-{level}", target.name),
            ));
        }
        if let Some(accent) = target.shade(600) {
            hexes.push((LEGACY_ACCENT_HEX.to_string(), accent.to_string()));
        }

        Self { hexes, classes }
    }

    /// True when the target equals the source palette and nothing is rewritten.
    pub fn is_identity(&self) -> bool {
        self.hexes.is_empty() && self.classes.is_empty()
    }

    /// Apply every substitution to one file's content.
    ///
    /// Hex values are replaced in both the lowercase form the registry stores
    /// and the uppercase variant some template files carry; style tokens are
    /// replaced afterwards.
    pub fn apply(&self, content: &str) -> String {
        let mut result = content.to_string();
        for (old, new) in &self.hexes {
            result = result.replace(old, new);
            result = result.replace(&old.to_uppercase(), &new.to_uppercase());
        }
        for (old, new) in &self.classes {
            result = result.replace(old, new);
        }
        result
    }
}
