//! Registry of the Tailwind v4 color palettes the template can be themed with.
//!
//! Process-wide constant data: the registry is never mutated and is shared by
//! read-only reference. Every palette maps the same 11 tonal shade levels to
//! lowercase `#rrggbb` strings.

/// Shade levels every palette defines, in ascending order.
pub const SHADE_LEVELS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Name of the palette the template itself is authored in.
pub const SOURCE_PALETTE: &str = "red";

/// Hardcoded accent color in the template's global stylesheet that predates
/// the palette system; remapped to the target palette's 600 shade.
pub const LEGACY_ACCENT_HEX: &str = "#ff3c00";

/// A named palette: 11 shade levels mapped to hex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    shades: [&'static str; 11],
}

impl Palette {
    /// Hex color for a shade level, `None` for a level outside [`SHADE_LEVELS`].
    pub fn shade(&self, level: u16) -> Option<&'static str> {
        SHADE_LEVELS.iter().position(|l| *l == level).map(|i| self.shades[i])
    }

    /// Iterate `(level, hex)` pairs in ascending shade order.
    pub fn shades(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        SHADE_LEVELS.iter().copied().zip(self.shades.iter().copied())
    }
}

macro_rules! palette {
    ($name:literal, $($hex:literal),+ $(,)?) => {
        Palette { name: $name, shades: [$($hex),+] }
    };
}

/// Every palette the generator can theme a site with, `red` first.
pub static PALETTES: [Palette; 17] = [
    palette!("red", "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c", "#991b1b", "#7f1d1d", "#450a0a"),
    palette!("orange", "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c", "#c2410c", "#9a3412", "#7c2d12", "#431407"),
    palette!("amber", "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309", "#92400e", "#78350f", "#451a03"),
    palette!("yellow", "#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308", "#ca8a04", "#a16207", "#854d0e", "#713f12", "#422006"),
    palette!("lime", "#f7fee7", "#ecfccb", "#d9f99d", "#bef264", "#a3e635", "#84cc16", "#65a30d", "#4d7c0f", "#3f6212", "#365314", "#1a2e05"),
    palette!("green", "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d", "#166534", "#14532d", "#052e16"),
    palette!("emerald", "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669", "#047857", "#065f46", "#064e3b", "#022c22"),
    palette!("teal", "#f0fdfa", "#ccfbf1", "#99f6e4", "#5eead4", "#2dd4bf", "#14b8a6", "#0d9488", "#0f766e", "#115e59", "#134e4a", "#042f2e"),
    palette!("cyan", "#ecfeff", "#cffafe", "#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4", "#0891b2", "#0e7490", "#155e75", "#164e63", "#083344"),
    palette!("sky", "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7", "#0369a1", "#075985", "#0c4a6e", "#082f49"),
    palette!("blue", "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8", "#1e40af", "#1e3a8a", "#172554"),
    palette!("indigo", "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca", "#3730a3", "#312e81", "#1e1b4b"),
    palette!("violet", "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9", "#5b21b6", "#4c1d95", "#2e1065"),
    palette!("purple", "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce", "#6b21a8", "#581c87", "#3b0764"),
    palette!("fuchsia", "#fdf4ff", "#fae8ff", "#f5d0fe", "#f0abfc", "#e879f9", "#d946ef", "#c026d3", "#a21caf", "#86198f", "#701a75", "#4a044e"),
    palette!("pink", "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777", "#be185d", "#9d174d", "#831843", "#500724"),
    palette!("rose", "#fff1f2", "#ffe4e6", "#fecdd3", "#fda4af", "#fb7185", "#f43f5e", "#e11d48", "#be123c", "#9f1239", "#881337", "#4c0519"),
];

/// Look up a palette by name.
pub fn find(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name == name)
}

/// The palette the template is authored in.
pub fn source() -> &'static Palette {
    &PALETTES[0]
}

/// Registry names in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_source_palette_first() {
        assert_eq!(source().name, SOURCE_PALETTE);
        assert_eq!(source().shade(500), Some("#ef4444"));
    }

    #[test]
    fn every_palette_has_well_formed_hex_values() {
        for palette in &PALETTES {
            for (level, hex) in palette.shades() {
                assert!(hex.starts_with('#'), "{}-{} missing '#'", palette.name, level);
                assert_eq!(hex.len(), 7, "{}-{} is not 6 hex digits", palette.name, level);
                assert!(
                    hex[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
                    "{}-{} is not lowercase hex",
                    palette.name,
                    level
                );
            }
        }
    }

    #[test]
    fn find_is_exact() {
        assert_eq!(find("blue").map(|p| p.name), Some("blue"));
        assert!(find("Blue").is_none());
        assert!(find("magenta").is_none());
    }

    #[test]
    fn shade_lookup_rejects_unknown_levels() {
        let blue = find("blue").unwrap();
        assert_eq!(blue.shade(600), Some("#2563eb"));
        assert_eq!(blue.shade(550), None);
    }
}
