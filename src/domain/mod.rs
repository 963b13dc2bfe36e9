pub mod config;
pub mod error;
pub mod palette;
pub mod recolor;
pub mod tree;

pub use config::{
    BusinessHours, ColorSelection, ContactInfo, EmailService, HeroSlide, SeoConfig, SeoPage,
    ServiceEntry, SiteConfig, SocialLinks, Testimonial, WhatsappConfig,
};
pub use error::AppError;
pub use palette::{LEGACY_ACCENT_HEX, PALETTES, Palette, SHADE_LEVELS, SOURCE_PALETTE};
pub use recolor::ColorReplacementMap;
pub use tree::{EXCLUDED_ENTRIES, RECOLOR_EXTENSIONS, is_excluded, is_recolorable};
