mod env_file;
mod fragments;
mod materializer;
mod recolor;
pub mod transformers;
mod turnstile_http;

pub use env_file::write_env_file;
pub use fragments::{FragmentRenderer, escape_double_quoted, escape_single_quoted};
pub use materializer::materialize;
pub use recolor::recolor_tree;
pub use turnstile_http::{HttpTurnstileClient, TurnstileApiConfig};
