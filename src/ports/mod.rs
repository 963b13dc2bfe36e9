mod turnstile;

pub use turnstile::{TurnstileCredential, TurnstileProvisioner, WidgetRequest};
