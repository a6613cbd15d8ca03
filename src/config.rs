const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
const DEFAULT_CONTACT_FORM_ENDPOINT: &str = "https://formspree.io/f/yourFormId";

pub const THEME_STORAGE_KEY: &str =
    non_empty_or(option_env!("PORTFOLIO_THEME_KEY"), DEFAULT_THEME_STORAGE_KEY);

pub const CONTACT_FORM_ENDPOINT: &str = non_empty_or(
    option_env!("PORTFOLIO_FORM_ENDPOINT"),
    DEFAULT_CONTACT_FORM_ENDPOINT,
);

// CSS pixels below the viewport top.
pub const SCROLL_REFERENCE_OFFSET: f64 = 150.0;

pub const SKILL_REVEAL_STEP_MS: usize = 100;

pub const COLOR_SCHEME_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

const fn non_empty_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

pub fn contact_endpoint_is_placeholder() -> bool {
    CONTACT_FORM_ENDPOINT.ends_with("/yourFormId")
}
