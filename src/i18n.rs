/// Languages shipped under `locales/`.
pub const AVAILABLE: &[&str] = &["en", "zh-TW"];

/// Switches the language of console notices, falling back to English for
/// anything not shipped.
pub fn set_locale(lang: &str) {
    let lang = if AVAILABLE.contains(&lang) { lang } else { "en" };
    rust_i18n::set_locale(lang);
}
