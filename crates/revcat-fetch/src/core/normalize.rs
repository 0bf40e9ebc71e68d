pub const HTTP_SCHEME: &str = "http://";
pub const HTTPS_SCHEME: &str = "https://";

/// Ensures `locator` starts with an explicit transfer scheme.
///
/// Locators already carrying `http://` or `https://` are returned unchanged;
/// anything else gets `http://` prepended. No further validation is done, a
/// malformed result surfaces later as a fetch failure.
///
/// # Examples
///
/// ```
/// use revcat_fetch::normalize_locator;
///
/// assert_eq!(normalize_locator("example.com/a"), "http://example.com/a");
/// assert_eq!(normalize_locator("https://example.com/a"), "https://example.com/a");
/// ```
pub fn normalize_locator(locator: &str) -> String {
    if locator.starts_with(HTTP_SCHEME) || locator.starts_with(HTTPS_SCHEME) {
        locator.to_string()
    } else {
        format!("{HTTP_SCHEME}{locator}")
    }
}
