/// Returns `true` if the HTTP status code is in the success range `200..=299`.
///
/// # Examples
///
/// ```
/// use revcat_fetch::is_success;
///
/// assert!(is_success(200));
/// assert!(is_success(204));
/// assert!(!is_success(301));
/// assert!(!is_success(404));
/// ```
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}
