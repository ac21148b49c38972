/// Ensures URL ends without a trailing slash
///
/// # Examples
/// ```
/// use postgen::utils::uri::ensure_no_trailing_slash;
/// assert_eq!(ensure_no_trailing_slash("https://api.openai.com/v1/"), "https://api.openai.com/v1");
///
/// // Works with owned String too
/// let url = String::from("https://api.openai.com/v1/");
/// assert_eq!(ensure_no_trailing_slash(url), "https://api.openai.com/v1");
/// ```
pub fn ensure_no_trailing_slash<S>(url: S) -> String
where
    S: Into<String>,
{
    let mut url = url.into();
    while url.ends_with('/') {
        url.pop();
    }
    url
}
