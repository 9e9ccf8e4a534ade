use url::Url;

use crate::error::ApiError;

pub const PROFILE_SUBSCRIBE_URL: &str = "/subscribehandler";
pub const PROFILE_UNSUBSCRIBE_URL: &str = "/unsubscribehandler";
pub const PROFILE_DATA_URL_TEMPLATE: &str = "/profilehandler/data/<username>";

/// Substitutes `<name>` placeholders in a url template. A placeholder left
/// unresolved after substitution is an error.
pub fn interpolate_url(template: &str, params: &[(&str, &str)]) -> Result<String, ApiError> {
    let mut url = template.to_string();
    for (name, value) in params {
        url = url.replace(&format!("<{}>", name), value);
    }

    if let (Some(start), Some(end)) = (url.find('<'), url.find('>')) {
        if start < end {
            return Err(ApiError::UrlInterpolation(url[start..=end].to_string()));
        }
    }

    Ok(url)
}

/// Extracts the username from a profile page url whose path is
/// `/profile/<username>`.
pub fn username_from_profile_url(page_url: &str) -> Result<String, ApiError> {
    let invalid = || ApiError::InvalidProfileUrl(page_url.to_string());

    let url = Url::parse(page_url).map_err(|_| invalid())?;
    let mut segments = url.path_segments().ok_or_else(invalid)?;

    match (segments.next(), segments.next(), segments.next()) {
        (Some("profile"), Some(username), trailing)
            if !username.is_empty() && trailing.unwrap_or("").is_empty() =>
        {
            Ok(username.to_string())
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn interpolates_username_into_template() {
        let url = interpolate_url(PROFILE_DATA_URL_TEMPLATE, &[("username", "alice")]).unwrap();
        assert_eq!(url, "/profilehandler/data/alice");
    }

    #[test]
    fn rejects_unresolved_placeholder() {
        let err = interpolate_url(PROFILE_DATA_URL_TEMPLATE, &[]).unwrap_err();
        assert!(matches!(err, ApiError::UrlInterpolation(p) if p == "<username>"));
    }

    #[test]
    fn parses_username_from_profile_page_url() {
        let username = username_from_profile_url("http://localhost/profile/alice").unwrap();
        assert_eq!(username, "alice");
    }

    #[test]
    fn accepts_trailing_slash_on_profile_page_url() {
        let username = username_from_profile_url("http://localhost/profile/alice/").unwrap();
        assert_eq!(username, "alice");
    }

    #[test]
    fn rejects_non_profile_page_urls() {
        for page_url in [
            "http://localhost/library",
            "http://localhost/profile",
            "http://localhost/profile/alice/extra",
            "not a url",
        ] {
            let err = username_from_profile_url(page_url).unwrap_err();
            assert!(matches!(err, ApiError::InvalidProfileUrl(_)));
        }
    }
}
