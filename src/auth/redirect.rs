//! OAuth redirect helpers.
//!
//! The remote API owns the OAuth flow. The site only needs the URL that starts
//! it and a way to pick the issued token off the final redirect.

use url::Url;

/// Query parameter carrying the issued token on the redirect back to the site.
pub const TOKEN_PARAM: &str = "token";

/// Build `{base}/api/auth/login?redirect=<site_url>`.
pub fn login_url(base: &Url, site_url: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!(
        "{}/api/auth/login",
        base.as_str().trim_end_matches('/')
    ))?;
    url.query_pairs_mut().append_pair("redirect", site_url);
    Ok(url)
}

/// Extract the token from a redirect URL such as `https://site/?token=abc`.
pub fn token_from_redirect(redirect: &str) -> Option<super::AuthToken> {
    let url = Url::parse(redirect).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == TOKEN_PARAM)
        .and_then(|(_, value)| super::AuthToken::new(value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url_keeps_base_path() {
        let base = Url::parse("https://api.example.org/es117/").unwrap();
        let url = login_url(&base, "https://site.example.org/index.html").unwrap();
        assert_eq!(url.path(), "/es117/api/auth/login");
        assert_eq!(
            url.query_pairs().next().unwrap().1,
            "https://site.example.org/index.html"
        );
    }

    #[test]
    fn test_token_from_redirect() {
        let token = token_from_redirect("https://site.example.org/?token=eyJ.abc.def&x=1").unwrap();
        assert_eq!(token.expose(), "eyJ.abc.def");
    }

    #[test]
    fn test_token_missing_or_blank() {
        assert!(token_from_redirect("https://site.example.org/?x=1").is_none());
        assert!(token_from_redirect("https://site.example.org/?token=").is_none());
        assert!(token_from_redirect("not a url").is_none());
    }
}
