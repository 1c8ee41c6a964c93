/// Header carrying the CSRF token on the measurements POST.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Cookie the backend's `set-csrf/` endpoint stores the token in.
pub const CSRF_COOKIE: &str = "X-CSRFToken";

/// Look up `name` in a `document.cookie` style string (`a=1; b=2`).
/// Values are percent-decoded; undecodable values are returned raw.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; X-CSRFToken=tok%2Fen123; theme=dark";
        assert_eq!(cookie_value(cookies, CSRF_COOKIE).as_deref(), Some("tok/en123"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_cookie_missing() {
        assert_eq!(cookie_value("", CSRF_COOKIE), None);
        assert_eq!(cookie_value("csrftoken=1", CSRF_COOKIE), None);
    }

    #[test]
    fn test_cookie_name_is_not_a_prefix_match() {
        assert_eq!(cookie_value("X-CSRFToken2=no; X-CSRFToken=yes", CSRF_COOKIE).as_deref(), Some("yes"));
    }
}
