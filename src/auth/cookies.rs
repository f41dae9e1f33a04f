use axum::http::HeaderMap;
use cookie::{time::Duration, Cookie, SameSite};

use crate::config::SecurityConfig;

/// `Set-Cookie` value carrying a freshly issued session token.
pub fn session_cookie(config: &SecurityConfig, token: &str, max_age_secs: i64) -> String {
    build(config, token.to_string(), Duration::seconds(max_age_secs))
}

/// Expires the session cookie on the client.
pub fn cleared_session_cookie(config: &SecurityConfig) -> String {
    build(config, String::new(), Duration::ZERO)
}

fn build(config: &SecurityConfig, value: String, max_age: Duration) -> String {
    let mut c = Cookie::build((config.cookie_name.clone(), value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .build();

    if config.cookie_secure {
        c.set_secure(true);
    }

    c.to_string()
}

/// Find the named cookie among every `Cookie` header on the request.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| Cookie::split_parse(raw.to_string()))
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}
