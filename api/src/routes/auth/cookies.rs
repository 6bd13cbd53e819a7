//! Token cookies set by the login and refresh endpoints

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use lk_shared::config::CookieConfig;

fn same_site(value: &str) -> SameSite {
    match value.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

fn token_cookie(
    config: &CookieConfig,
    name: &str,
    token: &str,
    path: &str,
    max_age_secs: i64,
) -> Cookie<'static> {
    Cookie::build(name.to_owned(), token.to_owned())
        .path(path.to_owned())
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(same_site(&config.same_site))
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

/// Access token cookie, sent on every path
pub fn access_cookie(config: &CookieConfig, token: &str, max_age_secs: i64) -> Cookie<'static> {
    token_cookie(config, &config.access_cookie_name, token, "/", max_age_secs)
}

/// Refresh token cookie, scoped to `refresh_cookie_path` when configured
pub fn refresh_cookie(config: &CookieConfig, token: &str, max_age_secs: i64) -> Cookie<'static> {
    let path = config.refresh_cookie_path.as_deref().unwrap_or("/");
    token_cookie(config, &config.refresh_cookie_name, token, path, max_age_secs)
}
