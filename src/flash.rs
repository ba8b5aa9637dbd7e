//! One-shot notices carried across a redirect in a cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};

const FLASH_COOKIE: &str = "flash";

/// Notice shown after a successful save.
pub const SAVED: &str = "Saved!";

pub fn set(jar: CookieJar, message: &str) -> CookieJar {
    let mut cookie = Cookie::new(FLASH_COOKIE, message.to_owned());
    cookie.set_path("/");
    cookie.set_http_only(true);
    jar.add(cookie)
}

/// Reads the pending notice and clears it so it renders only once.
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    let Some(message) = jar.get(FLASH_COOKIE).map(|c| c.value().to_owned()) else {
        return (jar, None);
    };
    let mut cookie = Cookie::from(FLASH_COOKIE);
    cookie.set_path("/");
    (jar.remove(cookie), Some(message))
}
