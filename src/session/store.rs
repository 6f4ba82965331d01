use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::Cookie;

/// Cookie store of the request/response being handled.
///
/// Reads see the incoming request cookies; writes are emitted as
/// `Set-Cookie` headers on the response.
pub trait CookieStore {
    /// Value of the named cookie, if present.
    fn get(&self, name: &str) -> Option<String>;

    /// Set (or overwrite) a cookie.
    fn set(&mut self, cookie: Cookie<'static>);

    /// Remove a cookie. `cookie` carries the name and the path to clear.
    fn delete(&mut self, cookie: Cookie<'static>);
}

impl CookieStore for CookieJar {
    fn get(&self, name: &str) -> Option<String> {
        CookieJar::get(self, name).map(|c| c.value().to_string())
    }

    fn set(&mut self, cookie: Cookie<'static>) {
        let jar = std::mem::replace(self, CookieJar::new());
        *self = jar.add(cookie);
    }

    fn delete(&mut self, cookie: Cookie<'static>) {
        let jar = std::mem::replace(self, CookieJar::new());
        *self = jar.remove(cookie);
    }
}
