//! # Session Cookie
//!
//! Resolves the opaque session identifier from the request's cookie jar,
//! minting a fresh one (and the matching `Set-Cookie`) when absent.
//! Only the identifier travels in the cookie; session values live in the
//! injected `SessionStore`.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "bloom_session";

/// Resolve the session id for this request.
///
/// Returns the id and a jar that carries the `Set-Cookie` when a new
/// session was minted. The cookie is HttpOnly and SameSite=Lax but NOT
/// Secure; set Secure before serving over HTTPS in production.
pub fn resolve_session(jar: CookieJar) -> (String, CookieJar) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return (cookie.value().to_string(), jar);
    }

    let session_id = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, session_id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(false)
        .build();

    (session_id, jar.add(cookie))
}
