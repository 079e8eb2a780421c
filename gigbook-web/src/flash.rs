//! One-shot flash messages
//!
//! A flash is stored in the `flash` cookie as a form-urlencoded
//! `kind=...&message=...` pair when a handler redirects, and cleared by the
//! next page that renders it.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use url::form_urlencoded;

const COOKIE_NAME: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(FlashKind::Success),
            "error" => Some(FlashKind::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("kind", self.kind.as_str())
            .append_pair("message", &self.message)
            .finish()
    }

    fn decode(raw: &str) -> Option<Self> {
        let mut kind = None;
        let mut message = None;
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "kind" => kind = FlashKind::parse(&value),
                "message" => message = Some(value.into_owned()),
                _ => {}
            }
        }
        Some(Self {
            kind: kind?,
            message: message?,
        })
    }
}

/// Attach a flash to the response cookies
pub fn set(jar: CookieJar, flash: Flash) -> CookieJar {
    jar.add(
        Cookie::build((COOKIE_NAME, flash.encode()))
            .path("/")
            .http_only(true),
    )
}

/// Read and clear the pending flash, if any
///
/// An unreadable cookie is cleared as well.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let pending = jar.get(COOKIE_NAME).map(|c| Flash::decode(c.value()));
    match pending {
        Some(flash) => (jar.remove(Cookie::build(COOKIE_NAME).path("/")), flash),
        None => (jar, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_take() {
        let jar = set(
            CookieJar::new(),
            Flash::success("Venue The Musical Hop & Co was successfully listed!"),
        );
        let (_, flash) = take(jar);
        assert_eq!(
            flash,
            Some(Flash::success("Venue The Musical Hop & Co was successfully listed!"))
        );
    }

    #[test]
    fn test_garbage_cookie_is_ignored() {
        let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, "kind=shout"));
        let (_, flash) = take(jar);
        assert!(flash.is_none());
    }
}
