use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;
use ulid::Ulid;

pub const VISITOR_COOKIE: &str = "folio_visitor";

/// Anonymous visitor identified by a ULID cookie.
///
/// A missing or malformed cookie gets a fresh id; the cookie is only sent back
/// when it was (re)issued, through [`Visitor::into_jar`].
pub struct Visitor {
    pub id: String,
    jar: CookieJar,
}

impl Visitor {
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Visitor {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let known = jar
            .get(VISITOR_COOKIE)
            .map(|c| c.value().to_owned())
            .filter(|id| Ulid::from_string(id).is_ok());

        if let Some(id) = known {
            return Ok(Self { id, jar });
        }

        let id = Ulid::new().to_string();
        let jar = jar.add(
            Cookie::build((VISITOR_COOKIE, id.to_owned()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        );

        Ok(Self { id, jar })
    }
}
