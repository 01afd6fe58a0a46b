use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV: &[NavItem] = &[
    NavItem {
        path: "/",
        label: "Home",
    },
    NavItem {
        path: "/about",
        label: "About",
    },
    NavItem {
        path: "/projects",
        label: "Projects",
    },
    NavItem {
        path: "/skills",
        label: "Skills",
    },
    NavItem {
        path: "/resume",
        label: "Resume",
    },
    NavItem {
        path: "/contact",
        label: "Contact",
    },
];

/// Values every page shares through `base.html`.
pub struct Layout {
    pub current_path: String,
    pub brand: String,
    pub owner: String,
    pub toast: Option<String>,
}

impl Layout {
    pub fn nav(&self) -> &'static [NavItem] {
        NAV
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}

pub struct Template {
    current_path: String,
    brand: String,
    owner: String,
}

impl Template {
    pub fn layout(&self) -> Layout {
        Layout {
            current_path: self.current_path.to_owned(),
            brand: self.brand.to_owned(),
            owner: self.owner.to_owned(),
            toast: None,
        }
    }

    pub fn layout_with_toast(&self, toast: String) -> Layout {
        Layout {
            toast: Some(toast),
            ..self.layout()
        }
    }

    /// Renders a partial for embedding; a failed render is logged and yields
    /// nothing.
    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => {
                tracing::error!(err = %err, path = %self.current_path, "failed to render partial");

                String::new()
            }
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, path = %self.current_path, "failed to render template");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            current_path: parts.uri.path().to_owned(),
            brand: state.portfolio.owner.brand.to_owned(),
            owner: state.portfolio.owner.name.to_owned(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-success.html")]
pub struct ToastSuccessTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}
