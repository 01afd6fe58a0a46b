use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use folio_contact::{ContactDesk, Relay};

use crate::{
    content::Portfolio,
    template::{NotFoundTemplate, Template},
};

mod contact;
mod health;
mod pages;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    pub desk: Arc<ContactDesk>,
}

impl AppState {
    pub fn new(config: &crate::config::Config, portfolio: Portfolio, relay: Arc<dyn Relay>) -> Self {
        let desk = ContactDesk::new(relay, config.form_options(), config.visitor_idle_after())
            .with_max_visits(config.contact.max_visits);

        Self {
            portfolio: Arc::new(portfolio),
            desk: Arc::new(desk),
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate {
            layout: template.layout(),
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(pages::hero))
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/skills", get(pages::skills))
        .route("/resume", get(pages::resume))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/contact/status", get(contact::status))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
