use axum::{extract::State, response::IntoResponse};

use crate::{
    content::Portfolio,
    routes::AppState,
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "hero.html")]
pub struct HeroTemplate<'a> {
    pub layout: Layout,
    pub portfolio: &'a Portfolio,
}

pub async fn hero(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(HeroTemplate {
        layout: template.layout(),
        portfolio: &app.portfolio,
    })
}

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub layout: Layout,
    pub portfolio: &'a Portfolio,
}

pub async fn about(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(AboutTemplate {
        layout: template.layout(),
        portfolio: &app.portfolio,
    })
}

#[derive(askama::Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate<'a> {
    pub layout: Layout,
    pub portfolio: &'a Portfolio,
}

pub async fn projects(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(ProjectsTemplate {
        layout: template.layout(),
        portfolio: &app.portfolio,
    })
}

#[derive(askama::Template)]
#[template(path = "skills.html")]
pub struct SkillsTemplate<'a> {
    pub layout: Layout,
    pub portfolio: &'a Portfolio,
}

pub async fn skills(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(SkillsTemplate {
        layout: template.layout(),
        portfolio: &app.portfolio,
    })
}

#[derive(askama::Template)]
#[template(path = "resume.html")]
pub struct ResumeTemplate<'a> {
    pub layout: Layout,
    pub portfolio: &'a Portfolio,
}

pub async fn resume(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    template.render(ResumeTemplate {
        layout: template.layout(),
        portfolio: &app.portfolio,
    })
}
