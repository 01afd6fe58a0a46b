use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_contact::{ContactForm, ContactSubmission, Error, StatusMessage, Toast};
use serde::Deserialize;

use crate::{
    content::Portfolio,
    routes::AppState,
    template::{Layout, Template, ToastErrorTemplate, ToastSuccessTemplate},
    visitor::Visitor,
};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub layout: Layout,
    pub portfolio: &'a Portfolio,
    pub form: ContactSubmission,
    pub submitting: bool,
    pub status: Option<StatusMessage>,
    pub clear_after_ms: u128,
}

#[derive(askama::Template)]
#[template(path = "partials/contact-status.html")]
pub struct ContactStatusTemplate {
    pub status: Option<StatusMessage>,
    pub clear_after_ms: u128,
}

async fn contact_page<'a>(
    portfolio: &'a Portfolio,
    layout: Layout,
    form: &ContactForm,
) -> ContactTemplate<'a> {
    ContactTemplate {
        layout,
        portfolio,
        form: form.snapshot().await,
        submitting: form.is_submitting(),
        status: form.status().current().await,
        clear_after_ms: form.status().clear_after().as_millis(),
    }
}

fn render_toast(template: &Template, toast: &Toast) -> String {
    if toast.is_positive() {
        template.to_string(ToastSuccessTemplate {
            message: &toast.title,
            description: Some(toast.description.as_str()),
        })
    } else {
        template.to_string(ToastErrorTemplate {
            message: &toast.title,
            description: Some(toast.description.as_str()),
        })
    }
}

/// GET /contact - a form is only kept for visitors who have posted
pub async fn page(template: Template, visitor: Visitor, State(app): State<AppState>) -> Response {
    let page = match app.desk.peek(&visitor.id).await {
        Some(form) => contact_page(&app.portfolio, template.layout(), &form).await,
        None => ContactTemplate {
            layout: template.layout(),
            portfolio: &app.portfolio,
            form: ContactSubmission::default(),
            submitting: false,
            status: None,
            clear_after_ms: app.desk.options().status_clear_after.as_millis(),
        },
    };

    (visitor.into_jar(), template.render(page)).into_response()
}

#[derive(Deserialize, Default)]
pub struct ActionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<ActionInput> for ContactSubmission {
    fn from(input: ActionInput) -> Self {
        ContactSubmission {
            name: input.name.trim().to_owned(),
            email: input.email.trim().to_owned(),
            subject: input.subject.trim().to_owned(),
            message: input.message.trim().to_owned(),
        }
    }
}

pub async fn action(
    template: Template,
    visitor: Visitor,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Response {
    let submission = ContactSubmission::from(input);

    if let Some(field) = submission.invalid_fields().first() {
        let form = app.desk.form(&visitor.id).await;
        if !form.is_submitting() {
            form.fill(submission).await;
        }

        let toast = template.to_string(ToastErrorTemplate {
            message: "Please check the form",
            description: Some(field.hint()),
        });
        let page = contact_page(&app.portfolio, template.layout_with_toast(toast), &form).await;

        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            visitor.into_jar(),
            template.render(page),
        )
            .into_response();
    }

    let (status, toast) = match app.desk.submit(&visitor.id, submission).await {
        Ok(feedback) => (StatusCode::OK, render_toast(&template, &feedback.toast)),
        Err(Error::SubmissionInProgress) => (
            StatusCode::CONFLICT,
            template.to_string(ToastErrorTemplate {
                message: "Hold on ⏳",
                description: Some("Your previous message is still being sent."),
            }),
        ),
        Err(err) => {
            tracing::warn!(visitor = %visitor.id, err = %err, "contact submission refused");

            (
                StatusCode::UNPROCESSABLE_ENTITY,
                template.to_string(ToastErrorTemplate {
                    message: "Please check the form",
                    description: Some(err.to_string().as_str()),
                }),
            )
        }
    };

    let form = app.desk.form(&visitor.id).await;
    let page = contact_page(&app.portfolio, template.layout_with_toast(toast), &form).await;

    (status, visitor.into_jar(), template.render(page)).into_response()
}

/// GET /contact/status - inline status fragment, polled once the clear delay
/// has elapsed
pub async fn status(template: Template, visitor: Visitor, State(app): State<AppState>) -> Response {
    let fragment = match app.desk.peek(&visitor.id).await {
        Some(form) => ContactStatusTemplate {
            status: form.status().current().await,
            clear_after_ms: form.status().clear_after().as_millis(),
        },
        None => ContactStatusTemplate {
            status: None,
            clear_after_ms: app.desk.options().status_clear_after.as_millis(),
        },
    };

    (visitor.into_jar(), template.render(fragment)).into_response()
}
