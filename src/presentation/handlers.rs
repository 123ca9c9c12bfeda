// HTTP request handlers
use crate::application::contact_service::{ContactForm, ContactStatus};
use crate::application::portfolio_service::PortfolioPage;
use crate::application::section::Section;
use crate::domain::contact::ContactSubmission;
use crate::domain::profile::ProfileView;
use crate::infrastructure::html_page::render_page;
use crate::presentation::app_state::AppState;
use crate::presentation::theme::{Theme, ThemeContext};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Raw strings so an unknown theme degrades to the default instead of a 400
#[derive(Debug, Deserialize, Default)]
pub struct PageQuery {
    pub theme: Option<String>,
}

impl PageQuery {
    pub fn theme(&self) -> ThemeContext {
        ThemeContext::new(Theme::from_param(self.theme.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub theme: Option<String>,
}

impl ContactInput {
    pub fn theme(&self) -> ThemeContext {
        ThemeContext::new(Theme::from_param(self.theme.as_deref()))
    }
}

/// Page as JSON, with the profile already resolved for display
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub about: ProfileView,
    pub defaulted: Vec<Section>,
    #[serde(flatten)]
    pub page: PortfolioPage,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the portfolio page
pub async fn index(
    Query(query): Query<PageQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let theme = query.theme();
    let page = state.portfolio_service.load_page().await;

    Html(render_page(&page, &state.site, theme, &ContactForm::new()))
}

/// Resolved sections as JSON
pub async fn page_json(State(state): State<Arc<AppState>>) -> Json<PageResponse> {
    let page = state.portfolio_service.load_page().await;

    Json(PageResponse {
        about: page.about(),
        defaulted: page.defaulted_sections(),
        page,
    })
}

/// Run the contact flow and re-render the page with its outcome
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Form(input): Form<ContactInput>,
) -> impl IntoResponse {
    let theme = input.theme();
    let mut form = ContactForm::with_fields(ContactSubmission::new(input.name, input.email, input.message));

    let status = match state.contact_service.submit(&mut form).await {
        Ok(ContactStatus::Sent) => StatusCode::OK,
        Ok(_) => StatusCode::BAD_GATEWAY,
        Err(rejection) => {
            tracing::info!("Contact form rejected: {}", rejection);
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };

    let page = state.portfolio_service.load_page().await;
    (status, Html(render_page(&page, &state.site, theme, &form)))
}
