// Application state for HTTP handlers
use crate::application::contact_service::ContactService;
use crate::application::portfolio_service::PortfolioService;
use crate::infrastructure::config::SiteSettings;

#[derive(Clone)]
pub struct AppState {
    pub portfolio_service: PortfolioService,
    pub contact_service: ContactService,
    pub site: SiteSettings,
}
