// Application layer - Section view models and use cases
pub mod contact_service;
pub mod content_source;
pub mod fetch;
pub mod portfolio_service;
pub mod section;
