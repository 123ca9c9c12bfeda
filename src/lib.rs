// Portfolio site - section view models, contact flow and the HTTP surface
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
