// Opportunities: catalog loading, user-type filtering and fit scoring.

pub mod catalog;
pub mod filters;
pub mod fit_scoring;
pub mod handlers;
pub mod models;
