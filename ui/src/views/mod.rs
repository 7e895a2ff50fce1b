mod analytics;
mod emissions;
mod overview;
mod portfolio;
mod reports;

pub use analytics::Analytics;
pub use emissions::Emissions;
pub use overview::Overview;
pub use portfolio::Portfolio;
pub use reports::Reports;
