pub mod estimator;
pub mod settings;

pub use estimator::EstimatorPage;
pub use settings::SettingsPage;
