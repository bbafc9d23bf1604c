pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod errors;
pub mod export;
pub mod forms;
pub mod i18n;
pub mod icons;
pub mod list_pipeline;
pub mod list_utils;
pub mod notifications;
pub mod query;
pub mod upload;
pub mod validation;
