pub mod indicators;
pub mod list_query;
