pub mod confirm;
pub mod file_upload;
pub mod filter_panel;
pub mod form_field;
pub mod list_state;
pub mod pagination_controls;
pub mod stat_card;
