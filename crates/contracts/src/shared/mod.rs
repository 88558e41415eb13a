pub mod field_value;
pub mod list_page;
