pub mod api_error;
pub mod list_state;
pub mod paging;
