pub mod error_banner;
pub mod id_select;
pub mod name_list;
pub mod page_header;
pub mod pagination_controls;
