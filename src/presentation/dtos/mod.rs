pub mod page_form_dto;
pub mod page_query_dto;
