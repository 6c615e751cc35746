pub mod modal_generate_response;
