pub mod api_response;
pub mod author_response;
