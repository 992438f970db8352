pub mod follow_response;
pub mod profile_dto;
pub mod profile_response;
pub mod search_response;
pub mod search_users_query;
pub mod update_profile_request;
#[allow(clippy::module_inception)]
pub mod users;
