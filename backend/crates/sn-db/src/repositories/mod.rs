pub mod follow_repository;
pub mod profile_repository;
