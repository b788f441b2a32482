pub mod dashboard_repository;
pub mod search_handler;
pub mod star_repository;
