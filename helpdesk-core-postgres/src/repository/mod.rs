pub mod db_init;
pub mod ticket_repository;
pub mod user_repository;
