pub mod postgres_case_repository;
pub mod postgres_client_repository;

pub use postgres_case_repository::PostgresCaseRepository;
pub use postgres_client_repository::PostgresClientRepository;
