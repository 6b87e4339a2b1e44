pub mod case_repository;
pub mod client_repository;

pub use case_repository::CaseRepository;
pub use client_repository::ClientRepository;

#[cfg(test)]
pub use case_repository::MockCaseRepository;
#[cfg(test)]
pub use client_repository::MockClientRepository;
