pub mod case;
pub mod client;
pub mod repositories;
