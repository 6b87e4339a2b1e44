pub mod migrations;
pub mod persistence;
