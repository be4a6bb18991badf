//! Backend API client

pub mod generate;
