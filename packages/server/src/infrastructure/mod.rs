//! Infrastructure layer: storage implementations, wire DTOs and the
//! background sweep scheduler.

pub mod dto;
pub mod repository;
pub mod scheduler;
