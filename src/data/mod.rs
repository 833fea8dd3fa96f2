//! Database repositories.
//!
//! Each repository wraps a set of queries for one table. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs against a plain connection or
//! inside a transaction; multi-table workflows open the transaction at the service
//! layer and hand it down.

pub mod attendance;
pub mod counter;
pub mod id_history;
pub mod school;
pub mod staff;
pub mod student;
pub mod transfer;
pub mod user_account;
