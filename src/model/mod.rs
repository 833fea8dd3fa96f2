//! Application models and type definitions.
//!
//! This module contains data models for the registrar backend, including database model
//! type aliases and the input payloads accepted by the service layer. These models bridge
//! the gap between database entities and the services that operate on them.

pub mod db;
pub mod dto;
