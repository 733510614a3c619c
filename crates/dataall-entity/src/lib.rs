//! # dataall-entity
//!
//! Domain entity models for the data.all console. Every struct in this
//! crate is the typed shape of a GraphQL response fragment; unknown enum
//! strings are rejected at deserialization so nothing loosely typed reaches
//! the share controller or the replay manager.

pub mod share;
pub mod user;
