//! MiniMerch site server.
//!
//! Backs the registration and service booking forms of the MiniMerch shop:
//! CPF validation, appointment slots, and the booking calendar.

pub mod domain;
pub mod forms;
pub mod schedule;
pub mod web;
