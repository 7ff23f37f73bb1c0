//! Domain types for the MiniMerch site.
//!
//! This module contains the validated value types used by the registration
//! and booking forms. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod cpf;
mod email;
mod phone;

pub use cpf::{Cpf, InvalidCpf, is_valid_cpf};
pub use email::{Email, InvalidEmail};
pub use phone::{InvalidPhone, Phone};
