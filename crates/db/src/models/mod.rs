//! Row models and request DTOs, one submodule per table.

pub mod order;
pub mod playlist;
pub mod settings;
pub mod tariff;
