//! Core packet components

pub mod layout;
pub mod literal;
pub mod opcodes;
pub mod packet;
pub mod payload;
