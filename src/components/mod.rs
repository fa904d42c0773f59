//! Reusable panel components.

pub mod filter_panel;
