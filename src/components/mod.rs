//! Reusable UI components.

pub mod site_header;
