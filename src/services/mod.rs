//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the directory's business logic so route handlers can
//! stay focused on protocol translation.

pub mod directory;
