//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Which page renders is decided by `router::dispatch`.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod signup;
