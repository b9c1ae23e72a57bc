//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `toast`, `login`) so pages
//! depend on small focused models. Reactive wrappers (`RwSignal`) are added
//! by `App` when it provides contexts; the models here stay plain data.

pub mod auth;
pub mod login;
pub mod session;
pub mod toast;
