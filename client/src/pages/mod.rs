//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! A page owns route-scoped state and delegates rendering to `components`.

pub mod home;
