//! Networking for the shortening service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `shortener::Transport` seam over `gloo-net` and
//! resolves the endpoint baked into the WASM build.

pub mod api;
