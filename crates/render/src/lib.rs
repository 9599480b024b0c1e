//! Client for the external headless-browser PDF renderer.
//!
//! The renderer is a collaborator service: HTML goes in, PDF bytes come
//! out. This crate owns only the call, credential injection, and error
//! mapping — layout and rendering are entirely the renderer's problem.

pub mod client;

pub use client::{RendererClient, RendererError};
