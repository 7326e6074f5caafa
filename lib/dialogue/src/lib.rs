//! Dialogue engine client for copper-courier.
//!
//! This crate provides the [`DialogueService`] seam over the hosted
//! dialogue engine (workspace lookup, workspace listing, per-turn message
//! exchange), its reqwest-backed [`DialogueClient`], and the once-per-process
//! [`WorkspaceResolver`].

pub mod client;
pub mod error;
pub mod workspace;

pub use client::{DialogueClient, DialogueOutput, DialogueService, DialogueTurn, Workspace};
pub use error::DialogueError;
pub use workspace::WorkspaceResolver;
