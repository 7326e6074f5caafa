//! Passage retrieval client for copper-courier.
//!
//! This crate provides the [`RetrievalService`] seam over the hosted
//! document-search service, its reqwest-backed [`DiscoveryClient`], and the
//! immutable [`QueryScope`] that fixes the environment, collection, and
//! configuration every query runs against.

pub mod client;
pub mod error;
pub mod query;

pub use client::{DiscoveryClient, RetrievalService};
pub use error::RetrievalError;
pub use query::{Passage, QueryRequest, QueryResponse, QueryScope};
