//! leash_activity_core - Pure no_std logic for the activity parameter menu
//!
//! This crate contains the platform-agnostic pieces of the activity engine
//! that can be tested on host without any feature flags or embedded
//! dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: No std library dependencies outside tests
//! - **Trait abstractions**: Transport and parameter store injected via traits
//!
//! # Modules
//!
//! - [`limits`]: Limits catalog, descriptors and the activity resolver
//! - [`editor`]: Per-slot value editing and display rendering
//! - [`navigation`]: Visibility-aware cursor over the slot table
//! - [`messages`]: Synchronization message types
//! - [`traits`]: Transport and parameter sink abstractions with mocks
//! - [`parameters`]: Local parameter store

#![cfg_attr(not(test), no_std)]

pub mod editor;
pub mod limits;
pub mod messages;
pub mod navigation;
pub mod parameters;
pub mod traits;
