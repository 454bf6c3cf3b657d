//! Shared utilities for the StakeForge contract suite.
//!
//! This crate provides:
//! - [`admin`] – instance-storage admin bookkeeping with two-step transfer.
//! - [`interfaces`] – the narrow capability contracts the staking pool
//!   depends on (ownership registry, tier table), so the pool can be
//!   exercised against any contract registered in a test environment.
//! - [`math`] – basis-point arithmetic used by reward computation.

#![no_std]

pub mod admin;
pub mod interfaces;
pub mod math;

pub use interfaces::TierAssignment;
