//! Shared utilities and error types for the reward pool contracts.
//!
//! This crate provides:
//! - [`CommonError`] — standardised error codes shared by every contract.
//! - [`ownable`] — the single-owner access gate.
//!
//! Contract-specific errors can extend the range starting at code **100** and
//! above, ensuring no collisions with the common set.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod ownable;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Standardised error codes shared by every contract in the workspace.
///
/// # Code ranges
/// | Range   | Purpose                       |
/// |---------|-------------------------------|
/// | 1 – 9   | Lifecycle / initialisation    |
/// | 10 – 19 | Authentication & authorisation|
/// | 30 – 39 | Validation / input            |
/// | 100+    | Reserved for contract-specific |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// The contract has not been initialised yet, so no owner exists.
    NotInitialized = 1,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller is not the current owner.
    AccessDenied = 10,

    // ── Validation (30–39) ───────────────────────────────────
    /// The supplied identity can never hold the owner role
    /// (e.g. the contract's own address).
    InvalidAddress = 31,
}
