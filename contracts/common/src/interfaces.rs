//! Capability contracts the staking pool calls out to.
//!
//! The pool never links the implementing crates; it holds an address per
//! collaborator and invokes it through these clients. Tests register any
//! conforming contract (the real `forge_nft` / `staking_config`, or a
//! purpose-built fake) in the in-memory environment.

use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Tier resolved for an elapsed staking duration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierAssignment {
    pub tier_id: u32,
    pub multiplier_bps: u32,
}

/// Token-ownership registry: who owns a token, and custody transfer.
#[contractclient(name = "OwnershipClient")]
pub trait OwnershipRegistry {
    /// Current owner of `token_id`. Fails when the token does not exist.
    fn owner_of(env: Env, token_id: u32) -> Address;

    /// Moves `token_id` from `from` to `to`. Requires `from`'s
    /// authorization and fails when `from` is not the current owner.
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
}

/// Duration-to-multiplier floor lookup.
#[contractclient(name = "TierTableClient")]
pub trait TierTable {
    /// The tier with the greatest minimum duration not exceeding
    /// `duration` seconds.
    fn get_tier_for_duration(env: Env, duration: u64) -> TierAssignment;
}
