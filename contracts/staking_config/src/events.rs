use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the tier table is bootstrapped with its defaults.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub tier_count: u32,
    pub timestamp: u64,
}

/// Fired when the admin appends a tier.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierAddedEvent {
    pub tier_id: u32,
    pub min_duration: u64,
    pub multiplier_bps: u32,
    pub name: Symbol,
    pub timestamp: u64,
}

/// Fired when the admin rewrites an existing tier.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierUpdatedEvent {
    pub tier_id: u32,
    pub min_duration: u64,
    pub multiplier_bps: u32,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, tier_count: u32) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            tier_count,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tier_added(
    env: &Env,
    tier_id: u32,
    min_duration: u64,
    multiplier_bps: u32,
    name: Symbol,
) {
    env.events().publish(
        (symbol_short!("TIER_ADD"),),
        TierAddedEvent {
            tier_id,
            min_duration,
            multiplier_bps,
            name,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tier_updated(env: &Env, tier_id: u32, min_duration: u64, multiplier_bps: u32) {
    env.events().publish(
        (symbol_short!("TIER_UPD"),),
        TierUpdatedEvent {
            tier_id,
            min_duration,
            multiplier_bps,
            timestamp: env.ledger().timestamp(),
        },
    );
}
