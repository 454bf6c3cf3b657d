use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the distributor is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_token: Address,
    pub timestamp: u64,
}

/// Fired when a pool's emission share changes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationSetEvent {
    pub pool: Address,
    pub bps: u32,
    pub total_allocation: u32,
    pub timestamp: u64,
}

/// Fired when a payout is queued.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributionScheduledEvent {
    pub id: u64,
    pub pool: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a queued payout is executed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributionExecutedEvent {
    pub id: u64,
    pub pool: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, reward_token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            reward_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_allocation_set(env: &Env, pool: Address, bps: u32, total_allocation: u32) {
    env.events().publish(
        (symbol_short!("ALLOC"), pool.clone()),
        AllocationSetEvent {
            pool,
            bps,
            total_allocation,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_distribution_scheduled(env: &Env, id: u64, pool: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("SCHED"), pool.clone()),
        DistributionScheduledEvent {
            id,
            pool,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_distribution_executed(env: &Env, id: u64, pool: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("EXEC"), pool.clone()),
        DistributionExecutedEvent {
            id,
            pool,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
