use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the treasury is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_token: Address,
    pub daily_limit: i128,
    pub timestamp: u64,
}

/// Fired when a pool's authorization is granted or revoked.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolAuthorizedEvent {
    pub pool: Address,
    pub authorized: bool,
    pub timestamp: u64,
}

/// Fired for every distribution counted against the daily cap.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsDistributedEvent {
    pub pool: Address,
    pub amount: i128,
    pub spent_today: i128,
    pub timestamp: u64,
}

/// Fired when tokens are deposited into the float.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub from: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired on an admin emergency withdrawal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the admin changes the daily cap.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DailyLimitSetEvent {
    pub old_limit: i128,
    pub new_limit: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, reward_token: Address, daily_limit: i128) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            reward_token,
            daily_limit,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_authorized(env: &Env, pool: Address, authorized: bool) {
    env.events().publish(
        (symbol_short!("POOL_AUTH"), pool.clone()),
        PoolAuthorizedEvent {
            pool,
            authorized,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_distributed(env: &Env, pool: Address, amount: i128, spent_today: i128) {
    env.events().publish(
        (symbol_short!("DIST"), pool.clone()),
        RewardsDistributedEvent {
            pool,
            amount,
            spent_today,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposited(env: &Env, from: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), from.clone()),
        DepositedEvent {
            from,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), to.clone()),
        WithdrawnEvent {
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_daily_limit_set(env: &Env, old_limit: i128, new_limit: i128) {
    env.events().publish(
        (symbol_short!("LIMIT"),),
        DailyLimitSetEvent {
            old_limit,
            new_limit,
            timestamp: env.ledger().timestamp(),
        },
    );
}
