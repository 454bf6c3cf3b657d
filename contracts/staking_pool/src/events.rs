use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub nft_contract: Address,
    pub reward_token: Address,
    pub tier_config: Address,
    pub reward_rate: i128,
    pub min_stake_duration: u64,
    pub timestamp: u64,
}

/// Fired for every token that enters the pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub token_id: u32,
    pub total_staked: u32,
    pub timestamp: u64,
}

/// Fired for every token that leaves the pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub token_id: u32,
    pub reward_paid: i128,
    pub total_staked: u32,
    pub timestamp: u64,
}

/// Fired on every positive reward settlement.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimedEvent {
    pub owner: Address,
    pub token_id: u32,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the admin pauses or resumes staking.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingEnabledSetEvent {
    pub enabled: bool,
    pub timestamp: u64,
}

/// Fired when the admin changes the per-second reward rate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub new_rate: i128,
    pub timestamp: u64,
}

/// Fired when the admin changes the global lock floor.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinDurationSetEvent {
    pub new_duration: u64,
    pub timestamp: u64,
}

/// Fired when the admin flips whether claims are gated by the lock floor.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimPolicySetEvent {
    pub claim_requires_min_duration: bool,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    nft_contract: Address,
    reward_token: Address,
    tier_config: Address,
    reward_rate: i128,
    min_stake_duration: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            nft_contract,
            reward_token,
            tier_config,
            reward_rate,
            min_stake_duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, staker: Address, token_id: u32, total_staked: u32) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            token_id,
            total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    staker: Address,
    token_id: u32,
    reward_paid: i128,
    total_staked: u32,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            staker,
            token_id,
            reward_paid,
            total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_claimed(env: &Env, owner: Address, token_id: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), owner.clone()),
        RewardsClaimedEvent {
            owner,
            token_id,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staking_enabled_set(env: &Env, enabled: bool) {
    env.events().publish(
        (symbol_short!("ENABLED"),),
        StakingEnabledSetEvent {
            enabled,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RWD_RATE"),),
        RewardRateSetEvent {
            new_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_min_duration_set(env: &Env, new_duration: u64) {
    env.events().publish(
        (symbol_short!("MIN_DUR"),),
        MinDurationSetEvent {
            new_duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_claim_policy_set(env: &Env, claim_requires_min_duration: bool) {
    env.events().publish(
        (symbol_short!("CLM_GATE"),),
        ClaimPolicySetEvent {
            claim_requires_min_duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
