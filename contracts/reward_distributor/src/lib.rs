#![no_std]

pub mod events;

use common::admin;
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol,
};

// ── Storage keys ────────────────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const TOTAL_ALLOCATION: Symbol = symbol_short!("TOT_ALLOC");
const DISTRIBUTION_CTR: Symbol = symbol_short!("DIST_CTR");
const PENDING_COUNT: Symbol = symbol_short!("PEND_CNT");

// Tuple keys:  (prefix, pool_address) and (prefix, distribution_id)
const ALLOCATION: Symbol = symbol_short!("ALLOC");
const DISTRIBUTION: Symbol = symbol_short!("DIST");

/// 10_000 bps = 100 %: allocations across all pools may never sum past this.
pub const MAX_TOTAL_ALLOCATION_BPS: u32 = 10_000;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    AllocationExceeded = 5,
    PoolNotAllocated = 6,
    DistributionNotFound = 7,
    AlreadyExecuted = 8,
    TransferFailed = 9,
}

// ── Types ────────────────────────────────────────────────────────────────────

/// One scheduled payout. Stays on record after execution for auditing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Distribution {
    pub id: u64,
    pub pool: Address,
    pub amount: i128,
    pub scheduled_at: u64,
    pub executed: bool,
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Splits reward emissions across staking pools. Each pool carries a
/// basis-point allocation; the allocations may never sum past 100 %.
/// Payouts are scheduled first and executed separately, so the emission
/// plan can be reviewed before tokens move.
#[contract]
pub struct RewardDistributorContract;

#[contractimpl]
impl RewardDistributorContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    pub fn initialize(env: Env, admin: Address, reward_token: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        admin::set_admin(&env, &admin);

        events::publish_initialized(&env, admin, reward_token);

        Ok(())
    }

    // ── Allocation management ───────────────────────────────────────────────

    /// Sets a pool's share of emissions. Setting zero removes the pool.
    /// The running total across all pools is capped at 100 %.
    pub fn set_allocation(
        env: Env,
        caller: Address,
        pool: Address,
        bps: u32,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if bps > MAX_TOTAL_ALLOCATION_BPS {
            return Err(ContractError::InvalidInput);
        }

        let key = (ALLOCATION, pool.clone());
        let previous: u32 = env.storage().persistent().get(&key).unwrap_or(0);
        let total: u32 = env
            .storage()
            .instance()
            .get(&TOTAL_ALLOCATION)
            .unwrap_or(0);

        let new_total = total.saturating_sub(previous) + bps;
        if new_total > MAX_TOTAL_ALLOCATION_BPS {
            return Err(ContractError::AllocationExceeded);
        }

        if bps == 0 {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, &bps);
        }
        env.storage().instance().set(&TOTAL_ALLOCATION, &new_total);

        events::publish_allocation_set(&env, pool, bps, new_total);

        Ok(())
    }

    pub fn get_allocation(env: Env, pool: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&(ALLOCATION, pool))
            .unwrap_or(0)
    }

    pub fn get_total_allocation(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&TOTAL_ALLOCATION)
            .unwrap_or(0)
    }

    // ── Distribution scheduling ─────────────────────────────────────────────

    /// Queues a payout to an allocated pool. Returns the distribution id.
    pub fn schedule_distribution(
        env: Env,
        caller: Address,
        pool: Address,
        amount: i128,
    ) -> Result<u64, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        if Self::get_allocation(env.clone(), pool.clone()) == 0 {
            return Err(ContractError::PoolNotAllocated);
        }

        let id: u64 = env
            .storage()
            .instance()
            .get(&DISTRIBUTION_CTR)
            .unwrap_or(0u64)
            + 1;
        env.storage().instance().set(&DISTRIBUTION_CTR, &id);

        let distribution = Distribution {
            id,
            pool: pool.clone(),
            amount,
            scheduled_at: env.ledger().timestamp(),
            executed: false,
        };
        env.storage()
            .persistent()
            .set(&(DISTRIBUTION, id), &distribution);

        let pending: u32 = env.storage().instance().get(&PENDING_COUNT).unwrap_or(0);
        env.storage().instance().set(&PENDING_COUNT, &(pending + 1));

        events::publish_distribution_scheduled(&env, id, pool, amount);

        Ok(id)
    }

    /// Pays out a scheduled distribution from the contract's float.
    pub fn execute_distribution(env: Env, caller: Address, id: u64) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut distribution: Distribution = env
            .storage()
            .persistent()
            .get(&(DISTRIBUTION, id))
            .ok_or(ContractError::DistributionNotFound)?;
        if distribution.executed {
            return Err(ContractError::AlreadyExecuted);
        }

        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        token::Client::new(&env, &reward_token)
            .try_transfer(
                &env.current_contract_address(),
                &distribution.pool,
                &distribution.amount,
            )
            .map_err(|_| ContractError::TransferFailed)?
            .map_err(|_| ContractError::TransferFailed)?;

        distribution.executed = true;
        env.storage()
            .persistent()
            .set(&(DISTRIBUTION, id), &distribution);

        let pending: u32 = env.storage().instance().get(&PENDING_COUNT).unwrap_or(0);
        env.storage()
            .instance()
            .set(&PENDING_COUNT, &pending.saturating_sub(1));

        events::publish_distribution_executed(&env, id, distribution.pool, distribution.amount);

        Ok(())
    }

    // ── Views ───────────────────────────────────────────────────────────────

    pub fn get_distribution(env: Env, id: u64) -> Result<Distribution, ContractError> {
        env.storage()
            .persistent()
            .get(&(DISTRIBUTION, id))
            .ok_or(ContractError::DistributionNotFound)
    }

    /// Total distributions ever scheduled.
    pub fn get_distribution_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DISTRIBUTION_CTR)
            .unwrap_or(0)
    }

    /// Scheduled distributions not yet executed.
    pub fn get_pending_count(env: Env) -> u32 {
        env.storage().instance().get(&PENDING_COUNT).unwrap_or(0)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !admin::is_admin(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}
