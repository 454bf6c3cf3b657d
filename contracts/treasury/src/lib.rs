#![no_std]

pub mod events;

use common::admin;
use soroban_sdk::{
    contract, contractimpl, symbol_short, token, Address, Env, Symbol,
};

// ── Storage keys ────────────────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const DAILY_LIMIT: Symbol = symbol_short!("DAY_LIM");
const WINDOW_START: Symbol = symbol_short!("WIN_STRT");
const SPENT_TODAY: Symbol = symbol_short!("SPENT");
const TOTAL_DISTRIBUTED: Symbol = symbol_short!("TOT_DIST");

// Per-pool authorization uses tuple keys:  (prefix, pool_address)
const AUTHORIZED: Symbol = symbol_short!("AUTH");

const SECONDS_PER_DAY: u64 = 86_400;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    PoolNotAuthorized = 5,
    DailyLimitExceeded = 6,
    TransferFailed = 7,
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Holds the reward-token float and refills staking pools under a rolling
/// daily cap. The spent counter resets once a full day has passed since
/// the window opened; distributions inside the window accumulate against
/// the limit.
#[contract]
pub struct TreasuryContract;

#[contractimpl]
impl TreasuryContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    pub fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        daily_limit: i128,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if daily_limit <= 0 {
            return Err(ContractError::InvalidInput);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        env.storage().instance().set(&DAILY_LIMIT, &daily_limit);
        env.storage()
            .instance()
            .set(&WINDOW_START, &env.ledger().timestamp());
        admin::set_admin(&env, &admin);

        events::publish_initialized(&env, admin, reward_token, daily_limit);

        Ok(())
    }

    // ── Pool authorization ──────────────────────────────────────────────────

    /// Grants or revokes a pool's right to receive distributions.
    pub fn authorize_pool(
        env: Env,
        caller: Address,
        pool: Address,
        authorized: bool,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage()
            .persistent()
            .set(&(AUTHORIZED, pool.clone()), &authorized);

        events::publish_pool_authorized(&env, pool, authorized);

        Ok(())
    }

    pub fn is_pool_authorized(env: Env, pool: Address) -> bool {
        env.storage()
            .persistent()
            .get(&(AUTHORIZED, pool))
            .unwrap_or(false)
    }

    // ── Distribution ────────────────────────────────────────────────────────

    /// Sends `amount` reward tokens to an authorized pool, counting it
    /// against the current day's cap.
    pub fn distribute_rewards(
        env: Env,
        caller: Address,
        pool: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        if !Self::is_pool_authorized(env.clone(), pool.clone()) {
            return Err(ContractError::PoolNotAuthorized);
        }

        let now = env.ledger().timestamp();
        let window_start: u64 = env.storage().instance().get(&WINDOW_START).unwrap_or(0);
        let mut spent: i128 = env.storage().instance().get(&SPENT_TODAY).unwrap_or(0);

        if now.saturating_sub(window_start) >= SECONDS_PER_DAY {
            spent = 0;
            env.storage().instance().set(&WINDOW_START, &now);
        }

        let daily_limit: i128 = env.storage().instance().get(&DAILY_LIMIT).unwrap_or(0);
        let new_spent = spent.saturating_add(amount);
        if new_spent > daily_limit {
            return Err(ContractError::DailyLimitExceeded);
        }

        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        token::Client::new(&env, &reward_token)
            .try_transfer(&env.current_contract_address(), &pool, &amount)
            .map_err(|_| ContractError::TransferFailed)?
            .map_err(|_| ContractError::TransferFailed)?;

        env.storage().instance().set(&SPENT_TODAY, &new_spent);
        let total: i128 = env
            .storage()
            .instance()
            .get(&TOTAL_DISTRIBUTED)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&TOTAL_DISTRIBUTED, &total.saturating_add(amount));

        events::publish_rewards_distributed(&env, pool, amount, new_spent);

        Ok(())
    }

    // ── Token management ────────────────────────────────────────────────────

    /// Pulls `amount` reward tokens from `from` into the float.
    pub fn deposit_tokens(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        token::Client::new(&env, &reward_token)
            .try_transfer(&from, &env.current_contract_address(), &amount)
            .map_err(|_| ContractError::TransferFailed)?
            .map_err(|_| ContractError::TransferFailed)?;

        events::publish_deposited(&env, from, amount);

        Ok(())
    }

    /// Emergency escape hatch: moves tokens out without touching the daily
    /// accounting.
    pub fn withdraw_tokens(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        token::Client::new(&env, &reward_token)
            .try_transfer(&env.current_contract_address(), &to, &amount)
            .map_err(|_| ContractError::TransferFailed)?
            .map_err(|_| ContractError::TransferFailed)?;

        events::publish_withdrawn(&env, to, amount);

        Ok(())
    }

    // ── Configuration ───────────────────────────────────────────────────────

    pub fn set_daily_limit(
        env: Env,
        caller: Address,
        new_limit: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if new_limit <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let old_limit: i128 = env.storage().instance().get(&DAILY_LIMIT).unwrap_or(0);
        env.storage().instance().set(&DAILY_LIMIT, &new_limit);

        events::publish_daily_limit_set(&env, old_limit, new_limit);

        Ok(())
    }

    // ── Views ───────────────────────────────────────────────────────────────

    /// The treasury's current reward-token balance.
    pub fn get_balance(env: Env) -> Result<i128, ContractError> {
        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        Ok(token::Client::new(&env, &reward_token).balance(&env.current_contract_address()))
    }

    pub fn get_daily_limit(env: Env) -> i128 {
        env.storage().instance().get(&DAILY_LIMIT).unwrap_or(0)
    }

    /// Amount counted against the cap in the current window. Reads as zero
    /// once the window has lapsed, even before the next distribution
    /// resets the stored counter.
    pub fn get_spent_today(env: Env) -> i128 {
        let window_start: u64 = env.storage().instance().get(&WINDOW_START).unwrap_or(0);
        if env.ledger().timestamp().saturating_sub(window_start) >= SECONDS_PER_DAY {
            return 0;
        }
        env.storage().instance().get(&SPENT_TODAY).unwrap_or(0)
    }

    pub fn get_total_distributed(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&TOTAL_DISTRIBUTED)
            .unwrap_or(0)
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
