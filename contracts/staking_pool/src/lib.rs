#![no_std]

pub mod events;
pub mod rewards;

use common::{admin, interfaces::OwnershipClient, interfaces::TierTableClient};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol, Vec,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const NFT_CONTRACT: Symbol = symbol_short!("NFT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const TIER_CONFIG: Symbol = symbol_short!("TIER_CFG");
const REWARD_RATE: Symbol = symbol_short!("RWD_RATE");
const MIN_DURATION: Symbol = symbol_short!("MIN_DUR");
const CLAIM_GATED: Symbol = symbol_short!("CLM_GATE");
const ENABLED: Symbol = symbol_short!("ENABLED");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");

// Per-token records and the per-owner enumeration index use tuple keys.
const STAKE: Symbol = symbol_short!("STK");
const OWNED_STAKES: Symbol = symbol_short!("OWN_TOKS");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    StakingDisabled = 5,
    AlreadyStaked = 6,
    NotStaked = 7,
    NotOwner = 8,
    MinDurationNotMet = 9,
    ClockRegression = 10,
    ExternalTransferFailed = 11,
    ExternalCreditFailed = 12,
    Overflow = 13,
    TierLookupFailed = 14,
    /// Internal consistency check failed (owner index out of step with the
    /// records, or the staked counter underflowing). Never expected in
    /// correct operation.
    PoolInvariantViolation = 15,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// One currently-staked token. Created on stake, destroyed on unstake;
/// `last_claim_at` advances on every settlement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    pub token_id: u32,
    pub owner: Address,
    pub staked_at: u64,
    pub last_claim_at: u64,
}

/// Pool-wide aggregates, the read surface consumed by UIs and mirrors.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolStats {
    pub total_staked: u32,
    pub reward_rate: i128,
    pub staking_enabled: bool,
    pub min_stake_duration: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// The staking ledger: the authoritative record of which tokens are
/// staked, by whom, and what each has earned but not yet claimed.
///
/// Collaborators are held as addresses and invoked through narrow client
/// interfaces: the ownership registry for custody, the reward token for
/// credits, the tier table for multipliers. Any error returned from a
/// mutating entrypoint reverts the whole invocation, so external-call
/// failures can never leave a partial stake or a partial claim behind.
#[contract]
pub struct StakingPoolContract;

#[contractimpl]
impl StakingPoolContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `reward_rate` – reward units accrued per staked token per second,
    ///   before the tier multiplier.
    /// * `min_stake_duration` – seconds a token must stay staked before it
    ///   can be unstaked.
    /// * `claim_requires_min_duration` – whether claiming without
    ///   unstaking is held to the same floor.
    pub fn initialize(
        env: Env,
        admin: Address,
        nft_contract: Address,
        reward_token: Address,
        tier_config: Address,
        reward_rate: i128,
        min_stake_duration: u64,
        claim_requires_min_duration: bool,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_rate < 0 {
            return Err(ContractError::InvalidInput);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&NFT_CONTRACT, &nft_contract);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        env.storage().instance().set(&TIER_CONFIG, &tier_config);
        env.storage().instance().set(&REWARD_RATE, &reward_rate);
        env.storage().instance().set(&MIN_DURATION, &min_stake_duration);
        env.storage()
            .instance()
            .set(&CLAIM_GATED, &claim_requires_min_duration);
        env.storage().instance().set(&ENABLED, &true);
        admin::set_admin(&env, &admin);

        events::publish_initialized(
            &env,
            admin,
            nft_contract,
            reward_token,
            tier_config,
            reward_rate,
            min_stake_duration,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Stakes one token: verifies current ownership against the registry,
    /// takes custody, and opens a record with both clocks at now.
    pub fn stake(env: Env, staker: Address, token_id: u32) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        Self::require_enabled(&env)?;

        Self::stake_one(&env, &staker, token_id)
    }

    /// Batch stake. Elements share the semantics of [`Self::stake`]; a
    /// failure on any element reverts the entire batch, so separate calls
    /// are the unit of independence.
    pub fn stake_multiple(
        env: Env,
        staker: Address,
        token_ids: Vec<u32>,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        Self::require_enabled(&env)?;

        if token_ids.is_empty() {
            return Err(ContractError::InvalidInput);
        }
        for token_id in token_ids.iter() {
            Self::stake_one(&env, &staker, token_id)?;
        }
        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Rewards accrued by `token_id` since its last settlement. Pure view:
    /// the tier is resolved fresh against the full time staked, then the
    /// multiplier is applied to the unsettled interval.
    pub fn calculate_rewards(env: Env, token_id: u32) -> Result<i128, ContractError> {
        let record = Self::load_record(&env, token_id)?;
        Self::compute_rewards(&env, &record, env.ledger().timestamp())
    }

    /// Settles one token's rewards: credits the owner and advances the
    /// accrual clock. Two consecutive claims with no time between them
    /// credit zero on the second.
    pub fn claim_rewards(env: Env, staker: Address, token_id: u32) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let mut record = Self::load_record(&env, token_id)?;
        if record.owner != staker {
            return Err(ContractError::NotOwner);
        }

        let now = env.ledger().timestamp();
        if Self::claim_is_gated(&env) {
            Self::require_floor_elapsed(&env, &record, now)?;
        }

        let amount = Self::credit_rewards(&env, &record, now)?;
        record.last_claim_at = now;
        env.storage().persistent().set(&(STAKE, token_id), &record);

        if amount > 0 {
            events::publish_rewards_claimed(&env, staker, token_id, amount);
        }

        Ok(amount)
    }

    /// Settles every token the caller has staked, all-or-nothing. Returns
    /// the total credited.
    pub fn claim_all(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let token_ids = Self::index_of(&env, &staker);
        if token_ids.is_empty() {
            return Err(ContractError::NotStaked);
        }

        let now = env.ledger().timestamp();
        let gated = Self::claim_is_gated(&env);
        let mut total: i128 = 0;

        for token_id in token_ids.iter() {
            let mut record = Self::load_record(&env, token_id)
                .map_err(|_| ContractError::PoolInvariantViolation)?;
            if gated {
                Self::require_floor_elapsed(&env, &record, now)?;
            }

            let amount = Self::credit_rewards(&env, &record, now)?;
            record.last_claim_at = now;
            env.storage().persistent().set(&(STAKE, token_id), &record);

            if amount > 0 {
                events::publish_rewards_claimed(&env, staker.clone(), token_id, amount);
            }
            total = total
                .checked_add(amount)
                .ok_or(ContractError::Overflow)?;
        }

        Ok(total)
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Settles outstanding rewards, closes the record, and returns custody
    /// to the owner. The settlement and the removal commit together or not
    /// at all.
    pub fn unstake(env: Env, staker: Address, token_id: u32) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let record = Self::load_record(&env, token_id)?;
        if record.owner != staker {
            return Err(ContractError::NotOwner);
        }

        let now = env.ledger().timestamp();
        Self::require_floor_elapsed(&env, &record, now)?;

        let reward = Self::credit_rewards(&env, &record, now)?;

        env.storage().persistent().remove(&(STAKE, token_id));
        let total_staked = Self::total(&env)
            .checked_sub(1)
            .ok_or(ContractError::PoolInvariantViolation)?;
        env.storage().instance().set(&TOTAL_STAKED, &total_staked);
        Self::remove_from_index(&env, &staker, token_id)?;

        let nft: Address = env
            .storage()
            .instance()
            .get(&NFT_CONTRACT)
            .ok_or(ContractError::NotInitialized)?;
        OwnershipClient::new(&env, &nft)
            .try_transfer(&env.current_contract_address(), &staker, &token_id)
            .map_err(|_| ContractError::ExternalTransferFailed)?
            .map_err(|_| ContractError::ExternalTransferFailed)?;

        events::publish_unstaked(&env, staker, token_id, reward, total_staked);

        Ok(reward)
    }

    // ── Views ───────────────────────────────────────────────────────────────

    /// The live record for a staked token.
    pub fn get_stake(env: Env, token_id: u32) -> Result<StakeRecord, ContractError> {
        Self::load_record(&env, token_id)
    }

    /// Token ids `owner` currently has staked.
    pub fn staked_tokens(env: Env, owner: Address) -> Vec<u32> {
        Self::index_of(&env, &owner)
    }

    /// Number of tokens `owner` currently has staked.
    pub fn staked_balance(env: Env, owner: Address) -> u32 {
        Self::index_of(&env, &owner).len()
    }

    /// Unsettled rewards across all of `owner`'s staked tokens. Computed
    /// fresh on every call; the result changes every second.
    pub fn pending_rewards(env: Env, owner: Address) -> Result<i128, ContractError> {
        let now = env.ledger().timestamp();
        let mut total: i128 = 0;
        for token_id in Self::index_of(&env, &owner).iter() {
            let record = Self::load_record(&env, token_id)
                .map_err(|_| ContractError::PoolInvariantViolation)?;
            let amount = Self::compute_rewards(&env, &record, now)?;
            total = total
                .checked_add(amount)
                .ok_or(ContractError::Overflow)?;
        }
        Ok(total)
    }

    /// Count of active stake records.
    pub fn get_total_staked(env: Env) -> u32 {
        Self::total(&env)
    }

    pub fn get_reward_rate(env: Env) -> i128 {
        env.storage().instance().get(&REWARD_RATE).unwrap_or(0)
    }

    pub fn get_min_stake_duration(env: Env) -> u64 {
        env.storage().instance().get(&MIN_DURATION).unwrap_or(0)
    }

    pub fn is_staking_enabled(env: Env) -> bool {
        env.storage().instance().get(&ENABLED).unwrap_or(false)
    }

    /// Whether claiming without unstaking is held to the lock floor.
    pub fn get_claim_policy(env: Env) -> bool {
        Self::claim_is_gated(&env)
    }

    /// One-call aggregate snapshot.
    pub fn get_pool_stats(env: Env) -> PoolStats {
        PoolStats {
            total_staked: Self::total(&env),
            reward_rate: env.storage().instance().get(&REWARD_RATE).unwrap_or(0),
            staking_enabled: env.storage().instance().get(&ENABLED).unwrap_or(false),
            min_stake_duration: env.storage().instance().get(&MIN_DURATION).unwrap_or(0),
        }
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        admin::pending_admin(&env)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Pause or resume staking. Claims and unstakes stay available while
    /// paused so nobody's funds are trapped.
    pub fn set_staking_enabled(
        env: Env,
        caller: Address,
        enabled: bool,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&ENABLED, &enabled);
        events::publish_staking_enabled_set(&env, enabled);
        Ok(())
    }

    /// Update the per-second reward rate. Applies to intervals settled
    /// after the change; records are not retroactively adjusted.
    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidInput);
        }
        env.storage().instance().set(&REWARD_RATE, &new_rate);
        events::publish_reward_rate_set(&env, new_rate);
        Ok(())
    }

    /// Update the global lock floor (affects future gate checks only).
    pub fn set_min_stake_duration(
        env: Env,
        caller: Address,
        new_duration: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage().instance().set(&MIN_DURATION, &new_duration);
        events::publish_min_duration_set(&env, new_duration);
        Ok(())
    }

    /// Flip whether claims (without unstaking) are held to the lock floor.
    pub fn set_claim_policy(
        env: Env,
        caller: Address,
        claim_requires_min_duration: bool,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.storage()
            .instance()
            .set(&CLAIM_GATED, &claim_requires_min_duration);
        events::publish_claim_policy_set(&env, claim_requires_min_duration);
        Ok(())
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        admin::propose_admin(&env, &new_admin);
        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);
        Ok(())
    }

    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        let old_admin =
            admin::accept_admin(&env, &new_admin).ok_or(ContractError::Unauthorized)?;
        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);
        Ok(())
    }

    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        let cancelled = admin::cancel_pending(&env).ok_or(ContractError::InvalidInput)?;
        events::publish_admin_transfer_cancelled(&env, current_admin, cancelled);
        Ok(())
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

    fn require_enabled(env: &Env) -> Result<(), ContractError> {
        let enabled: bool = env.storage().instance().get(&ENABLED).unwrap_or(false);
        if !enabled {
            return Err(ContractError::StakingDisabled);
        }
        Ok(())
    }

    /// Guard: the token must have been staked at least the global floor ago.
    fn require_floor_elapsed(
        env: &Env,
        record: &StakeRecord,
        now: u64,
    ) -> Result<(), ContractError> {
        let min_duration: u64 = env.storage().instance().get(&MIN_DURATION).unwrap_or(0);
        let staked_for = now
            .checked_sub(record.staked_at)
            .ok_or(ContractError::ClockRegression)?;
        if staked_for < min_duration {
            return Err(ContractError::MinDurationNotMet);
        }
        Ok(())
    }

    fn claim_is_gated(env: &Env) -> bool {
        env.storage().instance().get(&CLAIM_GATED).unwrap_or(false)
    }

    /// One element of a stake batch: ownership check, custody transfer,
    /// record creation, counter and index updates.
    fn stake_one(env: &Env, staker: &Address, token_id: u32) -> Result<(), ContractError> {
        if env.storage().persistent().has(&(STAKE, token_id)) {
            return Err(ContractError::AlreadyStaked);
        }

        let nft: Address = env
            .storage()
            .instance()
            .get(&NFT_CONTRACT)
            .ok_or(ContractError::NotInitialized)?;
        let registry = OwnershipClient::new(env, &nft);

        // Ownership is queried from the registry, never trusted from the
        // caller; a missing token is indistinguishable from a foreign one.
        let owner = match registry.try_owner_of(&token_id) {
            Ok(Ok(owner)) => owner,
            _ => return Err(ContractError::NotOwner),
        };
        if owner != *staker {
            return Err(ContractError::NotOwner);
        }

        registry
            .try_transfer(staker, &env.current_contract_address(), &token_id)
            .map_err(|_| ContractError::ExternalTransferFailed)?
            .map_err(|_| ContractError::ExternalTransferFailed)?;

        let now = env.ledger().timestamp();
        let record = StakeRecord {
            token_id,
            owner: staker.clone(),
            staked_at: now,
            last_claim_at: now,
        };
        env.storage().persistent().set(&(STAKE, token_id), &record);

        let total_staked = Self::total(env)
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        env.storage().instance().set(&TOTAL_STAKED, &total_staked);
        Self::append_to_index(env, staker, token_id);

        events::publish_staked(env, staker.clone(), token_id, total_staked);

        Ok(())
    }

    /// Unsettled reward for `record` at `now`: the tier is a floor lookup
    /// on the full staked duration, the rate applies to the interval since
    /// the last settlement.
    fn compute_rewards(env: &Env, record: &StakeRecord, now: u64) -> Result<i128, ContractError> {
        let elapsed = now
            .checked_sub(record.last_claim_at)
            .ok_or(ContractError::ClockRegression)?;
        let staked_for = now
            .checked_sub(record.staked_at)
            .ok_or(ContractError::ClockRegression)?;

        let tier_config: Address = env
            .storage()
            .instance()
            .get(&TIER_CONFIG)
            .ok_or(ContractError::NotInitialized)?;
        let tier = match TierTableClient::new(env, &tier_config).try_get_tier_for_duration(&staked_for)
        {
            Ok(Ok(tier)) => tier,
            _ => return Err(ContractError::TierLookupFailed),
        };

        let rate: i128 = env.storage().instance().get(&REWARD_RATE).unwrap_or(0);
        rewards::accrued(rate, elapsed, tier.multiplier_bps).ok_or(ContractError::Overflow)
    }

    /// Computes and pays out `record`'s unsettled reward. The caller is
    /// responsible for advancing `last_claim_at` (or removing the record)
    /// in the same invocation.
    fn credit_rewards(env: &Env, record: &StakeRecord, now: u64) -> Result<i128, ContractError> {
        let amount = Self::compute_rewards(env, record, now)?;
        if amount > 0 {
            let reward_token: Address = env
                .storage()
                .instance()
                .get(&REWARD_TOKEN)
                .ok_or(ContractError::NotInitialized)?;
            token::Client::new(env, &reward_token)
                .try_transfer(&env.current_contract_address(), &record.owner, &amount)
                .map_err(|_| ContractError::ExternalCreditFailed)?
                .map_err(|_| ContractError::ExternalCreditFailed)?;
        }
        Ok(amount)
    }

    fn total(env: &Env) -> u32 {
        env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
    }

    fn index_of(env: &Env, owner: &Address) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&(OWNED_STAKES, owner.clone()))
            .unwrap_or_else(|| Vec::new(env))
    }

    fn append_to_index(env: &Env, owner: &Address, token_id: u32) {
        let mut index = Self::index_of(env, owner);
        index.push_back(token_id);
        env.storage()
            .persistent()
            .set(&(OWNED_STAKES, owner.clone()), &index);
    }

    fn remove_from_index(env: &Env, owner: &Address, token_id: u32) -> Result<(), ContractError> {
        let mut index = Self::index_of(env, owner);
        let pos = index
            .iter()
            .position(|id| id == token_id)
            .ok_or(ContractError::PoolInvariantViolation)?;
        index.remove(pos as u32);
        env.storage()
            .persistent()
            .set(&(OWNED_STAKES, owner.clone()), &index);
        Ok(())
    }

    fn load_record(env: &Env, token_id: u32) -> Result<StakeRecord, ContractError> {
        env.storage()
            .persistent()
            .get(&(STAKE, token_id))
            .ok_or(ContractError::NotStaked)
    }
}
