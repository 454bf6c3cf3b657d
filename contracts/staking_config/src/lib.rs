#![no_std]

pub mod events;

use common::{admin, TierAssignment};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol, Vec,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const TIERS: Symbol = symbol_short!("TIERS");

// ── Multiplier bounds ────────────────────────────────────────────────────────

/// Lowest accepted multiplier: 0.0001×.
pub const MIN_MULTIPLIER_BPS: u32 = 1;
/// Highest accepted multiplier: 10×.
pub const MAX_MULTIPLIER_BPS: u32 = 100_000;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    TierNotFound = 4,
    UnsortedTier = 5,
    InvalidMultiplier = 6,
}

// ── Types ────────────────────────────────────────────────────────────────────

/// One reward bracket. Entries are kept sorted ascending by `min_duration`
/// and the first entry always has a zero floor, so every duration resolves
/// to some tier.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierEntry {
    pub min_duration: u64,
    pub multiplier_bps: u32,
    pub name: Symbol,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingConfigContract;

#[contractimpl]
impl StakingConfigContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the tier table with the StakeForge defaults:
    ///
    /// | tier    | floor   | multiplier |
    /// |---------|---------|------------|
    /// | Bronze  | 0       | 1.00×      |
    /// | Silver  | 7 days  | 1.25×      |
    /// | Gold    | 30 days | 1.50×      |
    /// | Diamond | 90 days | 2.00×      |
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        let mut tiers: Vec<TierEntry> = Vec::new(&env);
        tiers.push_back(TierEntry {
            min_duration: 0,
            multiplier_bps: 10_000,
            name: symbol_short!("Bronze"),
        });
        tiers.push_back(TierEntry {
            min_duration: 7 * 86_400,
            multiplier_bps: 12_500,
            name: symbol_short!("Silver"),
        });
        tiers.push_back(TierEntry {
            min_duration: 30 * 86_400,
            multiplier_bps: 15_000,
            name: symbol_short!("Gold"),
        });
        tiers.push_back(TierEntry {
            min_duration: 90 * 86_400,
            multiplier_bps: 20_000,
            name: symbol_short!("Diamond"),
        });

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&TIERS, &tiers);
        admin::set_admin(&env, &admin);

        events::publish_initialized(&env, admin, tiers.len());

        Ok(())
    }

    // ── Lookup ──────────────────────────────────────────────────────────────

    /// Floor lookup: the tier with the greatest `min_duration` not
    /// exceeding `duration`. The table is small (four entries by default),
    /// so a linear scan is fine.
    pub fn get_tier_for_duration(env: Env, duration: u64) -> Result<TierAssignment, ContractError> {
        let tiers = Self::load_tiers(&env)?;

        let mut assignment = TierAssignment {
            tier_id: 0,
            multiplier_bps: tiers
                .first()
                .map(|t| t.multiplier_bps)
                .ok_or(ContractError::TierNotFound)?,
        };
        for (i, tier) in tiers.iter().enumerate() {
            if tier.min_duration > duration {
                break;
            }
            assignment = TierAssignment {
                tier_id: i as u32,
                multiplier_bps: tier.multiplier_bps,
            };
        }
        Ok(assignment)
    }

    /// Returns the entry at `tier_id`.
    pub fn get_tier(env: Env, tier_id: u32) -> Result<TierEntry, ContractError> {
        let tiers = Self::load_tiers(&env)?;
        tiers.get(tier_id).ok_or(ContractError::TierNotFound)
    }

    /// Number of configured tiers.
    pub fn get_tier_count(env: Env) -> Result<u32, ContractError> {
        Ok(Self::load_tiers(&env)?.len())
    }

    /// The full table, sorted ascending by floor.
    pub fn get_all_tiers(env: Env) -> Result<Vec<TierEntry>, ContractError> {
        Self::load_tiers(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Configuration (admin) ───────────────────────────────────────────────

    /// Appends a tier. The new floor must be strictly greater than the
    /// current highest floor, keeping the table sorted without a re-sort.
    pub fn add_tier(
        env: Env,
        caller: Address,
        min_duration: u64,
        multiplier_bps: u32,
        name: Symbol,
    ) -> Result<u32, ContractError> {
        let mut tiers = Self::load_tiers(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        Self::require_multiplier_in_bounds(multiplier_bps)?;

        if let Some(last) = tiers.last() {
            if min_duration <= last.min_duration {
                return Err(ContractError::UnsortedTier);
            }
        }

        tiers.push_back(TierEntry {
            min_duration,
            multiplier_bps,
            name: name.clone(),
        });
        env.storage().instance().set(&TIERS, &tiers);

        let tier_id = tiers.len() - 1;
        events::publish_tier_added(&env, tier_id, min_duration, multiplier_bps, name);

        Ok(tier_id)
    }

    /// Rewrites the floor and multiplier of an existing tier. The new
    /// floor must stay between the neighbouring floors, and tier 0 keeps
    /// its zero floor so lookups can never miss.
    pub fn update_tier(
        env: Env,
        caller: Address,
        tier_id: u32,
        min_duration: u64,
        multiplier_bps: u32,
    ) -> Result<(), ContractError> {
        let mut tiers = Self::load_tiers(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        Self::require_multiplier_in_bounds(multiplier_bps)?;

        let mut entry = tiers.get(tier_id).ok_or(ContractError::TierNotFound)?;

        if tier_id == 0 {
            if min_duration != 0 {
                return Err(ContractError::UnsortedTier);
            }
        } else {
            let prev = tiers
                .get(tier_id - 1)
                .ok_or(ContractError::TierNotFound)?;
            if min_duration <= prev.min_duration {
                return Err(ContractError::UnsortedTier);
            }
        }
        if let Some(next) = tiers.get(tier_id + 1) {
            if min_duration >= next.min_duration {
                return Err(ContractError::UnsortedTier);
            }
        }

        entry.min_duration = min_duration;
        entry.multiplier_bps = multiplier_bps;
        tiers.set(tier_id, entry);
        env.storage().instance().set(&TIERS, &tiers);

        events::publish_tier_updated(&env, tier_id, min_duration, multiplier_bps);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn load_tiers(env: &Env) -> Result<Vec<TierEntry>, ContractError> {
        env.storage()
            .instance()
            .get(&TIERS)
            .ok_or(ContractError::NotInitialized)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !admin::is_admin(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn require_multiplier_in_bounds(multiplier_bps: u32) -> Result<(), ContractError> {
        if !(MIN_MULTIPLIER_BPS..=MAX_MULTIPLIER_BPS).contains(&multiplier_bps) {
            return Err(ContractError::InvalidMultiplier);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test;
