//! Read-through client mirror for the StakeForge deployment.
//!
//! Dashboards and wallet UIs want one cheap call for "everything about
//! this owner": owned tokens, staked positions with their pending
//! rewards, and the pool-wide stats. [`StakingMirror`] assembles that
//! snapshot through the contract clients and caches it against the
//! ledger clock.
//!
//! The mirror is advisory only. It exposes no mutating operations, and
//! nothing read from it should gate a mutation: the contracts re-validate
//! every stake, claim, and unstake against their own authoritative state.
//! A stale snapshot can at worst render a stale number.

use forge_nft::ForgeNftContractClient;
use soroban_sdk::{Address, Env, Vec};
use staking_pool::{PoolStats, StakingPoolContractClient};

/// One staked position, as displayed: the record's timestamps plus the
/// pending reward computed at snapshot time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeView {
    pub token_id: u32,
    pub staked_at: u64,
    pub last_claim_at: u64,
    pub pending_rewards: i128,
}

/// Everything the UI shows for one owner, taken at a single ledger time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerSnapshot {
    pub owner: Address,
    /// Tokens sitting in the owner's wallet, available to stake.
    pub owned_tokens: Vec<u32>,
    /// Tokens the owner has in the pool, with per-position accrual.
    pub staked: std::vec::Vec<StakeView>,
    /// Sum of `pending_rewards` across all staked positions.
    pub total_pending: i128,
    pub pool: PoolStats,
    /// Ledger timestamp the snapshot was taken at.
    pub taken_at: u64,
}

/// Read-through cache over the staking pool and the collection.
pub struct StakingMirror {
    nft: Address,
    pool: Address,
    cache: Option<OwnerSnapshot>,
}

impl StakingMirror {
    pub fn new(nft: Address, pool: Address) -> Self {
        Self {
            nft,
            pool,
            cache: None,
        }
    }

    /// Re-reads everything from the contracts and replaces the cache.
    pub fn refresh(&mut self, env: &Env, owner: &Address) -> &OwnerSnapshot {
        let nft = ForgeNftContractClient::new(env, &self.nft);
        let pool = StakingPoolContractClient::new(env, &self.pool);

        let staked_ids = pool.staked_tokens(owner);
        let mut staked = std::vec::Vec::with_capacity(staked_ids.len() as usize);
        let mut total_pending: i128 = 0;
        for token_id in staked_ids.iter() {
            let record = pool.get_stake(&token_id);
            let pending = pool.calculate_rewards(&token_id);
            total_pending += pending;
            staked.push(StakeView {
                token_id,
                staked_at: record.staked_at,
                last_claim_at: record.last_claim_at,
                pending_rewards: pending,
            });
        }

        self.cache.insert(OwnerSnapshot {
            owner: owner.clone(),
            owned_tokens: nft.tokens_of(owner),
            staked,
            total_pending,
            pool: pool.get_pool_stats(),
            taken_at: env.ledger().timestamp(),
        })
    }

    /// Read-through access: serves the cached snapshot while it is younger
    /// than `max_age` seconds (and for the same owner), refreshing
    /// otherwise. `max_age` of zero always refreshes.
    pub fn snapshot(&mut self, env: &Env, owner: &Address, max_age: u64) -> &OwnerSnapshot {
        let now = env.ledger().timestamp();
        let fresh = matches!(
            &self.cache,
            Some(snapshot)
                if snapshot.owner == *owner
                    && max_age > 0
                    && now.saturating_sub(snapshot.taken_at) < max_age
        );
        if fresh {
            return self.cache.as_ref().unwrap();
        }
        self.refresh(env, owner)
    }

    /// The cached snapshot, if any, without touching the contracts.
    pub fn cached(&self) -> Option<&OwnerSnapshot> {
        self.cache.as_ref()
    }

    /// Drops the cache; the next read goes to the contracts.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}
