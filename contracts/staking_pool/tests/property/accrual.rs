#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for reward accrual.
//!
//! Invariants tested:
//! - Settling twice at the same instant never credits twice
//! - Accrual is monotonic in time between settlements
//! - The credited amount equals the calculated amount at claim time
//! - Truncation floors: the credited amount never exceeds the exact
//!   rational reward

use proptest::prelude::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};

use forge_nft::{ForgeNftContract, ForgeNftContractClient};
use staking_config::{StakingConfigContract, StakingConfigContractClient};
use staking_pool::{rewards, StakingPoolContract, StakingPoolContractClient};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Fixture {
    env: Env,
    pool: StakingPoolContractClient<'static>,
    nft: ForgeNftContractClient<'static>,
    reward_token: Address,
}

fn setup(reward_rate: i128) -> Fixture {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(0);

    let admin = Address::generate(&env);
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let nft_id = env.register(ForgeNftContract, ());
    let nft = ForgeNftContractClient::new(&env, &nft_id);
    nft.initialize(
        &admin,
        &String::from_str(&env, "StakeForge NFT"),
        &String::from_str(&env, "FORGE"),
        &10_000,
        &0,
        &reward_token,
    );

    let config_id = env.register(StakingConfigContract, ());
    StakingConfigContractClient::new(&env, &config_id).initialize(&admin);

    let pool_id = env.register(StakingPoolContract, ());
    let pool = StakingPoolContractClient::new(&env, &pool_id);
    pool.initialize(
        &admin,
        &nft_id,
        &reward_token,
        &config_id,
        &reward_rate,
        &0,
        &false,
    );
    StellarAssetClient::new(&env, &reward_token)
        .mock_all_auths()
        .mint(&pool_id, &1_000_000_000_000_000i128);

    Fixture {
        env,
        pool,
        nft,
        reward_token,
    }
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Claiming twice at the same instant credits zero on the second call.
    #[test]
    fn prop_no_double_credit(rate in 1i128..=1_000, elapsed in 0u64..=10_000_000) {
        let f = setup(rate);
        let staker = Address::generate(&f.env);
        let token_id = f.nft.mint(&staker);
        f.pool.stake(&staker, &token_id);

        f.env.ledger().set_timestamp(elapsed);
        let first = f.pool.claim_rewards(&staker, &token_id);
        let second = f.pool.claim_rewards(&staker, &token_id);

        prop_assert!(first >= 0);
        prop_assert_eq!(second, 0);
        prop_assert_eq!(f.pool.calculate_rewards(&token_id), 0);
    }

    /// With no settlement in between, accrued rewards never decrease.
    #[test]
    fn prop_accrual_monotonic(
        rate in 1i128..=1_000,
        t1 in 0u64..=5_000_000,
        dt in 0u64..=5_000_000,
    ) {
        let f = setup(rate);
        let staker = Address::generate(&f.env);
        let token_id = f.nft.mint(&staker);
        f.pool.stake(&staker, &token_id);

        f.env.ledger().set_timestamp(t1);
        let at_t1 = f.pool.calculate_rewards(&token_id);

        f.env.ledger().set_timestamp(t1 + dt);
        let at_t2 = f.pool.calculate_rewards(&token_id);

        prop_assert!(at_t2 >= at_t1);
    }

    /// The amount credited by a claim equals `calculate_rewards` evaluated
    /// immediately before the claim, and lands in the owner's balance.
    #[test]
    fn prop_conservation_under_claim(rate in 1i128..=1_000, elapsed in 1u64..=10_000_000) {
        let f = setup(rate);
        let staker = Address::generate(&f.env);
        let token_id = f.nft.mint(&staker);
        f.pool.stake(&staker, &token_id);

        f.env.ledger().set_timestamp(elapsed);
        let calculated = f.pool.calculate_rewards(&token_id);
        let credited = f.pool.claim_rewards(&staker, &token_id);

        prop_assert_eq!(credited, calculated);
        let balance = TokenClient::new(&f.env, &f.reward_token).balance(&staker);
        prop_assert_eq!(balance, credited);
    }

    /// The integer formula floors: never more than the exact rational
    /// reward, and never a full basis-point denominator short of it.
    #[test]
    fn prop_truncation_never_over_credits(
        rate in 0i128..=1_000_000,
        elapsed in 0u64..=100_000_000,
        bps in 1u32..=100_000,
    ) {
        let accrued = rewards::accrued(rate, elapsed, bps).unwrap();
        let exact_numerator = rate * elapsed as i128 * bps as i128;

        prop_assert!(accrued * 10_000 <= exact_numerator);
        prop_assert!((accrued + 1) * 10_000 > exact_numerator);
    }
}
