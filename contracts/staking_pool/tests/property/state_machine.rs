#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the staking pool.
//!
//! Arbitrary stake/unstake/claim sequences are replayed against a local
//! model of which tokens should be staked. After every operation the
//! pool's aggregate state must agree with the model:
//! - `get_total_staked` equals the number of active records
//! - custody of each token matches its staked/unstaked status
//! - round-tripping a token returns it to its owner with the count intact

use proptest::prelude::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env, String,
};

use forge_nft::{ForgeNftContract, ForgeNftContractClient};
use staking_config::{StakingConfigContract, StakingConfigContractClient};
use staking_pool::{StakingPoolContract, StakingPoolContractClient};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Action {
    Stake(usize),
    Unstake(usize),
    Claim(usize),
}

fn action_strategy(n_tokens: usize) -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..n_tokens).prop_map(Action::Stake),
        (0..n_tokens).prop_map(Action::Unstake),
        (0..n_tokens).prop_map(Action::Claim),
    ]
}

struct Fixture {
    env: Env,
    pool: StakingPoolContractClient<'static>,
    nft: ForgeNftContractClient<'static>,
    staker: Address,
    tokens: std::vec::Vec<u32>,
}

/// Zero lock floor and ungated claims so every action is legal whenever
/// its precondition (staked / not staked) holds.
fn setup(n_tokens: usize) -> Fixture {
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
    pool.initialize(&admin, &nft_id, &reward_token, &config_id, &1, &0, &false);
    StellarAssetClient::new(&env, &reward_token)
        .mock_all_auths()
        .mint(&pool_id, &1_000_000_000_000i128);

    let staker = Address::generate(&env);
    let tokens: std::vec::Vec<u32> = (0..n_tokens).map(|_| nft.mint(&staker)).collect();

    Fixture {
        env,
        pool,
        nft,
        staker,
        tokens,
    }
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// After any operation sequence, `total_staked` equals the live record
    /// count and custody matches the model.
    #[test]
    fn prop_pool_count_matches_active_records(
        actions in proptest::collection::vec(action_strategy(5), 1..=40),
    ) {
        let f = setup(5);
        let mut staked = [false; 5];
        let mut now = 0u64;

        for action in actions {
            now += 10;
            f.env.ledger().set_timestamp(now);

            match action {
                Action::Stake(i) => {
                    let result = f.pool.try_stake(&f.staker, &f.tokens[i]);
                    if staked[i] {
                        prop_assert!(result.is_err(), "restaking a staked token must fail");
                    } else {
                        prop_assert!(result.is_ok());
                        staked[i] = true;
                    }
                }
                Action::Unstake(i) => {
                    let result = f.pool.try_unstake(&f.staker, &f.tokens[i]);
                    if staked[i] {
                        prop_assert!(result.is_ok());
                        staked[i] = false;
                    } else {
                        prop_assert!(result.is_err(), "unstaking an idle token must fail");
                    }
                }
                Action::Claim(i) => {
                    let result = f.pool.try_claim_rewards(&f.staker, &f.tokens[i]);
                    prop_assert_eq!(result.is_ok(), staked[i]);
                }
            }

            let expected = staked.iter().filter(|s| **s).count() as u32;
            prop_assert_eq!(f.pool.get_total_staked(), expected);
            prop_assert_eq!(f.pool.staked_balance(&f.staker), expected);

            for (i, is_staked) in staked.iter().enumerate() {
                let owner = f.nft.owner_of(&f.tokens[i]);
                if *is_staked {
                    prop_assert_eq!(&owner, &f.pool.address);
                } else {
                    prop_assert_eq!(&owner, &f.staker);
                }
            }
        }
    }

    /// Stake then immediately unstake: token back with its owner, count
    /// restored, nothing credited.
    #[test]
    fn prop_round_trip_restores_everything(start in 0u64..=1_000_000) {
        let f = setup(2);
        f.env.ledger().set_timestamp(start);

        // A background position so the count is not trivially zero.
        f.pool.stake(&f.staker, &f.tokens[1]);
        let baseline = f.pool.get_total_staked();

        f.pool.stake(&f.staker, &f.tokens[0]);
        let reward = f.pool.unstake(&f.staker, &f.tokens[0]);

        prop_assert_eq!(reward, 0);
        prop_assert_eq!(f.pool.get_total_staked(), baseline);
        prop_assert_eq!(f.nft.owner_of(&f.tokens[0]), f.staker.clone());
    }

    /// A second `initialize` must always fail, whatever the arguments.
    #[test]
    fn prop_double_initialize_always_fails(rate in 0i128..=1_000_000, floor in 0u64..=1_000_000) {
        let f = setup(1);
        let intruder = Address::generate(&f.env);

        let result = f.pool.try_initialize(
            &intruder,
            &f.nft.address,
            &f.nft.address,
            &f.nft.address,
            &rate,
            &floor,
            &false,
        );
        prop_assert!(result.is_err());
    }
}
