#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env};

use staking_config::{StakingConfigContract, StakingConfigContractClient};

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    pub extra_floors: Vec<(u32, u16)>,
    pub lookups: Vec<u64>,
}

fuzz_target!(|input: FuzzInput| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(StakingConfigContract, ());
    let client = StakingConfigContractClient::new(&env, &contract_id);
    client.initialize(&admin);

    // Grow the table with arbitrary (mostly invalid) floors; the contract
    // must reject anything that would break the sort order.
    for (floor, bps) in input.extra_floors.iter().take(8) {
        let _ = client.try_add_tier(
            &admin,
            &(*floor as u64),
            &(*bps as u32),
            &symbol_short!("Fuzz"),
        );
    }

    let tiers = client.get_all_tiers();

    // Whatever was accepted, the table stays strictly ascending with a
    // zero-floor base tier.
    assert_eq!(tiers.get(0).unwrap().min_duration, 0);
    let mut prev: Option<u64> = None;
    for tier in tiers.iter() {
        if let Some(p) = prev {
            assert!(tier.min_duration > p);
        }
        prev = Some(tier.min_duration);
    }

    // Every duration resolves, to the entry with the greatest floor not
    // exceeding it.
    for duration in input.lookups.iter().take(32) {
        let assignment = client.get_tier_for_duration(duration);
        let entry = tiers.get(assignment.tier_id).unwrap();
        assert!(entry.min_duration <= *duration);
        if let Some(next) = tiers.get(assignment.tier_id + 1) {
            assert!(next.min_duration > *duration);
        }
        assert_eq!(assignment.multiplier_bps, entry.multiplier_bps);
    }
});
