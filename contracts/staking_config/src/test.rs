extern crate std;

use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env};

use crate::{ContractError, StakingConfigContract, StakingConfigContractClient};

const DAY: u64 = 86_400;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, StakingConfigContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(StakingConfigContract, ());
    let client = StakingConfigContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

// ── Initialisation ────────────────────────────────────────────────────────────

#[test]
fn test_initialize_installs_default_tiers() {
    let (_env, client, admin) = setup();

    assert!(client.is_initialized());
    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.get_tier_count(), 4);

    let bronze = client.get_tier(&0);
    assert_eq!(bronze.name, symbol_short!("Bronze"));
    assert_eq!(bronze.min_duration, 0);
    assert_eq!(bronze.multiplier_bps, 10_000);

    let diamond = client.get_tier(&3);
    assert_eq!(diamond.name, symbol_short!("Diamond"));
    assert_eq!(diamond.min_duration, 90 * DAY);
    assert_eq!(diamond.multiplier_bps, 20_000);
}

#[test]
fn test_double_initialize_fails() {
    let (env, client, _admin) = setup();

    let other = Address::generate(&env);
    let result = client.try_initialize(&other);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::AlreadyInitialized),
        _ => unreachable!("Expected AlreadyInitialized error"),
    }
}

// ── Floor lookup ──────────────────────────────────────────────────────────────

#[test]
fn test_zero_duration_resolves_to_bronze() {
    let (_env, client, _admin) = setup();

    let assignment = client.get_tier_for_duration(&0);
    assert_eq!(assignment.tier_id, 0);
    assert_eq!(assignment.multiplier_bps, 10_000);
}

#[test]
fn test_exact_floor_resolves_to_that_tier() {
    let (_env, client, _admin) = setup();

    // Exactly seven days lands on Silver, not Bronze.
    let assignment = client.get_tier_for_duration(&(7 * DAY));
    assert_eq!(assignment.tier_id, 1);
    assert_eq!(assignment.multiplier_bps, 12_500);
}

#[test]
fn test_between_floors_resolves_downward() {
    let (_env, client, _admin) = setup();

    // 29 days: past Silver's floor, short of Gold's.
    let assignment = client.get_tier_for_duration(&(29 * DAY));
    assert_eq!(assignment.tier_id, 1);
    assert_eq!(assignment.multiplier_bps, 12_500);
}

#[test]
fn test_far_beyond_top_floor_resolves_to_highest() {
    let (_env, client, _admin) = setup();

    let assignment = client.get_tier_for_duration(&(100 * 365 * DAY));
    assert_eq!(assignment.tier_id, 3);
    assert_eq!(assignment.multiplier_bps, 20_000);
}

// ── Tier management ───────────────────────────────────────────────────────────

#[test]
fn test_add_tier_appends_above_highest_floor() {
    let (_env, client, admin) = setup();

    let id = client.add_tier(&admin, &(180 * DAY), &25_000, &symbol_short!("Platinum"));
    assert_eq!(id, 4);
    assert_eq!(client.get_tier_count(), 5);

    let assignment = client.get_tier_for_duration(&(200 * DAY));
    assert_eq!(assignment.tier_id, 4);
    assert_eq!(assignment.multiplier_bps, 25_000);
}

#[test]
fn test_add_tier_rejects_non_ascending_floor() {
    let (_env, client, admin) = setup();

    // 30 days is already Gold's floor.
    let result = client.try_add_tier(&admin, &(30 * DAY), &17_500, &symbol_short!("Opal"));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::UnsortedTier),
        _ => unreachable!("Expected UnsortedTier error"),
    }
}

#[test]
fn test_add_tier_rejects_non_admin() {
    let (env, client, _admin) = setup();

    let outsider = Address::generate(&env);
    let result = client.try_add_tier(&outsider, &(180 * DAY), &25_000, &symbol_short!("Platinum"));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_add_tier_rejects_out_of_bounds_multiplier() {
    let (_env, client, admin) = setup();

    let result = client.try_add_tier(&admin, &(180 * DAY), &0, &symbol_short!("Zero"));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidMultiplier),
        _ => unreachable!("Expected InvalidMultiplier error"),
    }

    let result = client.try_add_tier(&admin, &(180 * DAY), &100_001, &symbol_short!("Huge"));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidMultiplier),
        _ => unreachable!("Expected InvalidMultiplier error"),
    }
}

#[test]
fn test_update_tier_within_neighbour_floors() {
    let (_env, client, admin) = setup();

    // Move Silver's floor from 7 to 10 days and raise its multiplier.
    client.update_tier(&admin, &1, &(10 * DAY), &13_000);

    let silver = client.get_tier(&1);
    assert_eq!(silver.min_duration, 10 * DAY);
    assert_eq!(silver.multiplier_bps, 13_000);

    // 8 days now falls back to Bronze.
    let assignment = client.get_tier_for_duration(&(8 * DAY));
    assert_eq!(assignment.tier_id, 0);
}

#[test]
fn test_update_tier_zero_keeps_zero_floor() {
    let (_env, client, admin) = setup();

    let result = client.try_update_tier(&admin, &0, &DAY, &11_000);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::UnsortedTier),
        _ => unreachable!("Expected UnsortedTier error"),
    }

    // Multiplier changes on the base tier are fine.
    client.update_tier(&admin, &0, &0, &11_000);
    assert_eq!(client.get_tier(&0).multiplier_bps, 11_000);
}

#[test]
fn test_update_tier_rejects_floor_collisions() {
    let (_env, client, admin) = setup();

    // Silver cannot reach Gold's floor…
    let result = client.try_update_tier(&admin, &1, &(30 * DAY), &12_500);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::UnsortedTier),
        _ => unreachable!("Expected UnsortedTier error"),
    }

    // …nor drop to Bronze's.
    let result = client.try_update_tier(&admin, &1, &0, &12_500);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::UnsortedTier),
        _ => unreachable!("Expected UnsortedTier error"),
    }
}

#[test]
fn test_update_missing_tier_fails() {
    let (_env, client, admin) = setup();

    let result = client.try_update_tier(&admin, &9, &(400 * DAY), &30_000);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::TierNotFound),
        _ => unreachable!("Expected TierNotFound error"),
    }
}

#[test]
fn test_get_all_tiers_is_sorted() {
    let (_env, client, admin) = setup();
    client.add_tier(&admin, &(180 * DAY), &25_000, &symbol_short!("Platinum"));

    let tiers = client.get_all_tiers();
    assert_eq!(tiers.len(), 5);
    let mut prev = None;
    for tier in tiers.iter() {
        if let Some(floor) = prev {
            assert!(tier.min_duration > floor);
        }
        prev = Some(tier.min_duration);
    }
}
