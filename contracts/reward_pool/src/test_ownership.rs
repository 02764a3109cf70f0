extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token::StellarAssetClient,
    vec, Address, Env, IntoVal,
};

use crate::{events::OwnershipTransferredEvent, ContractError, RewardPool, RewardPoolClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Initialized pool with one staker, so reward injection can succeed.
fn setup() -> (Env, RewardPoolClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let asset = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let asset_id = asset.address();

    let contract_id = env.register(RewardPool, ());
    let client = RewardPoolClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &asset_id);

    let staker = Address::generate(&env);
    let sac = StellarAssetClient::new(&env, &asset_id);
    sac.mint(&owner, &1_000_000i128);
    sac.mint(&staker, &1_000i128);
    client.deposit(&staker, &100);

    (env, client, owner, asset_id)
}

fn fund(env: &Env, asset: &Address, who: &Address) {
    StellarAssetClient::new(env, asset).mint(who, &1_000_000i128);
}

// ── Owner bootstrapped on initialize ─────────────────────────────────────────

#[test]
fn test_owner_is_initializer() {
    let (env, client, owner, _asset) = setup();
    assert_eq!(client.get_owner(), owner);
    assert!(client.is_owner(&owner));
    assert!(!client.is_owner(&Address::generate(&env)));
}

#[test]
fn test_inject_reward_requires_owner_auth() {
    let (env, client, owner, _asset) = setup();

    client.inject_reward(&owner, &10);

    let auths = env.auths();
    assert!(auths.iter().any(|(addr, _)| *addr == owner));
}

// ── Transfer ─────────────────────────────────────────────────────────────────

#[test]
fn test_owner_transfers_ownership() {
    let (env, client, owner, _asset) = setup();
    let successor = Address::generate(&env);

    client.transfer_ownership(&owner, &successor);

    assert_eq!(
        env.events().all().filter_by_contract(&client.address),
        vec![
            &env,
            (
                client.address.clone(),
                (symbol_short!("OWN_XFER"), owner.clone(), successor.clone()).into_val(&env),
                OwnershipTransferredEvent {
                    previous_owner: owner.clone(),
                    new_owner: successor.clone(),
                    timestamp: env.ledger().timestamp(),
                }
                .into_val(&env),
            ),
        ]
    );

    assert_eq!(client.get_owner(), successor);
    assert!(client.is_owner(&successor));
    assert!(!client.is_owner(&owner));
}

#[test]
fn test_new_owner_holds_the_gate() {
    let (env, client, owner, asset) = setup();
    let successor = Address::generate(&env);
    fund(&env, &asset, &successor);

    client.transfer_ownership(&owner, &successor);

    let result = client.try_inject_reward(&owner, &10);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotOwner),
        _ => unreachable!("Expected NotOwner error"),
    }

    client.inject_reward(&successor, &10);
    assert_eq!(client.get_total_held(), 110);
}

#[test]
fn test_non_owner_cannot_transfer() {
    let (env, client, owner, _asset) = setup();
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.transfer_ownership(&owner, &first);

    // The previous owner lost the right to move the role again.
    let result = client.try_transfer_ownership(&owner, &second);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotOwner),
        _ => unreachable!("Expected NotOwner error"),
    }
    assert_eq!(client.get_owner(), first);
}

#[test]
fn test_transfer_to_pool_address_fails() {
    let (_env, client, owner, _asset) = setup();

    let result = client.try_transfer_ownership(&owner, &client.address);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidAddress),
        _ => unreachable!("Expected InvalidAddress error"),
    }
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_transfer_to_self_is_allowed() {
    let (_env, client, owner, _asset) = setup();

    client.transfer_ownership(&owner, &owner);
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_transfer_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(RewardPool, ());
    let client = RewardPoolClient::new(&env, &contract_id);

    let caller = Address::generate(&env);
    let target = Address::generate(&env);
    let result = client.try_transfer_ownership(&caller, &target);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotInitialized),
        _ => unreachable!("Expected NotInitialized error"),
    }

    match client.try_get_owner() {
        Err(Ok(e)) => assert_eq!(e, ContractError::NotInitialized),
        _ => unreachable!("Expected NotInitialized error"),
    }
}
