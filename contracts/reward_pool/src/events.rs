#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub asset: Address,
    pub timestamp: u64,
}

/// Fired when a participant adds principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub participant: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the owner injects a reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRewardEvent {
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a participant liquidates their position.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub participant: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the owner role changes hands.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, asset: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            asset,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposit(env: &Env, participant: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), participant.clone()),
        DepositEvent {
            participant,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposit_reward(env: &Env, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_DEP"),),
        DepositRewardEvent {
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdraw(env: &Env, participant: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), participant.clone()),
        WithdrawEvent {
            participant,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        (
            symbol_short!("OWN_XFER"),
            previous_owner.clone(),
            new_owner.clone(),
        ),
        OwnershipTransferredEvent {
            previous_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}
