//! Per-participant positions.
//!
//! Every principal change is preceded by a settlement that folds the reward
//! earned on the old principal into `pending_reward`, so the accumulator can
//! move any number of times between two calls without losing or repeating
//! anything.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::rewards;
use crate::ContractError;

// Per-participant persistent storage uses tuple keys:  (prefix, participant)
const POSITION: Symbol = symbol_short!("POS");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// A participant's stake. All zero means the participant is absent.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// Value deposited by the participant and not yet withdrawn.
    pub principal: i128,
    /// `principal * acc / SCALE`, rounded, as of the last settlement.
    pub settled_debt: i128,
    /// Reward earned in earlier epochs, carried across deposits.
    pub pending_reward: i128,
}

impl Position {
    pub fn is_absent(&self) -> bool {
        self.principal == 0 && self.pending_reward == 0
    }

    /// Folds reward earned since the last settlement into `pending_reward`.
    pub fn settle(&mut self, acc: i128) -> Result<(), ContractError> {
        let earned = rewards::accrued(self.principal, acc)?
            .checked_sub(self.settled_debt)
            .ok_or(ContractError::Overflow)?;
        self.pending_reward = self
            .pending_reward
            .checked_add(earned)
            .ok_or(ContractError::Overflow)?;
        Ok(())
    }

    /// Settles, then adds `amount` to principal and re-baselines the debt.
    pub fn deposit(&mut self, amount: i128, acc: i128) -> Result<(), ContractError> {
        self.settle(acc)?;
        self.principal = self
            .principal
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        self.settled_debt = rewards::accrued(self.principal, acc)?;
        Ok(())
    }

    /// Settles and empties the position.
    ///
    /// Returns `(principal, owed)` where `owed` is principal plus all earned
    /// reward.
    pub fn liquidate(&mut self, acc: i128) -> Result<(i128, i128), ContractError> {
        if self.principal == 0 {
            return Err(ContractError::NoStake);
        }
        self.settle(acc)?;

        let principal = self.principal;
        let owed = principal
            .checked_add(self.pending_reward)
            .ok_or(ContractError::Overflow)?;
        *self = Position::default();

        Ok((principal, owed))
    }

    /// Principal plus every reward earned so far, settled or not.
    ///
    /// Saturates instead of failing so views stay total.
    pub fn claimable(&self, acc: i128) -> i128 {
        let accrued = rewards::accrued(self.principal, acc).unwrap_or(i128::MAX);
        self.principal
            .saturating_add(self.pending_reward)
            .saturating_add(accrued.saturating_sub(self.settled_debt))
    }
}

// ── Storage helpers ───────────────────────────────────────────────────────────

fn position_key(participant: &Address) -> (Symbol, Address) {
    (POSITION, participant.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Returns the stored position, or an all-zero one for absent participants.
pub fn load(env: &Env, participant: &Address) -> Position {
    env.storage()
        .persistent()
        .get(&position_key(participant))
        .unwrap_or_default()
}

/// Persists `position`, dropping the entry entirely once it is absent.
pub fn store(env: &Env, participant: &Address, position: &Position) {
    let key = position_key(participant);
    if position.is_absent() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}
