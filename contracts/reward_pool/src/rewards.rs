//! Pool-wide reward accounting.
//!
//! Injected rewards are folded into a single reward-per-share accumulator
//! instead of being written to every participant. A participant's share is
//! recovered later from the difference between the accumulator now and the
//! value recorded at their last settlement (see [`crate::ledger`]).

use soroban_sdk::contracttype;

use crate::ContractError;

/// Fixed-point precision of `acc_reward_per_share`.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Global state of the pool, stored as one instance entry.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Sum of every participant's principal.
    pub total_staked: i128,
    /// Cumulative reward per staked unit, scaled by [`SCALE`]. Never decreases.
    pub acc_reward_per_share: i128,
    /// Value the pool currently owes out: deposits plus rewards minus payouts.
    pub total_held: i128,
}

impl PoolState {
    /// Distributes `amount` over the current stake.
    ///
    /// Returns the accumulator increment. The floor of the division is
    /// dust that stays in `total_held` without being attributed to anyone.
    pub fn inject(&mut self, amount: i128) -> Result<i128, ContractError> {
        let increment = reward_per_share(amount, self.total_staked)?;

        self.acc_reward_per_share = self
            .acc_reward_per_share
            .checked_add(increment)
            .ok_or(ContractError::Overflow)?;
        self.total_held = self
            .total_held
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;

        Ok(increment)
    }

    /// Books freshly deposited principal.
    pub fn record_deposit(&mut self, amount: i128) -> Result<(), ContractError> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        self.total_held = self
            .total_held
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        Ok(())
    }

    /// Removes a liquidated position and returns the amount to pay out.
    ///
    /// Per-position rounding in settlement can leave the sum of claimable
    /// amounts a few units above `total_held`; the payout is capped so the
    /// last participant out can always leave.
    pub fn record_withdrawal(&mut self, principal: i128, owed: i128) -> Result<i128, ContractError> {
        let payout = owed.min(self.total_held);

        self.total_staked = self
            .total_staked
            .checked_sub(principal)
            .ok_or(ContractError::Overflow)?;
        self.total_held = self
            .total_held
            .checked_sub(payout)
            .ok_or(ContractError::Overflow)?;

        Ok(payout)
    }
}

/// `amount * SCALE / total_staked`, floored.
///
/// # Errors
/// `NoStake` when nothing is staked (there is no one to attribute the
/// reward to), `Overflow` if the scaled amount does not fit in `i128`.
pub fn reward_per_share(amount: i128, total_staked: i128) -> Result<i128, ContractError> {
    if total_staked <= 0 {
        return Err(ContractError::NoStake);
    }
    amount
        .checked_mul(SCALE)
        .ok_or(ContractError::Overflow)?
        .checked_div(total_staked)
        .ok_or(ContractError::Overflow)
}

/// `principal * acc / SCALE`, rounded half up: reward owed to `principal`
/// had it been staked since the accumulator was zero.
///
/// The accumulator itself is floored, so an exact share such as
/// `300 * (200 / 600)` lands one scaled unit below a whole number. Rounding
/// here recovers it instead of losing a unit per settlement.
pub fn accrued(principal: i128, acc: i128) -> Result<i128, ContractError> {
    principal
        .checked_mul(acc)
        .ok_or(ContractError::Overflow)?
        .checked_add(SCALE / 2)
        .ok_or(ContractError::Overflow)?
        .checked_div(SCALE)
        .ok_or(ContractError::Overflow)
}
