#![no_std]

pub mod events;
pub mod ledger;
pub mod rewards;

use common::{ownable, CommonError};
use soroban_sdk::{contract, contractimpl, log, symbol_short, token, Address, Env, Symbol};

pub use ledger::Position;
pub use rewards::{PoolState, SCALE};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const ASSET: Symbol = symbol_short!("ASSET");
const POOL: Symbol = symbol_short!("POOL");

const INSTANCE_TTL_THRESHOLD: u32 = 518400;
const INSTANCE_TTL_EXTEND_TO: u32 = 1036800;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    InvalidAmount = 4,
    NoStake = 5,
    InvalidAddress = 6,
    Overflow = 7,
}

impl From<CommonError> for ContractError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => ContractError::NotInitialized,
            CommonError::AccessDenied => ContractError::NotOwner,
            CommonError::InvalidAddress => ContractError::InvalidAddress,
        }
    }
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct RewardPool;

#[contractimpl]
impl RewardPool {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `owner` – the only identity allowed to inject rewards.
    /// * `asset` – SAC address of the pooled asset (the native XLM SAC in
    ///   production).
    pub fn initialize(env: Env, owner: Address, asset: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        ownable::init_owner(&env, &owner)?;

        env.storage().instance().set(&ASSET, &asset);
        env.storage().instance().set(&POOL, &PoolState::default());
        env.storage().instance().set(&INITIALIZED, &true);
        Self::bump_instance(&env);

        log!(&env, "pool initialized", owner, asset);
        events::publish_initialized(&env, owner, asset);

        Ok(())
    }

    // ── Participants ────────────────────────────────────────────────────────

    /// Deposit `amount` of the pooled asset.
    ///
    /// The position is settled against the current accumulator before the
    /// principal grows, so the new funds earn nothing from past injections.
    pub fn deposit(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let asset = Self::asset(&env)?;
        let mut pool = Self::load_pool(&env)?;
        let mut position = ledger::load(&env, &participant);

        // 1. Settle, grow principal, re-baseline debt.
        position.deposit(amount, pool.acc_reward_per_share)?;
        pool.record_deposit(amount)?;

        // 2. Pull the funds into the pool.
        token::Client::new(&env, &asset).transfer(
            &participant,
            &env.current_contract_address(),
            &amount,
        );

        // 3. Persist.
        ledger::store(&env, &participant, &position);
        Self::save_pool(&env, &pool);

        log!(&env, "deposit", participant, amount, pool.total_staked);
        events::publish_deposit(&env, participant, amount);

        Ok(())
    }

    /// Liquidate the caller's whole position: principal plus every reward
    /// earned while it was staked.
    ///
    /// All ledger state reaches its final value before the payout leaves
    /// the contract.
    pub fn withdraw(env: Env, participant: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        let asset = Self::asset(&env)?;
        let mut pool = Self::load_pool(&env)?;
        let mut position = ledger::load(&env, &participant);

        let (principal, owed) = position.liquidate(pool.acc_reward_per_share)?;
        let payout = pool.record_withdrawal(principal, owed)?;

        ledger::store(&env, &participant, &position);
        Self::save_pool(&env, &pool);

        log!(&env, "withdraw", participant, principal, payout);
        events::publish_withdraw(&env, participant.clone(), payout);

        token::Client::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &participant,
            &payout,
        );

        Ok(payout)
    }

    // ── Owner operations ─────────────────────────────────────────────────────

    /// Distribute `amount` pro rata over everything currently staked.
    ///
    /// Fails with `NotOwner` for anyone but the owner and with `NoStake`
    /// when there is no one to distribute to.
    pub fn inject_reward(env: Env, caller: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        ownable::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let asset = Self::asset(&env)?;
        let mut pool = Self::load_pool(&env)?;
        let increment = pool.inject(amount)?;

        token::Client::new(&env, &asset).transfer(
            &caller,
            &env.current_contract_address(),
            &amount,
        );

        Self::save_pool(&env, &pool);

        log!(&env, "reward injected", amount, increment, pool.total_staked);
        events::publish_deposit_reward(&env, amount);

        Ok(())
    }

    /// Hand the owner role to `new_owner`. Only the current owner can call this.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let previous_owner = ownable::transfer_ownership(&env, &caller, &new_owner)?;
        Self::bump_instance(&env);

        log!(&env, "ownership transferred", previous_owner, new_owner);
        events::publish_ownership_transferred(&env, previous_owner, new_owner);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Principal plus all reward earned to date. Zero for absent participants.
    pub fn get_claimable_amt(env: Env, participant: Address) -> i128 {
        let pool: PoolState = env.storage().instance().get(&POOL).unwrap_or_default();
        ledger::load(&env, &participant).claimable(pool.acc_reward_per_share)
    }

    /// Total value the pool currently holds on behalf of participants.
    pub fn get_total_held(env: Env) -> i128 {
        let pool: PoolState = env.storage().instance().get(&POOL).unwrap_or_default();
        pool.total_held
    }

    /// Sum of all principal currently staked.
    pub fn get_total_staked(env: Env) -> i128 {
        let pool: PoolState = env.storage().instance().get(&POOL).unwrap_or_default();
        pool.total_staked
    }

    /// Current reward-per-share accumulator, scaled by [`SCALE`].
    pub fn get_acc_reward_per_share(env: Env) -> i128 {
        let pool: PoolState = env.storage().instance().get(&POOL).unwrap_or_default();
        pool.acc_reward_per_share
    }

    /// Raw stored position; all zero when the participant is absent.
    pub fn get_position(env: Env, participant: Address) -> Position {
        ledger::load(&env, &participant)
    }

    /// Current holder of the owner role. `NotInitialized` before bootstrap.
    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        ownable::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    /// Whether `who` currently holds the owner role.
    pub fn is_owner(env: Env, who: Address) -> bool {
        ownable::is_owner(&env, &who)
    }

    /// Address of the pooled asset contract. `NotInitialized` before bootstrap.
    pub fn get_asset(env: Env) -> Result<Address, ContractError> {
        Self::asset(&env)
    }

    /// Whether `initialize` has completed.
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the pool is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn asset(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ASSET)
            .ok_or(ContractError::NotInitialized)
    }

    fn load_pool(env: &Env) -> Result<PoolState, ContractError> {
        env.storage()
            .instance()
            .get(&POOL)
            .ok_or(ContractError::NotInitialized)
    }

    fn save_pool(env: &Env, pool: &PoolState) {
        env.storage().instance().set(&POOL, pool);
        Self::bump_instance(env);
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_ownership;
