//! Shared test helpers for staking_ledger tests.
//! Provides a mock liquidity pair (token + reserve oracle) and a fully wired
//! ledger: reward token is a Stellar asset, the reward pool is funded and the
//! staker holds liquidity tokens.

#![cfg(any(test, feature = "testutils"))]

use crate::{ContractError, StakingLedger, StakingLedgerClient};
use core::fmt::Debug;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

/// Deposits open at this timestamp.
pub const START: u64 = 1_000;
/// Deposits close at this timestamp.
pub const CLOSE: u64 = 2_000;
/// Principal and reward are released at this timestamp.
pub const RELEASE: u64 = 3_000;
/// Yield used by `setup`.
pub const YIELD: u32 = 80;
/// Reward tokens held by the ledger when it is configured.
pub const REWARD_POOL: i128 = 1_000;
/// Pair reserve of the reward asset.
pub const RESERVE: i128 = 2_000;
/// Pair total supply.
pub const SUPPLY: i128 = 10_000;
/// Liquidity tokens minted to each staker.
pub const STAKER_MINT: i128 = 1_000_000;

// ─── Mock liquidity pair ───────────────────────────────────────────────────

#[contracttype]
enum PairKey {
    Balance(Address),
    Token0,
    Reserves,
    Supply,
    Failing,
}

/// Pair token with a settable reserve report and a switch that makes every
/// transfer fail.
#[contract]
pub struct MockPair;

#[contractimpl]
impl MockPair {
    pub fn set_pool(e: Env, token_0: Address, reserve_0: i128, reserve_1: i128, supply: i128) {
        e.storage().instance().set(&PairKey::Token0, &token_0);
        e.storage()
            .instance()
            .set(&PairKey::Reserves, &(reserve_0, reserve_1, e.ledger().timestamp()));
        e.storage().instance().set(&PairKey::Supply, &supply);
    }

    pub fn set_failing(e: Env, failing: bool) {
        e.storage().instance().set(&PairKey::Failing, &failing);
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        let balance = Self::balance(e.clone(), to.clone());
        e.storage()
            .persistent()
            .set(&PairKey::Balance(to), &(balance + amount));
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&PairKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        Self::move_balance(&e, from, to, amount);
    }

    pub fn transfer_from(e: Env, _spender: Address, from: Address, to: Address, amount: i128) {
        Self::move_balance(&e, from, to, amount);
    }

    pub fn get_reserves(e: Env) -> (i128, i128, u64) {
        e.storage()
            .instance()
            .get(&PairKey::Reserves)
            .unwrap_or_else(|| panic!("pool not set"))
    }

    pub fn token_0(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&PairKey::Token0)
            .unwrap_or_else(|| panic!("pool not set"))
    }

    pub fn total_supply(e: Env) -> i128 {
        e.storage()
            .instance()
            .get(&PairKey::Supply)
            .unwrap_or_else(|| panic!("pool not set"))
    }

    fn move_balance(e: &Env, from: Address, to: Address, amount: i128) {
        let failing: bool = e
            .storage()
            .instance()
            .get(&PairKey::Failing)
            .unwrap_or(false);
        if failing {
            panic!("transfer disabled");
        }
        let from_balance = Self::balance(e.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        e.storage()
            .persistent()
            .set(&PairKey::Balance(from), &(from_balance - amount));
        let to_balance = Self::balance(e.clone(), to.clone());
        e.storage()
            .persistent()
            .set(&PairKey::Balance(to), &(to_balance + amount));
    }
}

// ─── Ledger fixture ────────────────────────────────────────────────────────

pub struct Setup<'a> {
    pub client: StakingLedgerClient<'a>,
    pub contract_id: Address,
    pub admin: Address,
    pub staker: Address,
    pub pair: MockPairClient<'a>,
    pub reward: Address,
    pub reward_admin: StellarAssetClient<'a>,
    pub reward_token: TokenClient<'a>,
}

impl Setup<'_> {
    /// Liquidity tokens held by `who`.
    pub fn liquidity_of(&self, who: &Address) -> i128 {
        self.pair.balance(who)
    }

    /// Reward tokens held by `who`.
    pub fn reward_of(&self, who: &Address) -> i128 {
        self.reward_token.balance(who)
    }

    /// A second staker holding `STAKER_MINT` liquidity tokens.
    pub fn new_staker(&self, e: &Env) -> Address {
        let staker = Address::generate(e);
        self.pair.mint(&staker, &STAKER_MINT);
        staker
    }

    pub fn configure(&self) {
        self.client.configure(
            &self.admin,
            &START,
            &CLOSE,
            &RELEASE,
            &YIELD,
            &self.pair.address,
            &self.reward,
        );
    }
}

pub fn set_time(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// Initialized ledger with assets deployed and funded, not yet configured.
/// Ledger time is before `START`.
pub fn setup_unconfigured(e: &Env) -> Setup<'_> {
    e.mock_all_auths();
    set_time(e, START / 2);

    let contract_id = e.register(StakingLedger, ());
    let client = StakingLedgerClient::new(e, &contract_id);
    let admin = Address::generate(e);
    let staker = Address::generate(e);
    client.initialize(&admin);

    let reward = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let reward_admin = StellarAssetClient::new(e, &reward);
    let reward_token = TokenClient::new(e, &reward);
    reward_admin.mint(&contract_id, &REWARD_POOL);

    let pair_id = e.register(MockPair, ());
    let pair = MockPairClient::new(e, &pair_id);
    pair.set_pool(&reward, &RESERVE, &5_000, &SUPPLY);
    pair.mint(&staker, &STAKER_MINT);

    Setup {
        client,
        contract_id,
        admin,
        staker,
        pair,
        reward,
        reward_admin,
        reward_token,
    }
}

/// Configured ledger (`START`/`CLOSE`/`RELEASE`, `YIELD`, `REWARD_POOL`).
/// Ledger time is before `START`.
pub fn setup(e: &Env) -> Setup<'_> {
    let s = setup_unconfigured(e);
    s.configure();
    s
}

/// Configured ledger with the clock moved to `START`.
pub fn setup_open(e: &Env) -> Setup<'_> {
    let s = setup(e);
    set_time(e, START);
    s
}

/// Asserts a `try_*` client call failed with exactly `expected`.
pub fn assert_contract_error<T: Debug, C: Debug, I: Debug>(
    result: Result<Result<T, C>, Result<ContractError, I>>,
    expected: ContractError,
) {
    match result {
        Err(Ok(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
