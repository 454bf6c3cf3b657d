#![no_std]

pub mod events;

use common::admin;
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, String, Symbol, Vec,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const NAME: Symbol = symbol_short!("NAME");
const TOKEN_SYMBOL: Symbol = symbol_short!("TOK_SYM");
const MAX_SUPPLY: Symbol = symbol_short!("MAX_SUP");
const MINT_PRICE: Symbol = symbol_short!("PRICE");
const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOK");
const TOTAL_SUPPLY: Symbol = symbol_short!("TOT_SUP");

// Per-token and per-owner persistent storage uses tuple keys.
const TOKEN_OWNER: Symbol = symbol_short!("OWNER");
const OWNED_TOKENS: Symbol = symbol_short!("OWN_TOKS");

/// Hard cap on tokens minted in one paid batch call.
pub const MAX_PER_TX: u32 = 10;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    TokenNotFound = 4,
    NotTokenOwner = 5,
    SoldOut = 6,
    InvalidQuantity = 7,
    ExceedsMaxPerTx = 8,
    PaymentFailed = 9,
    InvalidPrice = 10,
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// The StakeForge collection. Token ids are assigned sequentially from 1;
/// ownership lives under `(OWNER, token_id)` with a per-owner enumeration
/// index maintained in lockstep.
///
/// There is no operator-approval surface: a holder authorises custody
/// transfers (e.g. into the staking pool) directly on the invocation that
/// needs them, which is what Soroban's auth model is for.
#[contract]
pub struct ForgeNftContract;

#[contractimpl]
impl ForgeNftContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the collection.
    ///
    /// * `max_supply`    – hard cap on minted tokens.
    /// * `mint_price`    – units of `payment_token` pulled per paid mint;
    ///                     zero makes minting free.
    /// * `payment_token` – SAC address proceeds are collected in.
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        max_supply: u32,
        mint_price: i128,
        payment_token: Address,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if max_supply == 0 {
            return Err(ContractError::InvalidQuantity);
        }
        if mint_price < 0 {
            return Err(ContractError::InvalidPrice);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&NAME, &name);
        env.storage().instance().set(&TOKEN_SYMBOL, &symbol);
        env.storage().instance().set(&MAX_SUPPLY, &max_supply);
        env.storage().instance().set(&MINT_PRICE, &mint_price);
        env.storage().instance().set(&PAYMENT_TOKEN, &payment_token);
        admin::set_admin(&env, &admin);

        events::publish_initialized(&env, admin, max_supply, mint_price);

        Ok(())
    }

    // ── Minting ─────────────────────────────────────────────────────────────

    /// Mints one token to `to`, pulling the mint price from `to`.
    pub fn mint(env: Env, to: Address) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        to.require_auth();

        Self::collect_payment(&env, &to, 1)?;
        let token_id = Self::mint_one(&env, &to)?;
        Ok(token_id)
    }

    /// Mints `quantity` tokens to `to` with a single payment pull.
    pub fn mint_batch(env: Env, to: Address, quantity: u32) -> Result<Vec<u32>, ContractError> {
        Self::require_initialized(&env)?;
        to.require_auth();

        if quantity == 0 {
            return Err(ContractError::InvalidQuantity);
        }
        if quantity > MAX_PER_TX {
            return Err(ContractError::ExceedsMaxPerTx);
        }

        Self::collect_payment(&env, &to, quantity)?;

        let mut minted: Vec<u32> = Vec::new(&env);
        for _ in 0..quantity {
            minted.push_back(Self::mint_one(&env, &to)?);
        }
        Ok(minted)
    }

    /// Admin mint, free of charge. Used to seed giveaways and test wallets.
    pub fn owner_mint(
        env: Env,
        caller: Address,
        to: Address,
        quantity: u32,
    ) -> Result<Vec<u32>, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if quantity == 0 {
            return Err(ContractError::InvalidQuantity);
        }

        let mut minted: Vec<u32> = Vec::new(&env);
        for _ in 0..quantity {
            minted.push_back(Self::mint_one(&env, &to)?);
        }
        Ok(minted)
    }

    // ── Transfers ───────────────────────────────────────────────────────────

    /// Moves `token_id` from `from` to `to`. `from` must be the current
    /// owner and must authorise the call (directly, or as a nested
    /// invocation of a contract it invoked).
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        let owner = Self::load_owner(&env, token_id)?;
        if owner != from {
            return Err(ContractError::NotTokenOwner);
        }

        env.storage()
            .persistent()
            .set(&(TOKEN_OWNER, token_id), &to);
        Self::remove_from_index(&env, &from, token_id);
        Self::append_to_index(&env, &to, token_id);

        events::publish_transferred(&env, from, to, token_id);

        Ok(())
    }

    // ── Views ───────────────────────────────────────────────────────────────

    /// Current owner of `token_id`.
    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, ContractError> {
        Self::load_owner(&env, token_id)
    }

    /// Number of tokens held by `owner`.
    pub fn balance_of(env: Env, owner: Address) -> u32 {
        Self::index_of(&env, &owner).len()
    }

    /// Token ids held by `owner`, in acquisition order.
    pub fn tokens_of(env: Env, owner: Address) -> Vec<u32> {
        Self::index_of(&env, &owner)
    }

    pub fn total_supply(env: Env) -> u32 {
        env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0)
    }

    pub fn max_supply(env: Env) -> Result<u32, ContractError> {
        env.storage()
            .instance()
            .get(&MAX_SUPPLY)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn mint_price(env: Env) -> Result<i128, ContractError> {
        env.storage()
            .instance()
            .get(&MINT_PRICE)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn name(env: Env) -> Result<String, ContractError> {
        env.storage()
            .instance()
            .get(&NAME)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        env.storage()
            .instance()
            .get(&TOKEN_SYMBOL)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Proceeds (admin) ────────────────────────────────────────────────────

    /// Sweeps accumulated mint proceeds to `to`. Returns the amount moved.
    pub fn withdraw(env: Env, caller: Address, to: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let payment_token: Address = env
            .storage()
            .instance()
            .get(&PAYMENT_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        let client = token::Client::new(&env, &payment_token);
        let balance = client.balance(&env.current_contract_address());
        if balance > 0 {
            client.transfer(&env.current_contract_address(), &to, &balance);
        }

        events::publish_proceeds_withdrawn(&env, to, balance);

        Ok(balance)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !admin::is_admin(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Pulls `quantity × mint_price` of the payment token from `payer`.
    /// A failed pull (no trustline, insufficient balance) aborts the mint.
    fn collect_payment(env: &Env, payer: &Address, quantity: u32) -> Result<(), ContractError> {
        let price: i128 = env
            .storage()
            .instance()
            .get(&MINT_PRICE)
            .ok_or(ContractError::NotInitialized)?;
        let due = price
            .checked_mul(quantity as i128)
            .ok_or(ContractError::PaymentFailed)?;
        if due == 0 {
            return Ok(());
        }

        let payment_token: Address = env
            .storage()
            .instance()
            .get(&PAYMENT_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        let client = token::Client::new(env, &payment_token);
        client
            .try_transfer(payer, &env.current_contract_address(), &due)
            .map_err(|_| ContractError::PaymentFailed)?
            .map_err(|_| ContractError::PaymentFailed)?;
        Ok(())
    }

    /// Assigns the next sequential id to `to`. Fails once the cap is hit.
    fn mint_one(env: &Env, to: &Address) -> Result<u32, ContractError> {
        let max_supply: u32 = env
            .storage()
            .instance()
            .get(&MAX_SUPPLY)
            .ok_or(ContractError::NotInitialized)?;
        let supply: u32 = env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0);
        if supply >= max_supply {
            return Err(ContractError::SoldOut);
        }

        let token_id = supply + 1;
        env.storage().instance().set(&TOTAL_SUPPLY, &token_id);
        env.storage()
            .persistent()
            .set(&(TOKEN_OWNER, token_id), to);
        Self::append_to_index(env, to, token_id);

        events::publish_minted(env, to.clone(), token_id);

        Ok(token_id)
    }

    fn load_owner(env: &Env, token_id: u32) -> Result<Address, ContractError> {
        env.storage()
            .persistent()
            .get(&(TOKEN_OWNER, token_id))
            .ok_or(ContractError::TokenNotFound)
    }

    fn index_of(env: &Env, owner: &Address) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&(OWNED_TOKENS, owner.clone()))
            .unwrap_or_else(|| Vec::new(env))
    }

    fn append_to_index(env: &Env, owner: &Address, token_id: u32) {
        let mut index = Self::index_of(env, owner);
        index.push_back(token_id);
        env.storage()
            .persistent()
            .set(&(OWNED_TOKENS, owner.clone()), &index);
    }

    fn remove_from_index(env: &Env, owner: &Address, token_id: u32) {
        let mut index = Self::index_of(env, owner);
        if let Some(pos) = index.iter().position(|id| id == token_id) {
            index.remove(pos as u32);
            env.storage()
                .persistent()
                .set(&(OWNED_TOKENS, owner.clone()), &index);
        }
    }
}
