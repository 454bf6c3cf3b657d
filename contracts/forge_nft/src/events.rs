use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the collection is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub max_supply: u32,
    pub mint_price: i128,
    pub timestamp: u64,
}

/// Fired for every token minted, paid or admin.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEvent {
    pub to: Address,
    pub token_id: u32,
    pub timestamp: u64,
}

/// Fired on every ownership change.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferredEvent {
    pub from: Address,
    pub to: Address,
    pub token_id: u32,
    pub timestamp: u64,
}

/// Fired when the admin sweeps mint proceeds.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProceedsWithdrawnEvent {
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, max_supply: u32, mint_price: i128) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            max_supply,
            mint_price,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_minted(env: &Env, to: Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("MINTED"), to.clone()),
        MintedEvent {
            to,
            token_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_transferred(env: &Env, from: Address, to: Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("XFER"), from.clone()),
        TransferredEvent {
            from,
            to,
            token_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_proceeds_withdrawn(env: &Env, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"),),
        ProceedsWithdrawnEvent {
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
