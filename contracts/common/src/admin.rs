//! Admin bookkeeping shared by every StakeForge contract.
//!
//! Each contract stores its admin under its own instance storage, so these
//! helpers never collide across deployments. Transfers are two-step: the
//! current admin proposes a successor, who must accept before the change
//! takes effect.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");

/// Records `admin` as the contract admin. Called once from `initialize`.
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

/// Returns the stored admin, if the contract has been initialised.
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

/// Returns true when `who` is the stored admin.
pub fn is_admin(env: &Env, who: &Address) -> bool {
    match get_admin(env) {
        Some(admin) => admin == *who,
        None => false,
    }
}

/// Stores `new_admin` as the proposed successor.
pub fn propose_admin(env: &Env, new_admin: &Address) {
    env.storage().instance().set(&PENDING_ADMIN, new_admin);
}

/// Returns the proposed successor, if a transfer is pending.
pub fn pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

/// Completes a pending transfer when `caller` matches the proposed
/// successor. Returns the previous admin on success; `None` leaves all
/// state untouched (no pending transfer, or a different caller).
pub fn accept_admin(env: &Env, caller: &Address) -> Option<Address> {
    let pending: Address = env.storage().instance().get(&PENDING_ADMIN)?;
    if pending != *caller {
        return None;
    }
    let previous: Address = env.storage().instance().get(&ADMIN)?;
    env.storage().instance().set(&ADMIN, caller);
    env.storage().instance().remove(&PENDING_ADMIN);
    Some(previous)
}

/// Drops a pending transfer. Returns the address that had been proposed.
pub fn cancel_pending(env: &Env) -> Option<Address> {
    let pending: Address = env.storage().instance().get(&PENDING_ADMIN)?;
    env.storage().instance().remove(&PENDING_ADMIN);
    Some(pending)
}
