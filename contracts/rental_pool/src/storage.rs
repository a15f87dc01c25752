use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PoolConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_state(env: &Env) -> Result<PoolState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
}

// Per-holder records grow with the holder set, so they live in persistent storage.

pub fn get_position(env: &Env, holder: &Address) -> HolderPosition {
    env.storage()
        .persistent()
        .get(&DataKey::Position(holder.clone()))
        .unwrap_or_default()
}

pub fn set_position(env: &Env, holder: &Address, position: &HolderPosition) {
    env.storage()
        .persistent()
        .set(&DataKey::Position(holder.clone()), position);
}

pub fn get_access_expiry(env: &Env, renter: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Access(renter.clone()))
        .unwrap_or(0)
}

pub fn set_access_expiry(env: &Env, renter: &Address, expires_at: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::Access(renter.clone()), &expires_at);
}
