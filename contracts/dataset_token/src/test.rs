#![allow(clippy::unwrap_used)]

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, testutils::Address as _, vec, Address,
    Env, String, Vec,
};

use crate::{DatasetToken, DatasetTokenClient, Error};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct HookCall {
    pub holder: Address,
    pub old_balance: i128,
    pub new_balance: i128,
}

#[contract]
struct RecordingHook;

#[contractimpl]
impl RecordingHook {
    pub fn on_balance_change(env: Env, holder: Address, old_balance: i128, new_balance: i128) {
        let mut calls: Vec<HookCall> = env
            .storage()
            .instance()
            .get(&symbol_short!("calls"))
            .unwrap_or(Vec::new(&env));
        calls.push_back(HookCall {
            holder,
            old_balance,
            new_balance,
        });
        env.storage().instance().set(&symbol_short!("calls"), &calls);
    }

    pub fn calls(env: Env) -> Vec<HookCall> {
        env.storage()
            .instance()
            .get(&symbol_short!("calls"))
            .unwrap_or(Vec::new(&env))
    }
}

mod rejecting_hook {
    use soroban_sdk::{contract, contractimpl, Address, Env};

    #[contract]
    pub struct RejectingHook;

    #[contractimpl]
    impl RejectingHook {
        pub fn on_balance_change(_env: Env, _holder: Address, _old_balance: i128, _new_balance: i128) {
            panic!("hook rejected balance change");
        }
    }
}
use rejecting_hook::RejectingHook;

fn setup(env: &Env) -> (DatasetTokenClient<'_>, Address, Address) {
    env.mock_all_auths();
    let contract_id = env.register_contract(None, DatasetToken);
    let client = DatasetTokenClient::new(env, &contract_id);
    let admin = Address::generate(env);
    let minter = Address::generate(env);
    client.initialize(
        &admin,
        &minter,
        &7u32,
        &String::from_str(env, "Genome Dataset"),
        &String::from_str(env, "GDS"),
    );
    (client, admin, minter)
}

#[test]
fn test_initialize_stores_metadata() {
    let env = Env::default();
    let (client, admin, minter) = setup(&env);

    assert_eq!(client.name(), String::from_str(&env, "Genome Dataset"));
    assert_eq!(client.symbol(), String::from_str(&env, "GDS"));
    assert_eq!(client.decimals(), 7);
    assert_eq!(client.admin(), admin);
    assert_eq!(client.minter(), minter);
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.balance_hook(), None);
}

#[test]
fn test_double_initialize_fails() {
    let env = Env::default();
    let (client, admin, minter) = setup(&env);

    let result = client.try_initialize(
        &admin,
        &minter,
        &7u32,
        &String::from_str(&env, "Again"),
        &String::from_str(&env, "AGN"),
    );
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_mint_requires_minter() {
    let env = Env::default();
    let (client, admin, _) = setup(&env);
    let user = Address::generate(&env);

    assert_eq!(
        client.try_mint(&admin, &user, &100),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_mint_and_burn_track_supply() {
    let env = Env::default();
    let (client, _, minter) = setup(&env);
    let user = Address::generate(&env);

    client.mint(&minter, &user, &1_000);
    assert_eq!(client.balance(&user), 1_000);
    assert_eq!(client.total_supply(), 1_000);

    client.burn(&minter, &user, &400);
    assert_eq!(client.balance(&user), 600);
    assert_eq!(client.total_supply(), 600);

    assert_eq!(
        client.try_burn(&minter, &user, &601),
        Err(Ok(Error::InsufficientBalance))
    );
    assert_eq!(
        client.try_mint(&minter, &user, &0),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn test_transfer_moves_balance() {
    let env = Env::default();
    let (client, _, minter) = setup(&env);
    let sender = Address::generate(&env);
    let recipient = Address::generate(&env);

    client.mint(&minter, &sender, &1_000);
    client.transfer(&sender, &recipient, &200);

    assert_eq!(client.balance(&sender), 800);
    assert_eq!(client.balance(&recipient), 200);
    assert_eq!(client.total_supply(), 1_000);
    assert_eq!(
        client.try_transfer(&recipient, &sender, &201),
        Err(Ok(Error::InsufficientBalance))
    );
}

#[test]
fn test_self_transfer_keeps_balance() {
    let env = Env::default();
    let (client, _, minter) = setup(&env);
    let holder = Address::generate(&env);

    client.mint(&minter, &holder, &50);
    client.transfer(&holder, &holder, &50);
    assert_eq!(client.balance(&holder), 50);
}

#[test]
fn test_hook_sees_pre_mutation_balances() {
    let env = Env::default();
    let (client, admin, minter) = setup(&env);
    let hook_id = env.register_contract(None, RecordingHook);
    let hook = RecordingHookClient::new(&env, &hook_id);
    client.set_balance_hook(&admin, &hook_id);

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&minter, &alice, &100);
    client.transfer(&alice, &bob, &40);
    client.burn(&minter, &bob, &10);

    let expected = vec![
        &env,
        HookCall {
            holder: alice.clone(),
            old_balance: 0,
            new_balance: 100,
        },
        HookCall {
            holder: alice.clone(),
            old_balance: 100,
            new_balance: 60,
        },
        HookCall {
            holder: bob.clone(),
            old_balance: 0,
            new_balance: 40,
        },
        HookCall {
            holder: bob.clone(),
            old_balance: 40,
            new_balance: 30,
        },
    ];
    assert_eq!(hook.calls(), expected);
}

#[test]
fn test_hook_locked_after_first_mint() {
    let env = Env::default();
    let (client, admin, minter) = setup(&env);
    let user = Address::generate(&env);
    client.mint(&minter, &user, &1);

    let hook_id = env.register_contract(None, RecordingHook);
    assert_eq!(
        client.try_set_balance_hook(&admin, &hook_id),
        Err(Ok(Error::HookLocked))
    );
}

#[test]
fn test_set_hook_requires_admin() {
    let env = Env::default();
    let (client, _, minter) = setup(&env);
    let hook_id = env.register_contract(None, RecordingHook);

    assert_eq!(
        client.try_set_balance_hook(&minter, &hook_id),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_rejecting_hook_aborts_mutation() {
    let env = Env::default();
    let (client, admin, minter) = setup(&env);
    let hook_id = env.register_contract(None, RejectingHook);
    client.set_balance_hook(&admin, &hook_id);

    let user = Address::generate(&env);
    assert!(client.try_mint(&minter, &user, &100).is_err());
    assert_eq!(client.balance(&user), 0);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_transfer_from_spends_allowance() {
    let env = Env::default();
    let (client, _, minter) = setup(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let recipient = Address::generate(&env);

    client.mint(&minter, &owner, &100);
    client.approve(&owner, &spender, &50, &1_000);
    assert_eq!(client.allowance(&owner, &spender), 50);

    client.transfer_from(&spender, &owner, &recipient, &30);
    assert_eq!(client.allowance(&owner, &spender), 20);
    assert_eq!(client.balance(&recipient), 30);

    assert_eq!(
        client.try_transfer_from(&spender, &owner, &recipient, &30),
        Err(Ok(Error::InsufficientAllowance))
    );
}
