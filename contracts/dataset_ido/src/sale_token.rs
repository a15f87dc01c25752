use soroban_sdk::{token, vec, Address, Env, IntoVal, Symbol};

// Calls into the dataset token. This contract is the token's minter, so it
// authorizes mint/burn as the direct invoker.

pub fn balance(env: &Env, sale_token: &Address, holder: &Address) -> i128 {
    token::Client::new(env, sale_token).balance(holder)
}

pub fn mint(env: &Env, sale_token: &Address, to: &Address, amount: i128) {
    env.invoke_contract::<()>(
        sale_token,
        &Symbol::new(env, "mint"),
        vec![
            env,
            env.current_contract_address().into_val(env),
            to.into_val(env),
            amount.into_val(env),
        ],
    );
}

pub fn burn(env: &Env, sale_token: &Address, from: &Address, amount: i128) {
    env.invoke_contract::<()>(
        sale_token,
        &Symbol::new(env, "burn"),
        vec![
            env,
            env.current_contract_address().into_val(env),
            from.into_val(env),
            amount.into_val(env),
        ],
    );
}
