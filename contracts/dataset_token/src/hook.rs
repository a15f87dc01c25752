use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use crate::storage;

/// Report a pending balance change to the configured hook.
///
/// Must run before the new balance is written: the hook checkpoints the
/// holder against `old_balance`. A failing hook aborts the whole call.
pub fn notify(env: &Env, holder: &Address, old_balance: i128, new_balance: i128) {
    if let Some(hook) = storage::get_balance_hook(env) {
        env.invoke_contract::<()>(
            &hook,
            &Symbol::new(env, "on_balance_change"),
            vec![
                env,
                holder.into_val(env),
                old_balance.into_val(env),
                new_balance.into_val(env),
            ],
        );
    }
}
