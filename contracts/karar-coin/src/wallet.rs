use crate::admin::AdminModule;
use crate::types::{DataKey, Error, Wallet};
use soroban_sdk::{symbol_short, Address, Bytes, Env};

const ADDRESS_HEX_DIGITS: u32 = 40;
const HEX: &[u8; 16] = b"0123456789abcdef";

/// Stand-in for a real token wallet. Balances only gate proposals and votes;
/// nothing is transferred anywhere.
pub struct WalletSimulator;

impl WalletSimulator {
    /// Connect a wallet for `user`, generating one on first use
    pub fn connect(env: &Env, user: &Address) -> Result<Wallet, Error> {
        if let Some(wallet) = Self::find(env, user) {
            return Ok(wallet);
        }

        let config = AdminModule::get_config(env)?;

        let mut address = Bytes::from_slice(env, b"0x");
        for _ in 0..ADDRESS_HEX_DIGITS {
            let nibble: u64 = env.prng().gen_range(0..16);
            address.push_back(HEX[nibble as usize]);
        }

        // Validated on config write to be non-empty and within u64
        let spread = AdminModule::balance_spread(&config)?;
        let offset: u64 = env.prng().gen_range(0..spread);

        let wallet = Wallet {
            address,
            balance: config.min_starting_balance + offset as i128,
            connected_at: env.ledger().timestamp(),
        };
        Self::store(env, user, &wallet);

        env.events().publish(
            (symbol_short!("wallet"), symbol_short!("connected")),
            (user.clone(), wallet.balance),
        );

        Ok(wallet)
    }

    pub fn disconnect(env: &Env, user: &Address) -> Result<(), Error> {
        if Self::find(env, user).is_none() {
            return Err(Error::WalletNotConnected);
        }

        env.storage()
            .persistent()
            .remove(&DataKey::Wallet(user.clone()));

        env.events().publish(
            (symbol_short!("wallet"), symbol_short!("closed")),
            (user.clone(),),
        );

        Ok(())
    }

    pub fn get(env: &Env, user: &Address) -> Result<Wallet, Error> {
        Self::find(env, user).ok_or(Error::WalletNotConnected)
    }

    /// Debit `amount`, returning the remaining balance
    pub fn spend(env: &Env, user: &Address, amount: i128) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut wallet = Self::get(env, user)?;
        if amount > wallet.balance {
            return Err(Error::InsufficientBalance);
        }

        wallet.balance -= amount;
        Self::store(env, user, &wallet);

        env.events().publish(
            (symbol_short!("wallet"), symbol_short!("spent")),
            (user.clone(), amount, wallet.balance),
        );

        Ok(wallet.balance)
    }

    fn find(env: &Env, user: &Address) -> Option<Wallet> {
        env.storage()
            .persistent()
            .get(&DataKey::Wallet(user.clone()))
    }

    fn store(env: &Env, user: &Address, wallet: &Wallet) {
        env.storage()
            .persistent()
            .set(&DataKey::Wallet(user.clone()), wallet);
    }
}
