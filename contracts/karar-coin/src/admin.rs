use crate::types::{Config, DataKey, Error};
use soroban_sdk::{symbol_short, Address, Env};

pub const DEFAULT_PROPOSAL_FEE: i128 = 50;
pub const DEFAULT_VOTE_FEE: i128 = 10;
pub const DEFAULT_MIN_STARTING_BALANCE: i128 = 50;
pub const DEFAULT_MAX_STARTING_BALANCE: i128 = 1050;
pub const DEFAULT_RECENT_WINDOW_DAYS: u32 = 30;

pub struct AdminModule;

impl AdminModule {
    /// Initialize the contract with an admin and a deployment configuration
    pub fn init(env: &Env, admin: &Address, config: &Config) -> Result<(), Error> {
        // Check if already initialized
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        Self::validate_config(config)?;

        env.storage().instance().set(&DataKey::Admin, admin);
        env.storage().instance().set(&DataKey::Config, config);
        env.storage().instance().set(&DataKey::Visits, &0u32);

        env.events().publish(
            (symbol_short!("karar"), symbol_short!("init")),
            (admin.clone(), config.proposal_fee, config.vote_fee),
        );

        Ok(())
    }

    /// The constants the site shipped with
    pub fn default_config() -> Config {
        Config {
            proposal_fee: DEFAULT_PROPOSAL_FEE,
            vote_fee: DEFAULT_VOTE_FEE,
            min_starting_balance: DEFAULT_MIN_STARTING_BALANCE,
            max_starting_balance: DEFAULT_MAX_STARTING_BALANCE,
            seed_defaults: true,
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
        }
    }

    /// Verify the stored admin authorized this invocation
    pub fn verify_admin(env: &Env) -> Result<Address, Error> {
        let admin = Self::get_admin(env)?;

        // Require authorization from admin
        admin.require_auth();

        Ok(admin)
    }

    pub fn get_admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    /// Update admin address
    pub fn update_admin(env: &Env, new_admin: &Address) -> Result<(), Error> {
        Self::verify_admin(env)?;
        env.storage().instance().set(&DataKey::Admin, new_admin);
        Ok(())
    }

    pub fn get_config(env: &Env) -> Result<Config, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    /// Replace the deployment configuration
    pub fn set_config(env: &Env, config: &Config) -> Result<(), Error> {
        Self::verify_admin(env)?;
        Self::validate_config(config)?;

        env.storage().instance().set(&DataKey::Config, config);

        env.events().publish(
            (symbol_short!("config"), symbol_short!("updated")),
            (config.proposal_fee, config.vote_fee, config.seed_defaults),
        );

        Ok(())
    }

    /// Width of the starting balance range, `max - min`
    pub fn balance_spread(config: &Config) -> Result<u64, Error> {
        let spread = config
            .max_starting_balance
            .checked_sub(config.min_starting_balance)
            .ok_or(Error::InvalidConfig)?;
        u64::try_from(spread).map_err(|_| Error::InvalidConfig)
    }

    fn validate_config(config: &Config) -> Result<(), Error> {
        if config.proposal_fee <= 0 || config.vote_fee <= 0 {
            return Err(Error::InvalidConfig);
        }

        // Starting balances are drawn from [min, max)
        if config.min_starting_balance < 0
            || config.min_starting_balance >= config.max_starting_balance
        {
            return Err(Error::InvalidConfig);
        }

        // The draw is a u64 offset from min
        Self::balance_spread(config)?;

        if config.recent_window_days == 0 {
            return Err(Error::InvalidConfig);
        }

        Ok(())
    }
}
