pub mod auth;
pub mod config;
pub mod payment;
pub mod raffle;
pub mod testing;

pub use auth::{
    create_authenticator, AuthError, Authenticator, Credentials, Identity, NoneAuthenticator,
    StaticAuthenticator,
};
pub use config::{
    load_config, load_config_from_str, validate_config, AuthConfig, AuthMethod, Config,
    ConfigError, PaymentConfig, RaffleConfig,
};
pub use payment::{QrRenderer, QrServerRenderer};
pub use raffle::{
    Buyer, Pool, PoolError, PoolStats, PublicStatus, Ticket, TicketStatus, DEFAULT_LOCK_COUNT,
    DEFAULT_NAMES, POOL_SIZE,
};
