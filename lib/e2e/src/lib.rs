//! End-to-end testing harness for Stylus contracts.
//!
//! Tests annotated with [`macro@test`] run against a local Arbitrum Nitro
//! dev node. Every [`Account`] a test asks for is created fresh and funded
//! from the node's master account, and contracts are deployed with the
//! `cargo-stylus` CLI.

mod account;
mod deploy;
mod error;
mod event;
mod macros;
mod receipt;
mod system;

pub use account::Account;
pub use deploy::Deployer;
pub use e2e_proc::test;
pub use error::Revert;
pub use event::Ext as EventExt;
pub use receipt::Ext as ReceiptExt;
pub use system::Wallet;
