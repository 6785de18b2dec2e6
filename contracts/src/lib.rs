//! Veridca: a role-gated NFT collection with per-token metadata uris.
//!
//! Token ids are assigned sequentially starting from 1 and are never reused.
//! Minting, burning and pausing are each gated by a dedicated role, granted
//! to the collection owner by [`Veridca::initialize`].
#![cfg_attr(not(test), no_main)]
extern crate alloc;

use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{Address, FixedBytes, B256, U256};
use alloy_sol_types::sol;
use openzeppelin_stylus::{
    access::control::{self, AccessControl, IAccessControl},
    token::erc721::{self, Erc721, IErc721},
    utils::{introspection::erc165::IErc165, pausable, IPausable, Pausable},
};
use stylus_sdk::{
    abi::Bytes,
    prelude::*,
    storage::{StorageBool, StorageMap, StorageString, StorageU256},
};

/// `keccak256("MINTER_ROLE")`
pub const MINTER_ROLE: [u8; 32] =
    keccak_const::Keccak256::new().update(b"MINTER_ROLE").finalize();
/// `keccak256("PAUSER_ROLE")`
pub const PAUSER_ROLE: [u8; 32] =
    keccak_const::Keccak256::new().update(b"PAUSER_ROLE").finalize();
/// `keccak256("BURNER_ROLE")`
pub const BURNER_ROLE: [u8; 32] =
    keccak_const::Keccak256::new().update(b"BURNER_ROLE").finalize();

/// ERC-721 Metadata interface id.
const ERC721_METADATA_INTERFACE_ID: u32 = 0x5b5e139f;

sol! {
    /// Indicates that `initialize` was called more than once.
    #[derive(Debug)]
    error AlreadyInitialized();

    /// Indicates that a mint was attempted with an empty metadata uri.
    #[derive(Debug)]
    error URISetEmptyValue();
}

/// An error that occurred in the [`Veridca`] contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    Erc721(erc721::Error),
    AccessControl(control::Error),
    Pausable(pausable::Error),
    AlreadyInitialized(AlreadyInitialized),
    UriSetEmptyValue(URISetEmptyValue),
}

#[entrypoint]
#[storage]
struct Veridca {
    #[borrow]
    pub erc721: Erc721,
    #[borrow]
    pub access: AccessControl,
    pub pausable: Pausable,
    pub name: StorageString,
    pub symbol: StorageString,
    pub token_uris: StorageMap<U256, StorageString>,
    pub initialized: StorageBool,
    pub minted: StorageU256,
    pub burned: StorageU256,
}

#[public]
#[inherit(Erc721, AccessControl)]
impl Veridca {
    /// One-shot initializer: sets the collection name and symbol and grants
    /// `owner` the admin, minter, pauser and burner roles.
    pub fn initialize(
        &mut self,
        owner: Address,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if self.initialized.get() {
            return Err(AlreadyInitialized {}.into());
        }
        self.initialized.set(true);

        self.name.set_str(name);
        self.symbol.set_str(symbol);

        self.access
            ._grant_role(AccessControl::DEFAULT_ADMIN_ROLE.into(), owner);
        self.access._grant_role(MINTER_ROLE.into(), owner);
        self.access._grant_role(PAUSER_ROLE.into(), owner);
        self.access._grant_role(BURNER_ROLE.into(), owner);
        Ok(())
    }

    /// Mints the next sequential token to `to` and stores its metadata
    /// `uri`.
    pub fn safe_mint(&mut self, to: Address, uri: String) -> Result<(), Error> {
        self.access.only_role(MINTER_ROLE.into())?;
        if uri.is_empty() {
            return Err(URISetEmptyValue {}.into());
        }
        self.pausable.when_not_paused()?;

        let token_id = self.current_index();
        self.erc721._safe_mint(to, token_id, &vec![].into())?;
        self.token_uris.setter(token_id).set_str(uri);
        self.minted.set(self.minted.get() + U256::from(1));
        Ok(())
    }

    /// Burns `token_id` and deletes its stored metadata uri.
    ///
    /// The burner role replaces the usual owner-or-approved check.
    pub fn burn(&mut self, token_id: U256) -> Result<(), Error> {
        self.access.only_role(BURNER_ROLE.into())?;
        self.pausable.when_not_paused()?;

        self.erc721._burn(token_id)?;
        self.burned.set(self.burned.get() + U256::from(1));
        self.token_uris.delete(token_id);
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), Error> {
        self.access.only_role(PAUSER_ROLE.into())?;
        self.pausable.pause()?;
        Ok(())
    }

    pub fn unpause(&mut self) -> Result<(), Error> {
        self.access.only_role(PAUSER_ROLE.into())?;
        self.pausable.unpause()?;
        Ok(())
    }

    pub fn paused(&self) -> bool {
        self.pausable.paused()
    }

    pub fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Error> {
        self.pausable.when_not_paused()?;
        self.erc721.transfer_from(from, to, token_id)?;
        Ok(())
    }

    pub fn safe_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Error> {
        self.pausable.when_not_paused()?;
        self.erc721.safe_transfer_from(from, to, token_id)?;
        Ok(())
    }

    #[selector(name = "safeTransferFrom")]
    pub fn safe_transfer_from_with_data(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
        data: Bytes,
    ) -> Result<(), Error> {
        self.pausable.when_not_paused()?;
        self.erc721.safe_transfer_from_with_data(from, to, token_id, data)?;
        Ok(())
    }

    pub fn name(&self) -> String {
        self.name.get_string()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_string()
    }

    /// Returns the metadata uri of `token_id`, reverting for tokens that
    /// were never minted or are already burned.
    #[selector(name = "tokenURI")]
    pub fn token_uri(&self, token_id: U256) -> Result<String, Error> {
        self.erc721.owner_of(token_id)?;
        Ok(self.token_uris.getter(token_id).get_string())
    }

    pub fn exists(&self, token_id: U256) -> bool {
        self.erc721.owner_of(token_id).is_ok()
    }

    /// The id the next minted token will get.
    pub fn current_index(&self) -> U256 {
        self.start_token_id() + self.minted.get()
    }

    /// The first token id of the collection.
    pub fn start_token_id(&self) -> U256 {
        U256::from(1)
    }

    pub fn total_minted(&self) -> U256 {
        self.minted.get()
    }

    pub fn total_burned(&self) -> U256 {
        self.burned.get()
    }

    /// Number of tokens currently in circulation.
    pub fn total_supply(&self) -> U256 {
        self.minted.get() - self.burned.get()
    }

    #[selector(name = "DEFAULT_ADMIN_ROLE")]
    pub fn default_admin_role(&self) -> B256 {
        AccessControl::DEFAULT_ADMIN_ROLE.into()
    }

    #[selector(name = "MINTER_ROLE")]
    pub fn minter_role(&self) -> B256 {
        MINTER_ROLE.into()
    }

    #[selector(name = "PAUSER_ROLE")]
    pub fn pauser_role(&self) -> B256 {
        PAUSER_ROLE.into()
    }

    #[selector(name = "BURNER_ROLE")]
    pub fn burner_role(&self) -> B256 {
        BURNER_ROLE.into()
    }

    pub fn supports_interface(&self, interface_id: FixedBytes<4>) -> bool {
        self.erc721.supports_interface(interface_id)
            || u32::from_be_bytes(*interface_id)
                == ERC721_METADATA_INTERFACE_ID
    }
}
