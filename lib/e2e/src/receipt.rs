use alloy::{
    network::ReceiptResponse,
    primitives::{Address, B256},
    rpc::types::TransactionReceipt,
};
use eyre::ContextCompat;

/// Extension trait to recover deployment details from a receipt.
pub trait Ext {
    /// Returns the address of the contract from the [`TransactionReceipt`].
    ///
    /// # Errors
    ///
    /// May fail if there's no contract address.
    fn address(&self) -> eyre::Result<Address>;

    /// Returns the number of the block the transaction was included in.
    ///
    /// # Errors
    ///
    /// May fail if the transaction is still pending.
    fn block_number(&self) -> eyre::Result<u64>;

    /// Returns the hash of the block the transaction was included in.
    ///
    /// # Errors
    ///
    /// May fail if the transaction is still pending.
    fn block_hash(&self) -> eyre::Result<B256>;
}

impl Ext for TransactionReceipt {
    fn address(&self) -> eyre::Result<Address> {
        self.contract_address().context("should contain contract address")
    }

    fn block_number(&self) -> eyre::Result<u64> {
        ReceiptResponse::block_number(self)
            .context("should contain block number")
    }

    fn block_hash(&self) -> eyre::Result<B256> {
        ReceiptResponse::block_hash(self).context("should contain block hash")
    }
}
