use std::{path::Path, process::Command, str::FromStr};

use alloy::{
    hex,
    network::EthereumWallet,
    primitives::TxHash,
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    transports::{http::reqwest::Url, RpcError, TransportErrorKind},
};
use eyre::{Context, ContextCompat};
use regex::Regex;

/// Selector of `ProgramUpToDate()`.
const PROGRAM_UP_TO_DATE_ERROR_SELECTOR: [u8; 4] = [0xcc, 0x94, 0x4b, 0xf2];

/// A basic smart contract deployer.
pub struct Deployer {
    rpc_url: String,
    private_key: String,
}

impl Deployer {
    /// Create a deployer that signs with `private_key` and talks to the node
    /// at `rpc_url`.
    #[must_use]
    pub fn new(rpc_url: String, private_key: String) -> Self {
        Self { rpc_url, private_key }
    }

    /// Deploy and activate the contract implemented as `#[entrypoint]` in the
    /// current crate.
    ///
    /// Consumes currently configured deployer.
    ///
    /// # Errors
    ///
    /// May error if the `cargo stylus deploy` command fails.
    pub async fn deploy(self) -> eyre::Result<TransactionReceipt> {
        self.run(None).await
    }

    /// Deploy and activate an already compiled contract wasm.
    ///
    /// Consumes currently configured deployer.
    ///
    /// # Errors
    ///
    /// May error if the `cargo stylus deploy` command fails.
    pub async fn deploy_wasm(
        self,
        wasm_path: &Path,
    ) -> eyre::Result<TransactionReceipt> {
        self.run(Some(wasm_path)).await
    }

    async fn run(
        &self,
        wasm_path: Option<&Path>,
    ) -> eyre::Result<TransactionReceipt> {
        let mut command = Command::new("cargo");
        command
            .args(["stylus", "deploy"])
            .args(["-e", &self.rpc_url])
            .args(["--private-key", &self.private_key])
            .args(["--no-verify"]);

        if let Some(wasm_path) = wasm_path {
            command.arg("--wasm-file").arg(wasm_path);
        }

        let output = command
            .output()
            .context("failed to execute `cargo stylus deploy` command")?;

        // Check if the command failed
        if !output.status.success() {
            self.parse_deployment_error(output).await
        } else {
            self.get_receipt(output).await
        }
    }

    /// Band-aid for peculiar nitro dev node behavior: deploying a wasm whose
    /// code was already activated on chain makes `cargo stylus` fail gas
    /// estimation with `ProgramUpToDate()`, even though the deployment
    /// transaction itself landed and stdout carries the usual output.
    async fn parse_deployment_error(
        &self,
        output: std::process::Output,
    ) -> eyre::Result<TransactionReceipt> {
        let stderr = &String::from_utf8_lossy(&output.stderr);

        // Look for the error pattern with hex data
        let revert_data_regex =
            Regex::new(r#"data: Some\(String\("(0x[a-fA-F0-9]+)"\)\)"#)
                .context("failed to create revert data regex")?;

        if let Some(hex_data) =
            revert_data_regex.captures(stderr).and_then(|cap| cap.get(1))
        {
            let hex_str = &hex_data.as_str()[2..]; // Skip "0x" prefix
            let data = hex::decode(hex_str)
                .context(format!("failed to decode hex: {hex_str}"))?;

            if data.len() >= 4
                && data[0..4] == PROGRAM_UP_TO_DATE_ERROR_SELECTOR
            {
                return self.get_receipt(output).await;
            }

            return Err(eyre::eyre!(hex_str.to_string()));
        }

        Err(eyre::eyre!("Deployment failed: {}", stderr))
    }

    async fn get_receipt(
        &self,
        output: std::process::Output,
    ) -> eyre::Result<TransactionReceipt> {
        // Convert output to string
        let output_str = String::from_utf8_lossy(&output.stdout);

        // Extract transaction hash using regex
        // The pattern matches a 0x followed by 64 hex characters
        let tx_hash_regex = Regex::new(r"0x[a-fA-F0-9]{64}")
            .context("Failed to create tx hash regex")?;

        let tx_hash = tx_hash_regex
            .find(&*output_str)
            .context(format!(
                "No transaction hash found in output {output_str}"
            ))?
            .as_str();

        // Convert string to TxHash
        let tx_hash = TxHash::from_str(tx_hash)
            .context("Failed to parse transaction hash")?;

        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(EthereumWallet::from(
                self.private_key.parse::<PrivateKeySigner>()?,
            ))
            .on_http(Url::from_str(&self.rpc_url).expect("invalid Url"));

        let receipt = provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e: RpcError<TransportErrorKind>| {
                eyre::eyre!("RPC error: {}", e)
            })?
            .ok_or_else(|| eyre::eyre!("Transaction receipt not found"))?;

        Ok(receipt)
    }
}
