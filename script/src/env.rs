//! Environment configuration shared by every script.

use alloy::primitives::Address;
use eyre::bail;

const RPC_URL_VAR: &str = "RPC_URL";
const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
const CONTRACT_ADDRESS_VAR: &str = "CONTRACT_ADDRESS";

const DEFAULT_RPC_URL: &str = "http://localhost:8547";

/// Validated process environment for the scripts.
#[derive(Debug, Clone)]
pub struct Env {
    /// Node endpoint. Defaults to the local nitro dev node.
    pub rpc_url: String,
    /// Hex-encoded key of the account the scripts transact with.
    pub private_key: String,
    /// Address of an already deployed collection, when one is targeted.
    pub contract_address: Option<Address>,
}

impl Env {
    /// Loads the configuration from the process environment.
    ///
    /// Collects every problem instead of failing on the first one, so a
    /// misconfigured run names all offending variables at once.
    ///
    /// # Errors
    ///
    /// May fail if `PRIVATE_KEY` is unset or `CONTRACT_ADDRESS` does not
    /// hold a checksummed address.
    pub fn load() -> eyre::Result<Self> {
        let mut problems = Vec::new();

        let rpc_url = std::env::var(RPC_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_owned());

        let private_key = std::env::var(PRIVATE_KEY_VAR)
            .ok()
            .filter(|pk| !pk.trim().is_empty());
        if private_key.is_none() {
            problems.push(format!(
                "{PRIVATE_KEY_VAR} must be set to the signer's private key"
            ));
        }

        let contract_address = match std::env::var(CONTRACT_ADDRESS_VAR) {
            Ok(raw) => match Address::parse_checksummed(&raw, None) {
                Ok(address) => Some(address),
                Err(e) => {
                    problems.push(format!(
                        "{CONTRACT_ADDRESS_VAR} is not a checksummed address: {e}"
                    ));
                    None
                }
            },
            Err(_) => None,
        };

        if let Some(private_key) = private_key {
            if problems.is_empty() {
                return Ok(Env { rpc_url, private_key, contract_address });
            }
        }

        bail!("invalid environment:\n  - {}", problems.join("\n  - "));
    }
}
