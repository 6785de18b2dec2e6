//! Prints the configured signer's account details.

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use veridca_script::{env::Env, report::Report};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env = Env::load()?;

    let signer: PrivateKeySigner = env.private_key.parse()?;
    let address = signer.address();

    let wallet = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(env.rpc_url.parse()?);

    let balance = wallet.get_balance(address).await?;
    let nonce = wallet.get_transaction_count(address).await?;
    let chain_id = wallet.get_chain_id().await?;

    let report = Report::new("Configured signer")
        .with("address", address)
        .with("balance", balance)
        .with("nonce", nonce)
        .with("chain id", chain_id);

    println!();
    println!("{report}");

    Ok(())
}
