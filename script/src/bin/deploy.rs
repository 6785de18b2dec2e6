//! Deploys the prebuilt collection WASM and initializes it.

use alloy::{
    network::EthereumWallet, providers::ProviderBuilder,
    signers::local::PrivateKeySigner,
};
use e2e::{Deployer, ReceiptExt};
use veridca_script::{
    abi::Veridca, env::Env, wasm_path, TOKEN_NAME, TOKEN_SYMBOL,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env = Env::load()?;

    let signer: PrivateKeySigner = env.private_key.parse()?;
    let deployer_addr = signer.address();

    let receipt = Deployer::new(env.rpc_url.clone(), env.private_key.clone())
        .deploy_wasm(&wasm_path()?)
        .await?;
    let contract_addr = receipt.address()?;

    let wallet = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(env.rpc_url.parse()?);

    let contract = Veridca::new(contract_addr, &wallet);
    let tx_hash = contract
        .initialize(
            deployer_addr,
            TOKEN_NAME.to_string(),
            TOKEN_SYMBOL.to_string(),
        )
        .send()
        .await?
        .watch()
        .await?;

    println!("deployer: {deployer_addr}");
    println!("contract: {contract_addr}");
    println!("initialize tx: {tx_hash}");

    Ok(())
}
