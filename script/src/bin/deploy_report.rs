//! Deploys and initializes the collection, then prints a deployment report.

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use e2e::{Deployer, ReceiptExt};
use veridca_script::{
    abi::Veridca, env::Env, report::Report, wasm_path, TOKEN_NAME,
    TOKEN_SYMBOL,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env = Env::load()?;

    let signer: PrivateKeySigner = env.private_key.parse()?;
    let deployer_addr = signer.address();

    let wallet = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(env.rpc_url.parse()?);

    let chain_id = wallet.get_chain_id().await?;
    let balance_before = wallet.get_balance(deployer_addr).await?;

    let receipt = Deployer::new(env.rpc_url.clone(), env.private_key.clone())
        .deploy_wasm(&wasm_path()?)
        .await?;
    let contract_addr = receipt.address()?;

    let contract = Veridca::new(contract_addr, &wallet);
    let init_receipt = contract
        .initialize(
            deployer_addr,
            TOKEN_NAME.to_string(),
            TOKEN_SYMBOL.to_string(),
        )
        .send()
        .await?
        .get_receipt()
        .await?;

    let balance_after = wallet.get_balance(deployer_addr).await?;

    let Veridca::nameReturn { name } = contract.name().call().await?;

    let report = Report::new("Veridca deployment")
        .with("contract name", name)
        .with("contract address", contract_addr)
        .with("deployer", deployer_addr)
        .with("balance before", balance_before)
        .with("balance after", balance_after)
        .with("gas used", receipt.gas_used)
        .with("effective gas price", receipt.effective_gas_price)
        .with("tx hash", receipt.transaction_hash)
        .with("block number", receipt.block_number()?)
        .with("block hash", receipt.block_hash()?)
        .with("initialize tx", init_receipt.transaction_hash)
        .with("chain id", chain_id);

    println!();
    println!("{report}");

    Ok(())
}
