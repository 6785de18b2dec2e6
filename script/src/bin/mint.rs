//! Mints one token with a sample IPFS URI on a deployed collection.

use alloy::{
    network::EthereumWallet, providers::ProviderBuilder,
    signers::local::PrivateKeySigner,
};
use eyre::ContextCompat;
use veridca_script::{abi::Veridca, env::Env, report::Report};

const SAMPLE_URI: &str =
    "ipfs://Qma3p7SnWr7ibseDYnjHSrH2fdM5MpphgjjeVBJRjLoSEM==";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env = Env::load()?;
    let contract_addr = env
        .contract_address
        .context("CONTRACT_ADDRESS must be set to the deployed collection")?;

    let signer: PrivateKeySigner = env.private_key.parse()?;
    let owner = signer.address();

    let wallet = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(env.rpc_url.parse()?);

    let contract = Veridca::new(contract_addr, &wallet);

    let Veridca::currentIndexReturn { currentIndex: token_id } =
        contract.currentIndex().call().await?;

    let receipt = contract
        .safeMint(owner, SAMPLE_URI.to_string())
        .send()
        .await?
        .get_receipt()
        .await?;

    let Veridca::currentIndexReturn { currentIndex } =
        contract.currentIndex().call().await?;
    let Veridca::ownerOfReturn { ownerOf } =
        contract.ownerOf(token_id).call().await?;

    let report = Report::new("Veridca mint")
        .with("token id", token_id)
        .with("owner", ownerOf)
        .with("token uri", SAMPLE_URI)
        .with("tx hash", receipt.transaction_hash)
        .with("gas used", receipt.gas_used)
        .with("next index", currentIndex);

    println!();
    println!("{report}");

    Ok(())
}
