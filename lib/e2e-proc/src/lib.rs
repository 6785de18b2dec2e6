//! Procedural macros for end-to-end testing of Stylus contracts.
use proc_macro::TokenStream;


/// Defines an end-to-end test of a Stylus contract.
///
/// Every argument of the annotated function is created and funded before
/// the test body runs.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn mints_sequential_ids(alice: Account) -> eyre::Result<()> {
///     let contract_addr = alice.as_deployer().deploy().await?.address()?;
///     let contract = Veridca::new(contract_addr, &alice.wallet);
///
///     let receipt = receipt!(contract.safeMint(alice.address(), uri()))?;
///     assert!(receipt.emits(Veridca::Transfer {
///         from: Address::ZERO,
///         to: alice.address(),
///         tokenId: uint!(1_U256),
///     }));
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(&attr.into(), input.into()).into()
}
