//! Typed binding for the deployed collection.

use alloy::sol;

sol!(
    #[sol(rpc)]
    contract Veridca {
        function initialize(address owner, string calldata name, string calldata symbol) external;
        function safeMint(address to, string calldata uri) external;

        #[derive(Debug)]
        function name() external view returns (string memory name);
        #[derive(Debug)]
        function ownerOf(uint256 tokenId) external view returns (address ownerOf);
        #[derive(Debug)]
        function currentIndex() external view returns (uint256 currentIndex);
    }
);
