#![allow(dead_code)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract Veridca {
        function initialize(address owner, string calldata name, string calldata symbol) external;

        function safeMint(address to, string calldata uri) external;
        function burn(uint256 tokenId) external;

        function pause() external;
        function unpause() external;
        #[derive(Debug)]
        function paused() external view returns (bool paused);

        #[derive(Debug)]
        function name() external view returns (string memory name);
        #[derive(Debug)]
        function symbol() external view returns (string memory symbol);
        #[derive(Debug)]
        function tokenURI(uint256 tokenId) external view returns (string memory tokenURI);

        #[derive(Debug)]
        function balanceOf(address owner) external view returns (uint256 balance);
        #[derive(Debug)]
        function ownerOf(uint256 tokenId) external view returns (address ownerOf);
        function approve(address to, uint256 tokenId) external;
        #[derive(Debug)]
        function getApproved(uint256 tokenId) external view returns (address approved);
        function setApprovalForAll(address operator, bool approved) external;
        #[derive(Debug)]
        function isApprovedForAll(address owner, address operator) external view returns (bool approved);
        function transferFrom(address from, address to, uint256 tokenId) external;
        function safeTransferFrom(address from, address to, uint256 tokenId) external;
        function safeTransferFrom(address from, address to, uint256 tokenId, bytes calldata data) external;

        function DEFAULT_ADMIN_ROLE() external view returns (bytes32 role);
        function MINTER_ROLE() external view returns (bytes32 role);
        function PAUSER_ROLE() external view returns (bytes32 role);
        function BURNER_ROLE() external view returns (bytes32 role);
        #[derive(Debug)]
        function hasRole(bytes32 role, address account) external view returns (bool hasRole);
        #[derive(Debug)]
        function getRoleAdmin(bytes32 role) external view returns (bytes32 role);
        function grantRole(bytes32 role, address account) external;
        function revokeRole(bytes32 role, address account) external;
        function renounceRole(bytes32 role, address callerConfirmation) external;

        #[derive(Debug)]
        function currentIndex() external view returns (uint256 currentIndex);
        #[derive(Debug)]
        function startTokenId() external view returns (uint256 startTokenId);
        #[derive(Debug)]
        function totalMinted() external view returns (uint256 totalMinted);
        #[derive(Debug)]
        function totalBurned() external view returns (uint256 totalBurned);
        #[derive(Debug)]
        function totalSupply() external view returns (uint256 totalSupply);
        #[derive(Debug)]
        function exists(uint256 tokenId) external view returns (bool exists);

        function supportsInterface(bytes4 interfaceId) external pure returns (bool);

        error AlreadyInitialized();
        error URISetEmptyValue();

        error ERC721InvalidOwner(address owner);
        error ERC721NonexistentToken(uint256 tokenId);
        error ERC721IncorrectOwner(address sender, uint256 tokenId, address owner);
        error ERC721InvalidSender(address sender);
        error ERC721InvalidReceiver(address receiver);
        error ERC721InsufficientApproval(address operator, uint256 tokenId);
        error ERC721InvalidApprover(address approver);
        error ERC721InvalidOperator(address operator);

        error AccessControlUnauthorizedAccount(address account, bytes32 neededRole);
        error AccessControlBadConfirmation();

        error EnforcedPause();
        error ExpectedPause();

        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
        #[derive(Debug, PartialEq)]
        event Approval(address indexed owner, address indexed approved, uint256 indexed tokenId);
        #[derive(Debug, PartialEq)]
        event ApprovalForAll(address indexed owner, address indexed operator, bool approved);
        #[derive(Debug, PartialEq)]
        event Paused(address account);
        #[derive(Debug, PartialEq)]
        event Unpaused(address account);
        #[derive(Debug, PartialEq)]
        event RoleGranted(bytes32 indexed role, address indexed account, address indexed sender);
        #[derive(Debug, PartialEq)]
        event RoleRevoked(bytes32 indexed role, address indexed account, address indexed sender);
    }
);
