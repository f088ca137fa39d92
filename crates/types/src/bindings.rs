#![allow(missing_docs)]
use alloy::primitives::{Address, Bytes, U256};

alloy::sol! {
    /// A meta-transaction authorized off-chain by `from` and submitted by a
    /// whitelisted relayer.
    ///
    /// The EIP-712 type string is
    /// `ForwardRequest(address from,address to,uint256 value,uint256 gas,uint256 nonce,bytes data)`.
    #[derive(Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    struct ForwardRequest {
        address from;
        address to;
        uint256 value;
        uint256 gas;
        uint256 nonce;
        bytes data;
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IAwlForwarder {
        event SenderWhitelisted(address indexed sender);
        event SenderRemovedFromWhitelist(address indexed sender);
        event Paused(address account);
        event Unpaused(address account);
        event Killed(address indexed recipient, uint256 amount);
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
        event ForwardResult(address indexed from, address indexed to, bool success);

        function getNonce(address from) external view returns (uint256);
        function verify(ForwardRequest calldata req, bytes calldata signature) external view returns (bool);
        function execute(ForwardRequest calldata req, bytes calldata signature) external payable returns (bool, bytes memory);

        function addSenderToWhitelist(address sender) external;
        function removeSenderFromWhitelist(address sender) external;
        function pause() external;
        function unpause() external;
        function kill(address recipient) external;

        function owner() external view returns (address);
        function transferOwnership(address newOwner) external;
        function renounceOwnership() external;
    }
}

impl ForwardRequest {
    /// Create a new request.
    pub const fn new(
        from: Address,
        to: Address,
        value: U256,
        gas: U256,
        nonce: U256,
        data: Bytes,
    ) -> Self {
        Self { from, to, value, gas, nonce, data }
    }

    /// The calldata delivered to `to`, with `from` appended per ERC-2771 so
    /// the destination can recover the original signer.
    pub fn forwarded_payload(&self) -> Bytes {
        let mut buf = Vec::with_capacity(self.data.len() + 20);
        buf.extend_from_slice(&self.data);
        buf.extend_from_slice(self.from.as_slice());
        buf.into()
    }
}
