use alloy::sol;

// Minimal ERC-20 surface: the Transfer event and the two metadata getters.
sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);

        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }
}
