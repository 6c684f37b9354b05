//! `LegacyERC20NativeToken` binding.
//!
//! The ABI and creation bytecode are the compiler artifacts of the contract,
//! embedded verbatim. Do not edit them by hand.

use alloy_sol_types::sol;

/// Compiler-emitted ABI of `LegacyERC20NativeToken`.
pub const ABI: &str = r#"[{"type":"constructor","inputs":[],"stateMutability":"nonpayable"},{"type":"function","name":"BRIDGE","inputs":[],"outputs":[{"name":"","type":"address","internalType":"address"}],"stateMutability":"view"},{"type":"function","name":"REMOTE_TOKEN","inputs":[],"outputs":[{"name":"","type":"address","internalType":"address"}],"stateMutability":"view"},{"type":"function","name":"allowance","inputs":[{"name":"owner","type":"address","internalType":"address"},{"name":"spender","type":"address","internalType":"address"}],"outputs":[{"name":"","type":"uint256","internalType":"uint256"}],"stateMutability":"view"},{"type":"function","name":"approve","inputs":[{"name":"","type":"address","internalType":"address"},{"name":"","type":"uint256","internalType":"uint256"}],"outputs":[{"name":"","type":"bool","internalType":"bool"}],"stateMutability":"nonpayable"},{"type":"function","name":"balanceOf","inputs":[{"name":"_who","type":"address","internalType":"address"}],"outputs":[{"name":"","type":"uint256","internalType":"uint256"}],"stateMutability":"view"},{"type":"function","name":"bridge","inputs":[],"outputs":[{"name":"","type":"address","internalType":"address"}],"stateMutability":"view"},{"type":"function","name":"burn","inputs":[{"name":"","type":"address","internalType":"address"},{"name":"","type":"uint256","internalType":"uint256"}],"outputs":[],"stateMutability":"nonpayable"},{"type":"function","name":"decimals","inputs":[],"outputs":[{"name":"","type":"uint8","internalType":"uint8"}],"stateMutability":"view"},{"type":"function","name":"decreaseAllowance","inputs":[{"name":"","type":"address","internalType":"address"},{"name":"","type":"uint256","internalType":"uint256"}],"outputs":[{"name":"","type":"bool","internalType":"bool"}],"stateMutability":"nonpayable"},{"type":"function","name":"increaseAllowance","inputs":[{"name":"","type":"address","internalType":"address"},{"name":"","type":"uint256","internalType":"uint256"}],"outputs":[{"name":"","type":"bool","internalType":"bool"}],"stateMutability":"nonpayable"},{"type":"function","name":"l1Token","inputs":[],"outputs":[{"name":"","type":"address","internalType":"address"}],"stateMutability":"view"},{"type":"function","name":"l2Bridge","inputs":[],"outputs":[{"name":"","type":"address","internalType":"address"}],"stateMutability":"view"},{"type":"function","name":"mint","inputs":[{"name":"","type":"address","internalType":"address"},{"name":"","type":"uint256","internalType":"uint256"}],"outputs":[],"stateMutability":"nonpayable"},{"type":"function","name":"name","inputs":[],"outputs":[{"name":"","type":"string","internalType":"string"}],"stateMutability":"view"},{"type":"function","name":"remoteToken","inputs":[],"outputs":[{"name":"","type":"address","internalType":"address"}],"stateMutability":"view"},{"type":"function","name":"supportsInterface","inputs":[{"name":"_interfaceId","type":"bytes4","internalType":"bytes4"}],"outputs":[{"name":"","type":"bool","internalType":"bool"}],"stateMutability":"pure"},{"type":"function","name":"symbol","inputs":[],"outputs":[{"name":"","type":"string","internalType":"string"}],"stateMutability":"view"},{"type":"function","name":"totalSupply","inputs":[],"outputs":[{"name":"","type":"uint256","internalType":"uint256"}],"stateMutability":"view"},{"type":"function","name":"transfer","inputs":[{"name":"","type":"address","internalType":"address"},{"name":"","type":"uint256","internalType":"uint256"}],"outputs":[{"name":"","type":"bool","internalType":"bool"}],"stateMutability":"nonpayable"},{"type":"function","name":"transferFrom","inputs":[{"name":"","type":"address","internalType":"address"},{"name":"","type":"address","internalType":"address"},{"name":"","type":"uint256","internalType":"uint256"}],"outputs":[{"name":"","type":"bool","internalType":"bool"}],"stateMutability":"nonpayable"},{"type":"function","name":"version","inputs":[],"outputs":[{"name":"","type":"string","internalType":"string"}],"stateMutability":"view"},{"type":"event","name":"Approval","inputs":[{"name":"owner","type":"address","indexed":true,"internalType":"address"},{"name":"spender","type":"address","indexed":true,"internalType":"address"},{"name":"value","type":"uint256","indexed":false,"internalType":"uint256"}],"anonymous":false},{"type":"event","name":"Burn","inputs":[{"name":"account","type":"address","indexed":true,"internalType":"address"},{"name":"amount","type":"uint256","indexed":false,"internalType":"uint256"}],"anonymous":false},{"type":"event","name":"Mint","inputs":[{"name":"account","type":"address","indexed":true,"internalType":"address"},{"name":"amount","type":"uint256","indexed":false,"internalType":"uint256"}],"anonymous":false},{"type":"event","name":"Transfer","inputs":[{"name":"from","type":"address","indexed":true,"internalType":"address"},{"name":"to","type":"address","indexed":true,"internalType":"address"},{"name":"value","type":"uint256","indexed":false,"internalType":"uint256"}],"anonymous":false}]"#;

sol! {
    /// Legacy ERC-20 view of the L2 native token.
    ///
    /// Balances and metadata are readable, every state-changing entry point
    /// reverts on-chain.
    #[sol(rpc, all_derives, bytecode = "0x60e06040523480156200001157600080fd5b5073420000000000000000000000000000000000001060006040518060400160405280600581526020016422ba3432b960d91b8152506040518060400160405280600381526020016208aa8960eb1b81525060128282816003908162000078919062000152565b50600462000087828262000152565b5050506001600160a01b039384166080529390921660a052505060ff1660c0526200021e565b634e487b7160e01b600052604160045260246000fd5b600181811c90821680620000d857607f821691505b602082108103620000f957634e487b7160e01b600052602260045260246000fd5b50919050565b601f8211156200014d57600081815260208120601f850160051c81016020861015620001285750805b601f850160051c820191505b81811015620001495782815560010162000134565b5050505b505050565b81516001600160401b038111156200016e576200016e620000ad565b62000186816200017f8454620000c3565b84620000ff565b602080601f831160018114620001be5760008415620001a55750858301515b600019600386901b1c1916600185901b17855562000149565b600085815260208120601f198616915b82811015620001ef57888601518255948401946001909101908401620001ce565b50858210156200020e5787850151600019600388901b60f8161c191681555b5050505050600190811b01905550565b60805160a05160c051610b4b6200025c600039600061024401526000818161033d01526103d20152600081816101a901526103630152610b4b6000f3fe608060405234801561001057600080fd5b50600436106101775760003560e01c806370a08231116100d8578063ae1f6aaf1161008c578063dd62ed3e11610066578063dd62ed3e14610387578063e78cea921461033b578063ee9a31a2146103cd57600080fd5b8063ae1f6aaf1461033b578063c01e1bd614610361578063d6c0b2c41461036157600080fd5b80639dc29fac116100bd5780639dc29fac14610302578063a457c2d714610315578063a9059cbb1461032857600080fd5b806370a08231146102d257806395d89b41146102fa57600080fd5b806323b872dd1161012f5780633950935111610114578063395093511461026e57806340c10f191461028157806354fd4d501461029657600080fd5b806323b872dd1461022a578063313ce5671461023d57600080fd5b806306fdde031161016057806306fdde03146101f0578063095ea7b31461020557806318160ddd1461021857600080fd5b806301ffc9a71461017c578063033964be146101a4575b600080fd5b61018f61018a366004610952565b6103f4565b60405190151581526020015b60405180910390f35b6101cb7f000000000000000000000000000000000000000000000000000000000000000081565b60405173ffffffffffffffffffffffffffffffffffffffff909116815260200161019b565b6101f86104e5565b60405161019b919061099b565b61018f610213366004610a37565b610577565b6002545b60405190815260200161019b565b61018f610238366004610a61565b610607565b60405160ff7f000000000000000000000000000000000000000000000000000000000000000016815260200161019b565b61018f61027c366004610a37565b610692565b61029461028f366004610a37565b61071d565b005b6101f86040518060400160405280600581526020017f312e332e3000000000000000000000000000000000000000000000000000000081525081565b61021c6102e0366004610a9d565b73ffffffffffffffffffffffffffffffffffffffff163190565b6101f86107a5565b610294610310366004610a37565b6107b4565b61018f610323366004610a37565b61083c565b61018f610336366004610a37565b6108c7565b7f00000000000000000000000000000000000000000000000000000000000000006101cb565b7f00000000000000000000000000000000000000000000000000000000000000006101cb565b61021c610395366004610ab8565b73ffffffffffffffffffffffffffffffffffffffff918216600090815260016020908152604080832093909416825291909152205490565b6101cb7f000000000000000000000000000000000000000000000000000000000000000081565b60007f01ffc9a7000000000000000000000000000000000000000000000000000000007f1d1d8b63000000000000000000000000000000000000000000000000000000007fec4fc8e3000000000000000000000000000000000000000000000000000000007fffffffff0000000000000000000000000000000000000000000000000000000085168314806104ad57507fffffffff00000000000000000000000000000000000000000000000000000000858116908316145b806104dc57507fffffffff00000000000000000000000000000000000000000000000000000000858116908216145b95945050505050565b6060600380546104f490610aeb565b80601f016020809104026020016040519081016040528092919081815260200182805461052090610aeb565b801561056d5780601f106105425761010080835404028352916020019161056d565b820191906000526020600020905b81548152906001019060200180831161055057829003601f168201915b5050505050905090565b6040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602b60248201527f4c656761637945524332304e6174697665546f6b656e3a20617070726f76652060448201527f69732064697361626c656400000000000000000000000000000000000000000060648201526000906084015b60405180910390fd5b6040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152603060248201527f4c656761637945524332304e6174697665546f6b656e3a207472616e7366657260448201527f46726f6d2069732064697361626c65640000000000000000000000000000000060648201526000906084016105fe565b6040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152603560248201527f4c656761637945524332304e6174697665546f6b656e3a20696e63726561736560448201527f416c6c6f77616e63652069732064697361626c6564000000000000000000000060648201526000906084016105fe565b6040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602860248201527f4c656761637945524332304e6174697665546f6b656e3a206d696e742069732060448201527f64697361626c656400000000000000000000000000000000000000000000000060648201526084016105fe565b6060600480546104f490610aeb565b6040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602860248201527f4c656761637945524332304e6174697665546f6b656e3a206275726e2069732060448201527f64697361626c656400000000000000000000000000000000000000000000000060648201526084016105fe565b6040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152603560248201527f4c656761637945524332304e6174697665546f6b656e3a20646563726561736560448201527f416c6c6f77616e63652069732064697361626c6564000000000000000000000060648201526000906084016105fe565b6040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152602c60248201527f4c656761637945524332304e6174697665546f6b656e3a207472616e7366657260448201527f2069732064697361626c6564000000000000000000000000000000000000000060648201526000906084016105fe565b60006020828403121561096457600080fd5b81357fffffffff000000000000000000000000000000000000000000000000000000008116811461099457600080fd5b9392505050565b600060208083528351808285015260005b818110156109c8578581018301518582016040015282016109ac565b818111156109da576000604083870101525b50601f017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe016929092016040019392505050565b803573ffffffffffffffffffffffffffffffffffffffff81168114610a3257600080fd5b919050565b60008060408385031215610a4a57600080fd5b610a5383610a0e565b946020939093013593505050565b600080600060608486031215610a7657600080fd5b610a7f84610a0e565b9250610a8d60208501610a0e565b9150604084013590509250925092565b600060208284031215610aaf57600080fd5b61099482610a0e565b60008060408385031215610acb57600080fd5b610ad483610a0e565b9150610ae260208401610a0e565b90509250929050565b600181811c90821680610aff57607f821691505b602082108103610b38577f4e487b7100000000000000000000000000000000000000000000000000000000600052602260045260246000fd5b5091905056fea164736f6c634300080f000a")]
    contract LegacyERC20NativeToken {
        constructor();

        event Approval(address indexed owner, address indexed spender, uint256 value);
        event Burn(address indexed account, uint256 amount);
        event Mint(address indexed account, uint256 amount);
        event Transfer(address indexed from, address indexed to, uint256 value);

        function BRIDGE() external view returns (address);
        function REMOTE_TOKEN() external view returns (address);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address, uint256) external returns (bool);
        function balanceOf(address _who) external view returns (uint256);
        function bridge() external view returns (address);
        function burn(address, uint256) external;
        function decimals() external view returns (uint8);
        function decreaseAllowance(address, uint256) external returns (bool);
        function increaseAllowance(address, uint256) external returns (bool);
        function l1Token() external view returns (address);
        function l2Bridge() external view returns (address);
        function mint(address, uint256) external;
        function name() external view returns (string memory);
        function remoteToken() external view returns (address);
        function supportsInterface(bytes4 _interfaceId) external pure returns (bool);
        function symbol() external view returns (string memory);
        function totalSupply() external view returns (uint256);
        function transfer(address, uint256) external returns (bool);
        function transferFrom(address, address, uint256) external returns (bool);
        function version() external view returns (string memory);
    }
}

#[cfg(test)]
mod tests {
    use super::{LegacyERC20NativeToken::*, ABI};
    use crate::test_utils::{assert_abi_matches, assert_dispatches};
    use alloy_primitives::{b256, hex, Address, FixedBytes, Log, U256};
    use alloy_sol_types::{SolCall, SolEvent, SolEventInterface};

    #[test]
    fn test_abi_matches_binding() {
        assert_abi_matches(
            ABI,
            LegacyERC20NativeTokenCalls::SELECTORS,
            LegacyERC20NativeTokenEvents::SELECTORS,
            &[],
        );
    }

    #[test]
    fn test_bytecode_dispatches_every_function() {
        assert_dispatches(ABI, &super::LegacyERC20NativeToken::BYTECODE);
    }

    #[test]
    fn test_known_selectors() {
        assert_eq!(BRIDGECall::SELECTOR, hex!("ee9a31a2"));
        assert_eq!(REMOTE_TOKENCall::SELECTOR, hex!("033964be"));
        assert_eq!(balanceOfCall::SELECTOR, hex!("70a08231"));
        assert_eq!(burnCall::SELECTOR, hex!("9dc29fac"));
        assert_eq!(mintCall::SELECTOR, hex!("40c10f19"));
        assert_eq!(supportsInterfaceCall::SELECTOR, hex!("01ffc9a7"));
        assert_eq!(versionCall::SELECTOR, hex!("54fd4d50"));
        assert_eq!(
            Transfer::SIGNATURE_HASH,
            b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
        assert_eq!(
            Approval::SIGNATURE_HASH,
            b256!("8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925")
        );
    }

    #[test]
    fn test_unnamed_params_are_positional() {
        let call = transferFromCall {
            _0: Address::repeat_byte(0x01),
            _1: Address::repeat_byte(0x02),
            _2: U256::from(3u64),
        };
        let decoded = transferFromCall::abi_decode(&call.abi_encode()).unwrap();
        assert_eq!(decoded._0, call._0);
        assert_eq!(decoded._1, call._1);
        assert_eq!(decoded._2, call._2);
    }

    #[test]
    fn test_supports_interface_takes_bytes4() {
        let call = supportsInterfaceCall { _interfaceId: FixedBytes(hex!("01ffc9a7")) };
        let data = call.abi_encode();
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[4..8], &hex!("01ffc9a7"));
    }

    #[test]
    fn test_decode_mint_log() {
        let event = Mint { account: Address::repeat_byte(0x05), amount: U256::from(10u64) };
        let log = Log { address: Address::ZERO, data: event.encode_log_data() };
        match LegacyERC20NativeTokenEvents::decode_log(&log).unwrap().data {
            LegacyERC20NativeTokenEvents::Mint(mint) => assert_eq!(mint, event),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
