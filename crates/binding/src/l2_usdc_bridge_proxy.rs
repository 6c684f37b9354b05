//! `L2UsdcBridgeProxy` binding.
//!
//! The ABI and creation bytecode are the compiler artifacts of the contract,
//! embedded verbatim. Do not edit them by hand.

use alloy_sol_types::sol;

/// Compiler-emitted ABI of `L2UsdcBridgeProxy`.
pub const ABI: &str = r#"[{"inputs":[{"internalType":"address","name":"_logic","type":"address"},{"internalType":"address","name":"initialOwner","type":"address"},{"internalType":"bytes","name":"_data","type":"bytes"}],"stateMutability":"payable","type":"constructor"},{"inputs":[{"internalType":"address","name":"target","type":"address"}],"name":"AddressEmptyCode","type":"error"},{"inputs":[{"internalType":"address","name":"admin","type":"address"}],"name":"ERC1967InvalidAdmin","type":"error"},{"inputs":[{"internalType":"address","name":"implementation","type":"address"}],"name":"ERC1967InvalidImplementation","type":"error"},{"inputs":[],"name":"ERC1967NonPayable","type":"error"},{"inputs":[],"name":"FailedInnerCall","type":"error"},{"anonymous":false,"inputs":[{"indexed":false,"internalType":"address","name":"previousAdmin","type":"address"},{"indexed":false,"internalType":"address","name":"newAdmin","type":"address"}],"name":"AdminChanged","type":"event"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"implementation","type":"address"}],"name":"Upgraded","type":"event"},{"stateMutability":"payable","type":"fallback"},{"inputs":[],"name":"implementation","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"l1Usdc","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"l2Usdc","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"l2UsdcMasterMinter","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"messenger","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"otherBridge","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"view","type":"function"},{"inputs":[],"name":"owner","outputs":[{"internalType":"address","name":"","type":"address"}],"stateMutability":"view","type":"function"},{"inputs":[{"internalType":"address","name":"newAdmin","type":"address"}],"name":"proxyChangeOwner","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"_messenger","type":"address"},{"internalType":"address","name":"_otherBridge","type":"address"},{"internalType":"address","name":"_l1Usdc","type":"address"},{"internalType":"address","name":"_l2Usdc","type":"address"},{"internalType":"address","name":"_l2UsdcMasterMinter","type":"address"}],"name":"setAddress","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"newImplementation","type":"address"}],"name":"upgradeTo","outputs":[],"stateMutability":"nonpayable","type":"function"},{"inputs":[{"internalType":"address","name":"newImplementation","type":"address"},{"internalType":"bytes","name":"data","type":"bytes"}],"name":"upgradeToAndCall","outputs":[],"stateMutability":"nonpayable","type":"function"},{"stateMutability":"payable","type":"receive"}]"#;

sol! {
    /// ERC-1967 proxy in front of `L2UsdcBridge`, installed as an L2 predeploy.
    #[sol(rpc, all_derives, bytecode = "0x60806040526040516200137f3803806200137f83398101604081905262000026916200036e565b82816200003482826200004b565b5062000042905082620000b1565b5050506200046c565b620000568262000123565b6040516001600160a01b038316907fbc7cd75a20ee27fd9adebab32041f755214dbc6bffa90cc0225b39da2e5c2d3b90600090a2805115620000a3576200009e8282620001a3565b505050565b620000ad62000220565b5050565b7f7e644d79422f17c01e4894b5f4f588d331ebfa28653d42ae832dc59e38c9798f620000f36000805160206200135f833981519152546001600160a01b031690565b604080516001600160a01b03928316815291841660208301520160405180910390a1620001208162000242565b50565b806001600160a01b03163b6000036200015f57604051634c9c8ce360e01b81526001600160a01b03821660048201526024015b60405180910390fd5b807f360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc5b80546001600160a01b0319166001600160a01b039290921691909117905550565b6060600080846001600160a01b031684604051620001c291906200044e565b600060405180830381855af49150503d8060008114620001ff576040519150601f19603f3d011682016040523d82523d6000602084013e62000204565b606091505b5090925090506200021785838362000285565b95945050505050565b3415620002405760405163b398979f60e01b815260040160405180910390fd5b565b6001600160a01b0381166200026e57604051633173bdd160e11b81526000600482015260240162000156565b806000805160206200135f83398151915262000182565b6060826200029e576200029882620002eb565b620002e4565b8151158015620002b657506001600160a01b0384163b155b15620002e157604051639996b31560e01b81526001600160a01b038516600482015260240162000156565b50805b9392505050565b805115620002fc5780518082602001fd5b604051630a12f52160e11b815260040160405180910390fd5b80516001600160a01b03811681146200032d57600080fd5b919050565b634e487b7160e01b600052604160045260246000fd5b60005b83811015620003655781810151838201526020016200034b565b50506000910152565b6000806000606084860312156200038457600080fd5b6200038f8462000315565b92506200039f6020850162000315565b60408501519092506001600160401b0380821115620003bd57600080fd5b818601915086601f830112620003d257600080fd5b815181811115620003e757620003e762000332565b604051601f8201601f19908116603f0116810190838211818310171562000412576200041262000332565b816040528281528960208487010111156200042c57600080fd5b6200043f83602083016020880162000348565b80955050505050509250925092565b600082516200046281846020870162000348565b9190910192915050565b610ee3806200047c6000396000f3fe6080604052600436106100c05760003560e01c806356c3b58711610074578063a1b4bc041161004e578063a1b4bc0414610270578063c89701a21461029d578063dfd3dcb3146102ca5761012c565b806356c3b587146102195780635c60da1b146102465780638da5cb5b1461025b5761012c565b80633659cfe6116100a55780633659cfe6146101ac5780633cb747bf146101cc5780634f1ef286146101f95761012c565b806305db940f1461013657806312c594881461018c5761012c565b3661012c576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152601260248201527f63616e6e6f74207265636569766520544f4e000000000000000000000000000060448201526064015b60405180910390fd5b6101346102ea565b005b34801561014257600080fd5b506004546101639073ffffffffffffffffffffffffffffffffffffffff1681565b60405173ffffffffffffffffffffffffffffffffffffffff909116815260200160405180910390f35b34801561019857600080fd5b506101346101a7366004610d18565b6102fc565b3480156101b857600080fd5b506101346101c7366004610d7d565b610698565b3480156101d857600080fd5b506000546101639073ffffffffffffffffffffffffffffffffffffffff1681565b34801561020557600080fd5b50610134610214366004610dc7565b610750565b34801561022557600080fd5b506002546101639073ffffffffffffffffffffffffffffffffffffffff1681565b34801561025257600080fd5b506101636107fa565b34801561026757600080fd5b50610163610809565b34801561027c57600080fd5b506003546101639073ffffffffffffffffffffffffffffffffffffffff1681565b3480156102a957600080fd5b506001546101639073ffffffffffffffffffffffffffffffffffffffff1681565b3480156102d657600080fd5b506101346102e5366004610d7d565b610813565b6102fa6102f56108b8565b6108c2565b565b610304610809565b73ffffffffffffffffffffffffffffffffffffffff163373ffffffffffffffffffffffffffffffffffffffff1614610398576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152600960248201527f6e6f74206f776e657200000000000000000000000000000000000000000000006044820152606401610123565b8473ffffffffffffffffffffffffffffffffffffffff8116610416576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152600c60248201527f7a65726f206164647265737300000000000000000000000000000000000000006044820152606401610123565b8473ffffffffffffffffffffffffffffffffffffffff8116610494576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152600c60248201527f7a65726f206164647265737300000000000000000000000000000000000000006044820152606401610123565b8473ffffffffffffffffffffffffffffffffffffffff8116610512576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152600c60248201527f7a65726f206164647265737300000000000000000000000000000000000000006044820152606401610123565b8473ffffffffffffffffffffffffffffffffffffffff8116610590576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152600c60248201527f7a65726f206164647265737300000000000000000000000000000000000000006044820152606401610123565b8473ffffffffffffffffffffffffffffffffffffffff811661060e576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152600c60248201527f7a65726f206164647265737300000000000000000000000000000000000000006044820152606401610123565b5050600080547fffffffffffffffffffffffff000000000000000000000000000000000000000090811673ffffffffffffffffffffffffffffffffffffffff9a8b1617909155600180548216988a16989098179097555050600280548616948716949094179093556003805485169286169290921790915560048054909316931692909217905550565b6106a0610809565b73ffffffffffffffffffffffffffffffffffffffff163373ffffffffffffffffffffffffffffffffffffffff1614610734576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152600960248201527f6e6f74206f776e657200000000000000000000000000000000000000000000006044820152606401610123565b61074d81604051806020016040528060008152506108e6565b50565b610758610809565b73ffffffffffffffffffffffffffffffffffffffff163373ffffffffffffffffffffffffffffffffffffffff16146107ec576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152600960248201527f6e6f74206f776e657200000000000000000000000000000000000000000000006044820152606401610123565b6107f682826108e6565b5050565b60006108046108b8565b905090565b600061080461094e565b61081b610809565b73ffffffffffffffffffffffffffffffffffffffff163373ffffffffffffffffffffffffffffffffffffffff16146108af576040517f08c379a000000000000000000000000000000000000000000000000000000000815260206004820152600960248201527f6e6f74206f776e657200000000000000000000000000000000000000000000006044820152606401610123565b61074d8161098e565b60006108046109ef565b3660008037600080366000845af43d6000803e8080156108e1573d6000f35b3d6000fd5b6108ef82610a17565b60405173ffffffffffffffffffffffffffffffffffffffff8316907fbc7cd75a20ee27fd9adebab32041f755214dbc6bffa90cc0225b39da2e5c2d3b90600090a2805115610946576109418282610ae9565b505050565b6107f6610b6c565b60007fb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d61035b5473ffffffffffffffffffffffffffffffffffffffff16919050565b7f7e644d79422f17c01e4894b5f4f588d331ebfa28653d42ae832dc59e38c9798f6109b761094e565b6040805173ffffffffffffffffffffffffffffffffffffffff928316815291841660208301520160405180910390a161074d81610ba4565b60007f360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc610972565b8073ffffffffffffffffffffffffffffffffffffffff163b600003610a80576040517f4c9c8ce300000000000000000000000000000000000000000000000000000000815273ffffffffffffffffffffffffffffffffffffffff82166004820152602401610123565b807f360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc5b80547fffffffffffffffffffffffff00000000000000000000000000000000000000001673ffffffffffffffffffffffffffffffffffffffff9290921691909117905550565b60606000808473ffffffffffffffffffffffffffffffffffffffff1684604051610b139190610ea7565b600060405180830381855af49150503d8060008114610b4e576040519150601f19603f3d011682016040523d82523d6000602084013e610b53565b606091505b5091509150610b63858383610c1b565b95945050505050565b34156102fa576040517fb398979f00000000000000000000000000000000000000000000000000000000815260040160405180910390fd5b73ffffffffffffffffffffffffffffffffffffffff8116610bf4576040517f62e77ba200000000000000000000000000000000000000000000000000000000815260006004820152602401610123565b807fb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103610aa3565b606082610c3057610c2b82610cad565b610ca6565b8151158015610c54575073ffffffffffffffffffffffffffffffffffffffff84163b155b15610ca3576040517f9996b31500000000000000000000000000000000000000000000000000000000815273ffffffffffffffffffffffffffffffffffffffff85166004820152602401610123565b50805b9392505050565b805115610cbd5780518082602001fd5b6040517f1425ea4200000000000000000000000000000000000000000000000000000000815260040160405180910390fd5b803573ffffffffffffffffffffffffffffffffffffffff81168114610d1357600080fd5b919050565b600080600080600060a08688031215610d3057600080fd5b610d3986610cef565b9450610d4760208701610cef565b9350610d5560408701610cef565b9250610d6360608701610cef565b9150610d7160808701610cef565b90509295509295909350565b600060208284031215610d8f57600080fd5b610ca682610cef565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052604160045260246000fd5b60008060408385031215610dda57600080fd5b610de383610cef565b9150602083013567ffffffffffffffff80821115610e0057600080fd5b818501915085601f830112610e1457600080fd5b813581811115610e2657610e26610d98565b604051601f82017fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe0908116603f01168101908382118183101715610e6c57610e6c610d98565b81604052828152886020848701011115610e8557600080fd5b8260208601602083013760006020848301015280955050505050509250929050565b6000825160005b81811015610ec85760208186018101518583015201610eae565b50600092019182525091905056fea164736f6c6343000814000ab53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103")]
    contract L2UsdcBridgeProxy {
        error AddressEmptyCode(address target);
        error ERC1967InvalidAdmin(address admin);
        error ERC1967InvalidImplementation(address implementation);
        error ERC1967NonPayable();
        error FailedInnerCall();

        event AdminChanged(address previousAdmin, address newAdmin);
        event Upgraded(address indexed implementation);

        constructor(address _logic, address initialOwner, bytes memory _data) payable;

        fallback() external payable;
        receive() external payable;

        function implementation() external view returns (address);
        function l1Usdc() external view returns (address);
        function l2Usdc() external view returns (address);
        function l2UsdcMasterMinter() external view returns (address);
        function messenger() external view returns (address);
        function otherBridge() external view returns (address);
        function owner() external view returns (address);

        /// Owner only.
        function proxyChangeOwner(address newAdmin) external;

        /// Owner only. Rewires the bridge storage behind the proxy.
        function setAddress(
            address _messenger,
            address _otherBridge,
            address _l1Usdc,
            address _l2Usdc,
            address _l2UsdcMasterMinter
        ) external;

        function upgradeTo(address newImplementation) external;
        function upgradeToAndCall(address newImplementation, bytes memory data) external;
    }
}

#[cfg(test)]
mod tests {
    use super::{L2UsdcBridgeProxy::*, ABI};
    use crate::test_utils::{assert_abi_matches, assert_dispatches};
    use alloy_json_abi::JsonAbi;
    use alloy_primitives::{b256, hex, Address, Bytes, Log};
    use alloy_sol_types::{SolCall, SolConstructor, SolError, SolEvent, SolInterface};

    #[test]
    fn test_abi_matches_binding() {
        assert_abi_matches(
            ABI,
            L2UsdcBridgeProxyCalls::SELECTORS,
            L2UsdcBridgeProxyEvents::SELECTORS,
            L2UsdcBridgeProxyErrors::SELECTORS,
        );
    }

    #[test]
    fn test_bytecode_dispatches_every_function() {
        assert_dispatches(ABI, &super::L2UsdcBridgeProxy::BYTECODE);
    }

    #[test]
    fn test_abi_has_payable_entry_points() {
        let abi: JsonAbi = serde_json::from_str(ABI).unwrap();
        let constructor = abi.constructor.expect("constructor");
        assert_eq!(constructor.inputs.len(), 3);
        assert!(abi.fallback.is_some());
        assert!(abi.receive.is_some());
    }

    #[test]
    fn test_known_selectors() {
        assert_eq!(implementationCall::SELECTOR, hex!("5c60da1b"));
        assert_eq!(ownerCall::SELECTOR, hex!("8da5cb5b"));
        assert_eq!(proxyChangeOwnerCall::SELECTOR, hex!("dfd3dcb3"));
        assert_eq!(setAddressCall::SELECTOR, hex!("12c59488"));
        assert_eq!(upgradeToCall::SELECTOR, hex!("3659cfe6"));
        assert_eq!(upgradeToAndCallCall::SELECTOR, hex!("4f1ef286"));
        assert_eq!(ERC1967InvalidAdmin::SELECTOR, hex!("62e77ba2"));
        assert_eq!(ERC1967InvalidImplementation::SELECTOR, hex!("4c9c8ce3"));
        assert_eq!(ERC1967NonPayable::SELECTOR, hex!("b398979f"));
        assert_eq!(
            Upgraded::SIGNATURE_HASH,
            b256!("bc7cd75a20ee27fd9adebab32041f755214dbc6bffa90cc0225b39da2e5c2d3b")
        );
        assert_eq!(
            AdminChanged::SIGNATURE_HASH,
            b256!("7e644d79422f17c01e4894b5f4f588d331ebfa28653d42ae832dc59e38c9798f")
        );
    }

    #[test]
    fn test_set_address_takes_master_minter() {
        let call = setAddressCall {
            _messenger: Address::repeat_byte(0x07),
            _otherBridge: Address::repeat_byte(0x08),
            _l1Usdc: Address::repeat_byte(0x09),
            _l2Usdc: Address::repeat_byte(0x0a),
            _l2UsdcMasterMinter: Address::repeat_byte(0x0b),
        };
        let data = call.abi_encode();
        assert_eq!(data.len(), 4 + 5 * 32);
        assert_eq!(setAddressCall::abi_decode(&data).unwrap(), call);
    }

    #[test]
    fn test_constructor_args_encoding() {
        let args = constructorCall {
            _logic: Address::repeat_byte(0x01),
            initialOwner: Address::repeat_byte(0x02),
            _data: Bytes::new(),
        };
        let encoded = args.abi_encode();
        // two addresses, the bytes offset and a zero length word
        assert_eq!(encoded.len(), 4 * 32);
        assert_eq!(&encoded[12..32], Address::repeat_byte(0x01).as_slice());
        assert_eq!(&encoded[44..64], Address::repeat_byte(0x02).as_slice());
    }

    #[test]
    fn test_decode_upgraded_log() {
        let event = Upgraded { implementation: Address::repeat_byte(0x42) };
        let log = Log { address: Address::repeat_byte(0xaa), data: event.encode_log_data() };
        assert_eq!(log.topics().len(), 2);
        assert!(log.data.data.is_empty());

        let decoded = Upgraded::decode_log(&log).unwrap();
        assert_eq!(decoded.implementation, Address::repeat_byte(0x42));
    }

    #[test]
    fn test_decode_revert() {
        let revert = ERC1967InvalidImplementation { implementation: Address::ZERO }.abi_encode();
        assert!(matches!(
            L2UsdcBridgeProxyErrors::abi_decode(&revert).unwrap(),
            L2UsdcBridgeProxyErrors::ERC1967InvalidImplementation(_)
        ));
    }
}
