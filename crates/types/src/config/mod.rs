mod error;
pub use error::ConfigError;

mod env_utils;
pub use env_utils::{load_address, load_string, load_string_opt, load_u64, load_u64_opt};

use alloy::{
    primitives::{Address, U256},
    sol_types::Eip712Domain,
};
use std::collections::BTreeMap;

/// Environment variable holding the EIP-712 domain name.
pub const NAME_ENV: &str = "AWL_FORWARDER_NAME";
/// Environment variable holding the EIP-712 domain version.
pub const VERSION_ENV: &str = "AWL_FORWARDER_VERSION";
/// Environment variable holding the chain id.
pub const CHAIN_ID_ENV: &str = "AWL_CHAIN_ID";
/// Environment variable holding the deployed forwarder address.
pub const FORWARDER_ADDRESS_ENV: &str = "AWL_FORWARDER_ADDRESS";
/// Environment variable holding the default gas budget for new requests.
pub const REQUEST_GAS_ENV: &str = "AWL_REQUEST_GAS";

/// Gas budget given to requests when none is configured.
pub const DEFAULT_REQUEST_GAS: u64 = 100_000;

const fn default_request_gas() -> u64 {
    DEFAULT_REQUEST_GAS
}

/// Deployment parameters of a forwarder.
///
/// The first four fields form the EIP-712 domain, which is fixed for the
/// lifetime of a deployment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwarderConfig {
    /// Domain name.
    name: String,
    /// Domain version.
    version: String,
    /// Chain id of the network the forwarder is deployed to.
    #[serde(alias = "network_id")]
    chain_id: u64,
    /// Address of the forwarder contract.
    verifying_contract: Address,
    /// Default gas budget for requests built against this forwarder.
    #[serde(default = "default_request_gas", alias = "gasLimit")]
    request_gas: u64,
}

impl ForwarderConfig {
    /// Create a new config.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: u64,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
            verifying_contract,
            request_gas: DEFAULT_REQUEST_GAS,
        }
    }

    /// Set the default request gas.
    pub fn with_request_gas(mut self, request_gas: u64) -> Self {
        self.request_gas = request_gas;
        self
    }

    /// Load the config from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let request_gas = load_u64_opt(REQUEST_GAS_ENV)?.unwrap_or(DEFAULT_REQUEST_GAS);
        Ok(Self::new(
            load_string(NAME_ENV)?,
            load_string(VERSION_ENV)?,
            load_u64(CHAIN_ID_ENV)?,
            load_address(FORWARDER_ADDRESS_ENV)?,
        )
        .with_request_gas(request_gas))
    }

    /// Load the config for `chain` from a JSON map of network name to
    /// deployment parameters.
    ///
    /// ```json
    /// { "rinkeby": { "name": "AwlForwarder", "version": "1", "network_id": 4,
    ///                "verifyingContract": "0x...", "gasLimit": 100000 } }
    /// ```
    pub fn from_chain_json(json: &str, chain: &str) -> Result<Self, ConfigError> {
        let mut networks: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let network = networks
            .remove(chain.trim())
            .ok_or_else(|| ConfigError::UnknownChain(chain.to_string()))?;
        serde_json::from_value(network).map_err(Into::into)
    }

    /// Get the domain name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the domain version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Get the chain id.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the forwarder address.
    pub const fn verifying_contract(&self) -> Address {
        self.verifying_contract
    }

    /// Get the default request gas.
    pub const fn request_gas(&self) -> u64 {
        self.request_gas
    }

    /// Build the EIP-712 domain.
    pub fn domain(&self) -> Eip712Domain {
        Eip712Domain {
            name: Some(self.name.clone().into()),
            version: Some(self.version.clone().into()),
            chain_id: Some(U256::from(self.chain_id)),
            verifying_contract: Some(self.verifying_contract),
            salt: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const NETWORKS: &str = r#"{
        "rinkeby": {
            "name": "AwlForwarder",
            "version": "1",
            "network_id": 4,
            "verifyingContract": "0x8a3a9c0e5bb1e3d6ba1db8b4dc0f6ea3a2cd4f10",
            "gasLimit": 210000,
            "toContract": "0xc7ad46e0b8a400bb3c915120d284aafba8fc4735"
        },
        "local": {
            "name": "AwlForwarder",
            "version": "2",
            "chainId": 1337,
            "verifyingContract": "0x0000000000000000000000000000000000000001"
        }
    }"#;

    #[test]
    fn loads_network_entry() {
        let config = ForwarderConfig::from_chain_json(NETWORKS, "rinkeby").unwrap();

        assert_eq!(config.name(), "AwlForwarder");
        assert_eq!(config.version(), "1");
        assert_eq!(config.chain_id(), 4);
        assert_eq!(
            config.verifying_contract(),
            address!("0x8a3a9c0e5bb1e3d6ba1db8b4dc0f6ea3a2cd4f10")
        );
        assert_eq!(config.request_gas(), 210_000);
    }

    #[test]
    fn request_gas_defaults() {
        let config = ForwarderConfig::from_chain_json(NETWORKS, "local").unwrap();
        assert_eq!(config.chain_id(), 1337);
        assert_eq!(config.request_gas(), DEFAULT_REQUEST_GAS);
    }

    #[test]
    fn unknown_chain() {
        let err = ForwarderConfig::from_chain_json(NETWORKS, "mainnet").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownChain(c) if c == "mainnet"));
    }

    #[test]
    fn loads_from_env() {
        // the only test that touches these variables
        std::env::set_var(NAME_ENV, "AwlForwarder");
        std::env::set_var(VERSION_ENV, "1");
        std::env::set_var(CHAIN_ID_ENV, "4");
        std::env::set_var(FORWARDER_ADDRESS_ENV, "0x8a3a9c0e5bb1e3d6ba1db8b4dc0f6ea3a2cd4f10");
        std::env::remove_var(REQUEST_GAS_ENV);

        let config = ForwarderConfig::from_env().unwrap();
        assert_eq!(config.name(), "AwlForwarder");
        assert_eq!(config.chain_id(), 4);
        assert_eq!(
            config.verifying_contract(),
            address!("0x8a3a9c0e5bb1e3d6ba1db8b4dc0f6ea3a2cd4f10")
        );
        assert_eq!(config.request_gas(), DEFAULT_REQUEST_GAS);

        std::env::set_var(REQUEST_GAS_ENV, "250000");
        assert_eq!(ForwarderConfig::from_env().unwrap().request_gas(), 250_000);

        std::env::set_var(REQUEST_GAS_ENV, "lots");
        assert!(matches!(ForwarderConfig::from_env(), Err(ConfigError::Parse(_))));

        std::env::remove_var(REQUEST_GAS_ENV);
        std::env::set_var(FORWARDER_ADDRESS_ENV, "0xnothex");
        assert!(matches!(ForwarderConfig::from_env(), Err(ConfigError::Hex(_))));

        std::env::remove_var(CHAIN_ID_ENV);
        let err = ForwarderConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Var(v) if v == CHAIN_ID_ENV));
    }

    #[test]
    fn domain_fields() {
        let config = ForwarderConfig::new("AwlForwarder", "1", 5, Address::repeat_byte(0xf0));
        let domain = config.domain();

        assert_eq!(domain.name.as_deref(), Some("AwlForwarder"));
        assert_eq!(domain.version.as_deref(), Some("1"));
        assert_eq!(domain.chain_id, Some(U256::from(5u64)));
        assert_eq!(domain.verifying_contract, Some(Address::repeat_byte(0xf0)));
        assert!(domain.salt.is_none());
    }

    #[test]
    fn serde_roundtrip_uses_camel_case() {
        let config = ForwarderConfig::new("AwlForwarder", "1", 5, Address::repeat_byte(0xf0));
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["chainId"], 5);
        assert_eq!(json["requestGas"], DEFAULT_REQUEST_GAS);
        assert_eq!(serde_json::from_value::<ForwarderConfig>(json).unwrap(), config);
    }
}
