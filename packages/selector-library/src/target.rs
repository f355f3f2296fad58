//! Contracts selected for selector extraction.

use std::path::Path;

/// Contract names starting with this prefix are libraries.
pub const LIBRARY_PREFIX: &str = "Lib";
/// Contract names starting with this prefix are interfaces.
pub const INTERFACE_PREFIX: &str = "I";
/// Contract names ending with this suffix are test helpers.
pub const HELPER_SUFFIX: &str = "Helper";

/// A single contract to inspect, identified by its source path and name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    path: String,
    contract_name: String,
}

impl Target {
    /// Creates a target whose contract name is the file name of `path`
    /// without its extension.
    ///
    /// Returns `None` when `path` has no file name.
    pub fn from_path(path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        let contract_name = Path::new(&path).file_stem()?.to_str()?.to_string();
        Some(Self {
            path,
            contract_name,
        })
    }

    /// The source path as configured.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The contract name derived from the path.
    #[must_use]
    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    /// The `path:name` identifier understood by the inspector.
    #[must_use]
    pub fn contract_id(&self) -> String {
        format!("{}:{}", self.path, self.contract_name)
    }

    /// Whether the contract is excluded from the library by naming convention.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        is_reserved_name(&self.contract_name)
    }
}

/// Libraries, interfaces and helpers expose no selectors worth cataloguing.
#[must_use]
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with(LIBRARY_PREFIX)
        || name.starts_with(INTERFACE_PREFIX)
        || name.ends_with(HELPER_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("src/OwnershipFacet.sol", "OwnershipFacet")]
    #[case("src/gateway/router/XnetMessagingFacet.sol", "XnetMessagingFacet")]
    #[case("GatewayDiamond.sol", "GatewayDiamond")]
    #[case("test/Counter.t.sol", "Counter.t")]
    #[case("src/NoExtension", "NoExtension")]
    fn derives_contract_name(#[case] path: &str, #[case] name: &str) {
        let target = Target::from_path(path).unwrap();
        assert_eq!(target.contract_name(), name);
        assert_eq!(target.path(), path);
    }

    #[test]
    fn contract_id_joins_path_and_name() {
        let target = Target::from_path("src/OwnershipFacet.sol").unwrap();
        assert_eq!(target.contract_id(), "src/OwnershipFacet.sol:OwnershipFacet");
    }

    #[test]
    fn empty_path_has_no_target() {
        assert!(Target::from_path("").is_none());
    }

    #[rstest]
    #[case("LibDiamond", true)]
    #[case("ILibraryInterface", true)]
    #[case("IDiamond", true)]
    #[case("Interface", true)]
    #[case("TestHelper", true)]
    #[case("SubnetActorHelper", true)]
    #[case("OwnershipFacet", false)]
    #[case("GatewayDiamond", false)]
    #[case("SelectorLibrary", false)]
    #[case("HelperFacet", false)]
    #[case("libLower", false)]
    fn filters_reserved_names(#[case] name: &str, #[case] reserved: bool) {
        assert_eq!(is_reserved_name(name), reserved);
        let target = Target::from_path(format!("src/{name}.sol")).unwrap();
        assert_eq!(target.is_reserved(), reserved);
    }
}
