//! Build configuration: where to run the inspector, what to inspect and where
//! to write the library.

use std::path::PathBuf;

use crate::inspector::ForgeInspector;
use crate::target::Target;

/// The inspector binary.
pub const DEFAULT_TOOL: &str = "forge";
/// Output path relative to the project root.
pub const DEFAULT_OUTPUT: &str = "test/helpers/SelectorLibrary.sol";

/// Contracts whose selectors are catalogued, relative to the project root.
pub const DEFAULT_TARGETS: &[&str] = &[
    "src/GatewayDiamond.sol",
    "src/SubnetActorDiamond.sol",
    "src/SubnetRegistryDiamond.sol",
    "src/OwnershipFacet.sol",
    "src/diamond/DiamondCutFacet.sol",
    "src/diamond/DiamondLoupeFacet.sol",
    "src/gateway/GatewayGetterFacet.sol",
    "src/gateway/GatewayManagerFacet.sol",
    "src/gateway/GatewayMessengerFacet.sol",
    "src/gateway/router/CheckpointingFacet.sol",
    "src/gateway/router/TopDownFinalityFacet.sol",
    "src/gateway/router/XnetMessagingFacet.sol",
    "src/subnet/SubnetActorGetterFacet.sol",
    "src/subnet/SubnetActorManagerFacet.sol",
    "src/subnet/SubnetActorPauseFacet.sol",
    "src/subnet/SubnetActorRewardFacet.sol",
    "src/subnet/SubnetActorCheckpointingFacet.sol",
    "src/subnetregistry/RegisterSubnetFacet.sol",
    "src/subnetregistry/SubnetGetterFacet.sol",
    "test/helpers/ERC20PresetFixedSupply.sol",
    "test/helpers/NumberContractFacetEight.sol",
    "test/helpers/NumberContractFacetSeven.sol",
    "test/helpers/SelectorLibrary.sol",
    "test/helpers/TestUtils.sol",
    "test/mocks/SubnetActorMock.sol",
];

/// Everything a build needs, passed explicitly into [`crate::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Project root; the inspector runs here and relative paths resolve here.
    pub root: PathBuf,
    /// Output file, relative to `root` unless absolute.
    pub output: PathBuf,
    /// Inspector binary.
    pub tool: String,
    /// Contracts to inspect, in order.
    pub targets: Vec<Target>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            tool: DEFAULT_TOOL.to_string(),
            targets: default_targets(),
        }
    }
}

impl BuildConfig {
    /// The output file resolved against the project root.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    /// The inspector described by this configuration.
    #[must_use]
    pub fn inspector(&self) -> ForgeInspector {
        ForgeInspector::new(self.tool.clone(), self.root.clone())
    }
}

/// Targets for [`DEFAULT_TARGETS`].
#[must_use]
pub fn default_targets() -> Vec<Target> {
    DEFAULT_TARGETS
        .iter()
        .copied()
        .filter_map(Target::from_path)
        .collect()
}
