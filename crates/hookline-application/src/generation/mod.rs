//! Platform dispatch and request state for idea generation.

pub mod dual_tier;
pub mod registry;
pub mod state;

pub use dual_tier::DualTierStrategy;
pub use registry::{PlatformDispatch, StrategyRegistry};
pub use state::RequestState;
