/// Provides standard interface pattern for contracts to use at deployment time to run component
/// related deployment code.
///
/// For example, components may require config to initialize its persistent state.
///
/// Components may be deployed more than once per contract when they are keyed by instance,
/// thus deployment is invoked on the component handle.
pub trait Deploy {
    type Config;

    /// invoked when the contract is first deployed
    /// - main use case is to initialize the component state
    ///
    /// ## Panics
    /// if the component instance has already been deployed
    fn deploy(&self, config: Self::Config);
}
