//! This package provides a standard for building reusable smart contract stateful components
//!
//! ## Component Design
//! - Component declares its state type and defines a u128 based storage key namespace
//!   - recommendation is to use ULID to generate the storage key
//! - A contract may host more than one instance of the same component, e.g., one fungible token
//!   ledger per token. Each instance is identified by [`Component::instance_id`] and its state is
//!   stored under the hash of (namespace, instance ID).
//! - Components are stateless handles. Each component is responsible for loading and saving its
//!   own state. This means when the component state changes it is the component's responsibility
//!   to save it to storage.
//! - [`crate::component::Deploy`] - defines a pattern to standardize component deployment

use crate::data::Object;
use crate::{ErrCode, ErrorConst, Hash};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use std::fmt::Debug;

pub const ERR_COMPONENT_NOT_DEPLOYED: ErrorConst =
    ErrorConst(ErrCode("COMPONENT_NOT_DEPLOYED"), "component has not been deployed");

pub const ERR_COMPONENT_ALREADY_DEPLOYED: ErrorConst = ErrorConst(
    ErrCode("COMPONENT_ALREADY_DEPLOYED"),
    "component has already been deployed",
);

/// Defines abstraction for a stateful component
pub trait Component {
    type State: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq;

    /// Namespace used to store the component state
    /// - it is recommended to generate a ULID for the key to avoid collisions
    const STATE_KEY: u128;

    /// single instance components use the default
    fn instance_id(&self) -> u128 {
        0
    }

    fn state_key(&self) -> Hash {
        Hash::from((Self::STATE_KEY, self.instance_id()))
    }

    fn is_deployed(&self) -> bool {
        ComponentState::<Self::State>::exists(&self.state_key())
    }

    /// loads the component state from storage using the key defined by [`Component::state_key`]
    fn load_state(&self) -> Option<ComponentState<Self::State>> {
        ComponentState::<Self::State>::load(&self.state_key())
    }

    /// ## Panics
    /// if the component has not been deployed
    fn state(&self) -> ComponentState<Self::State> {
        self.load_state()
            .unwrap_or_else(|| ERR_COMPONENT_NOT_DEPLOYED.panic())
    }

    /// creates new in-memory state, i.e., the state is not persisted to storage
    fn new_state(&self, state: Self::State) -> ComponentState<Self::State> {
        ComponentState::<Self::State>::new(self.state_key(), state)
    }
}

/// component state type
pub type ComponentState<T> = Object<Hash, T>;
