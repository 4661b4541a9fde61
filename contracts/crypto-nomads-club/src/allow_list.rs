// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Allow-list gating: while a batch names an allow-list collection, only
//! holders of at least one of its tokens may buy.

use alloy_primitives::{Address, U256};
use stylus_sdk::prelude::*;

use crate::{error::ClubError, sale::Sale};

sol_interface! {
    /// The one method of `IERC721` the gate relies on.
    interface IAllowListCollection {
        function balanceOf(address owner) external view returns (uint256);
    }
}

impl Sale {
    /// Fails unless `account` may buy from the current batch.
    ///
    /// An unset allow list admits everyone. Otherwise the list must be a
    /// contract and `account` must hold one of its tokens. A revert from the
    /// collection is passed through untouched.
    pub fn require_allow_list_holder(&self, account: Address) -> Result<(), ClubError> {
        let allow_list = self.allow_list();
        if allow_list.is_zero() {
            return Ok(());
        }
        if self.vm().code_size(allow_list) == 0 {
            return Err(ClubError::AllowListNotContract);
        }

        let collection = IAllowListCollection::new(allow_list);
        let balance = collection
            .balance_of(self.vm(), Call::new(), account)
            .map_err(|err| ClubError::ExternalCall(err.into()))?;
        if balance == U256::ZERO {
            return Err(ClubError::AllowListTokenRequired);
        }
        Ok(())
    }
}
