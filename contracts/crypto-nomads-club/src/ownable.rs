// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Single-owner access control.

use alloy_primitives::Address;
use alloy_sol_types::sol;
use stylus_sdk::{prelude::*, storage::StorageAddress};

use crate::{error::ClubError, CryptoNomadsClub};

sol! {
    event OwnershipTransferred(address indexed previous_owner, address indexed new_owner);
}

#[storage]
pub struct Ownable {
    owner: StorageAddress,
}

// Helpers used by the contract's entry points; not exported.
impl Ownable {
    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    /// Fails unless `account` is the current owner.
    pub fn only_owner(&self, account: Address) -> Result<(), ClubError> {
        if account != self.owner.get() {
            return Err(ClubError::NotOwner);
        }
        Ok(())
    }

    /// Records `new_owner` without any access checks.
    pub fn set_owner(&mut self, new_owner: Address) {
        let previous_owner = self.owner.get();
        self.owner.set(new_owner);
        self.vm().log(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }
}

#[public]
pub trait IOwnable {
    /// The account allowed to run administrative methods.
    fn owner(&self) -> Result<Address, ClubError>;

    /// Hands ownership to `new_owner`, which must not be the zero address.
    fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), ClubError>;

    /// Leaves the contract without an owner. Administrative methods stop working for good.
    fn renounce_ownership(&mut self) -> Result<(), ClubError>;
}

#[public]
impl IOwnable for CryptoNomadsClub {
    fn owner(&self) -> Result<Address, ClubError> {
        Ok(self.ownable.owner())
    }

    fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), ClubError> {
        self.ownable.only_owner(self.vm().msg_sender())?;
        if new_owner.is_zero() {
            return Err(ClubError::ZeroOwner);
        }
        self.ownable.set_owner(new_owner);
        Ok(())
    }

    fn renounce_ownership(&mut self) -> Result<(), ClubError> {
        self.ownable.only_owner(self.vm().msg_sender())?;
        self.ownable.set_owner(Address::ZERO);
        Ok(())
    }
}
