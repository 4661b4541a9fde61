// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Sale state: the current batch, its price, the allow-list gate, and the
//! running counters of public and gifted issuance.
//!
//! The quota arithmetic lives in plain functions over [`Supply`] so it can be
//! checked without a VM. The storage type only reads and records.

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::{
    prelude::*,
    storage::{StorageAddress, StorageU256},
};

use crate::{
    constants::{MAX_CITIES_PER_MINT, MAX_GIFT_SUPPLY, MAX_PUBLIC_SUPPLY, MAX_TOTAL_SUPPLY},
    error::ClubError,
};

sol! {
    event SaleBatchUpdated(uint256 available_to_mint, uint256 price, address allow_list);
    event Withdrawal(address indexed to, uint256 amount);
}

#[storage]
pub struct Sale {
    /// Tokens still purchasable in the current batch.
    available_to_mint: StorageU256,
    /// Price of one token in wei.
    price: StorageU256,
    /// Collection whose holders may buy. Zero means open to all.
    allow_list: StorageAddress,
    public_minted: StorageU256,
    gifted_minted: StorageU256,
}

/// Snapshot of the issuance counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Supply {
    pub public_minted: U256,
    pub gifted_minted: U256,
}

impl Supply {
    pub fn total(&self) -> U256 {
        self.public_minted + self.gifted_minted
    }

    /// Checks that `count` more public tokens fit under both the total and the public cap.
    pub fn admit_public(&self, count: U256) -> Result<(), ClubError> {
        if self.total() >= MAX_TOTAL_SUPPLY {
            return Err(ClubError::SoldOut);
        }
        if self.public_minted >= MAX_PUBLIC_SUPPLY {
            return Err(ClubError::PublicSoldOut);
        }
        if self.public_minted + count > MAX_PUBLIC_SUPPLY {
            return Err(ClubError::PublicSupplyExceeded);
        }
        Ok(())
    }

    /// Checks that one more gift fits under both the total and the gift cap.
    pub fn admit_gift(&self) -> Result<(), ClubError> {
        if self.total() >= MAX_TOTAL_SUPPLY {
            return Err(ClubError::SoldOut);
        }
        if self.gifted_minted >= MAX_GIFT_SUPPLY {
            return Err(ClubError::GiftsExhausted);
        }
        Ok(())
    }
}

pub fn check_city_count(count: usize) -> Result<(), ClubError> {
    if count == 0 || count > MAX_CITIES_PER_MINT {
        return Err(ClubError::InvalidCityCount);
    }
    Ok(())
}

pub fn check_batch(available: U256, count: U256) -> Result<(), ClubError> {
    if count > available {
        return Err(ClubError::BatchExhausted);
    }
    Ok(())
}

/// Requires `paid >= price * count`. A product that overflows can never be paid.
pub fn check_payment(price: U256, count: U256, paid: U256) -> Result<(), ClubError> {
    match price.checked_mul(count) {
        Some(cost) if paid >= cost => Ok(()),
        _ => Err(ClubError::InsufficientEth),
    }
}

impl Sale {
    pub fn available_to_mint(&self) -> U256 {
        self.available_to_mint.get()
    }

    pub fn price(&self) -> U256 {
        self.price.get()
    }

    pub fn allow_list(&self) -> Address {
        self.allow_list.get()
    }

    pub fn public_minted(&self) -> U256 {
        self.public_minted.get()
    }

    pub fn gifted_minted(&self) -> U256 {
        self.gifted_minted.get()
    }

    pub fn supply(&self) -> Supply {
        Supply {
            public_minted: self.public_minted.get(),
            gifted_minted: self.gifted_minted.get(),
        }
    }

    /// Replaces the batch wholesale.
    pub fn set_batch(&mut self, available_to_mint: U256, price: U256, allow_list: Address) {
        self.available_to_mint.set(available_to_mint);
        self.price.set(price);
        self.allow_list.set(allow_list);
        self.vm().log(SaleBatchUpdated {
            available_to_mint,
            price,
            allow_list,
        });
    }

    /// Books `count` sold tokens against the batch and the public counter.
    /// Callers check [`check_batch`] first.
    pub fn record_public(&mut self, count: U256) {
        let available = self.available_to_mint.get();
        self.available_to_mint.set(available - count);
        let minted = self.public_minted.get();
        self.public_minted.set(minted + count);
    }

    pub fn record_gift(&mut self) {
        let gifted = self.gifted_minted.get();
        self.gifted_minted.set(gifted + U256::from(1));
    }
}
