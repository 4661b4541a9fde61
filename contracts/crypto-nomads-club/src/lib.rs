// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Crypto Nomads Club: a fixed-supply ERC-721 collection where every token is
//! labelled with a city.
//!
//! Tokens are sold in owner-configured batches, optionally restricted to
//! holders of another collection, and the owner may gift a small reserved
//! allocation. Supply is capped at 2900 public and 100 gifted tokens.

// Only run this as a WASM if the export-abi feature is not set.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

mod allow_list;
pub mod city;
pub mod constants;
mod erc721;
pub mod error;
mod ownable;
mod sale;

use alloc::{string::String, vec::Vec};
use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::{call::transfer::transfer_eth, console, prelude::*};

use crate::{
    city::City,
    erc721::{Erc721, IErc721},
    error::ClubError,
    ownable::{IOwnable, Ownable},
    sale::{check_batch, check_city_count, check_payment, Sale, Withdrawal},
};

sol! {
    event NomadMinted(uint256 indexed token_id, address indexed to, string city, bool gifted);
}

#[storage]
#[entrypoint]
pub struct CryptoNomadsClub {
    erc721: Erc721,
    ownable: Ownable,
    sale: Sale,
}

impl CryptoNomadsClub {
    fn issue(&mut self, to: Address, city: City, gifted: bool) -> Result<(), ClubError> {
        let token_id = self.erc721.mint(to, city)?;
        self.vm().log(NomadMinted {
            token_id,
            to,
            city: city.name().into(),
            gifted,
        });
        Ok(())
    }
}

#[public]
#[implements(IErc721, IOwnable)]
impl CryptoNomadsClub {
    /// Makes the deploying account the owner. Nothing is for sale until the
    /// owner opens a batch.
    #[constructor]
    pub fn constructor(&mut self) {
        // Deployments go through a factory contract, so the deployer is tx_origin.
        let owner = self.vm().tx_origin();
        self.ownable.set_owner(owner);
    }

    /// Replaces the current sale batch. A zero `allow_list` opens the sale to everyone.
    pub fn set_sale_batch(
        &mut self,
        available_to_mint: U256,
        price: U256,
        allow_list: Address,
    ) -> Result<(), ClubError> {
        self.ownable.only_owner(self.vm().msg_sender())?;
        self.sale.set_batch(available_to_mint, price, allow_list);
        console!(
            "sale batch: {} available at {} wei, allow list {}",
            available_to_mint,
            price,
            allow_list
        );
        Ok(())
    }

    /// Buys one token per requested city for the caller.
    #[payable]
    pub fn mint(&mut self, cities: Vec<String>) -> Result<(), ClubError> {
        let cities = city::parse_all(&cities)?;
        check_city_count(cities.len())?;

        let minter = self.vm().msg_sender();
        self.sale.require_allow_list_holder(minter)?;

        let count = U256::from(cities.len());
        check_batch(self.sale.available_to_mint(), count)?;
        self.sale.supply().admit_public(count)?;
        check_payment(self.sale.price(), count, self.vm().msg_value())?;

        for city in cities {
            self.issue(minter, city, false)?;
        }
        self.sale.record_public(count);
        console!("{} minted {} tokens", minter, count);
        Ok(())
    }

    /// Issues one token from the reserved allocation to `recipient`.
    pub fn gift(&mut self, recipient: Address, city: String) -> Result<(), ClubError> {
        self.ownable.only_owner(self.vm().msg_sender())?;
        let city: City = city.parse()?;
        self.sale.supply().admit_gift()?;

        self.issue(recipient, city, true)?;
        self.sale.record_gift();
        console!("gifted a {} token to {}", city, recipient);
        Ok(())
    }

    /// Sends the contract's whole balance to the owner.
    pub fn withdraw_all(&mut self) -> Result<(), ClubError> {
        let owner = self.vm().msg_sender();
        self.ownable.only_owner(owner)?;

        let amount = self.vm().balance(self.vm().contract_address());
        transfer_eth(self.vm(), owner, amount)
            .map_err(|err| ClubError::ExternalCall(err.into()))?;

        self.vm().log(Withdrawal { to: owner, amount });
        console!("withdrew {} wei", amount);
        Ok(())
    }

    /// Sets the prefix of every token URI.
    #[selector(name = "setBaseURI")]
    pub fn set_base_uri(&mut self, base_uri: String) -> Result<(), ClubError> {
        self.ownable.only_owner(self.vm().msg_sender())?;
        self.erc721.set_base_uri(&base_uri);
        Ok(())
    }

    /// The prefix of every token URI, empty until the owner sets one.
    #[selector(name = "baseURI")]
    pub fn base_uri(&self) -> String {
        self.erc721.base_uri()
    }

    pub fn available_to_mint(&self) -> U256 {
        self.sale.available_to_mint()
    }

    pub fn price(&self) -> U256 {
        self.sale.price()
    }

    pub fn allow_list(&self) -> Address {
        self.sale.allow_list()
    }

    pub fn public_minted(&self) -> U256 {
        self.sale.public_minted()
    }

    pub fn gifted_minted(&self) -> U256 {
        self.sale.gifted_minted()
    }

    pub fn total_supply(&self) -> U256 {
        self.erc721.total_supply()
    }

    /// The city a token was minted for.
    pub fn city_of(&self, token_id: U256) -> Result<String, ClubError> {
        Ok(self.erc721.city_of(token_id)?.name().into())
    }
}
