// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Token ownership ledger and the ERC-721 surface of the club.
//!
//! [`Erc721`] keeps owners, balances, approvals and the city each token was
//! minted for. Token ids are handed out sequentially from zero and tokens are
//! never burned, so `total_supply` doubles as the next id.
//!
//! The public methods are declared by [`IErc721`] and routed through the
//! contract's entrypoint, which owns the storage needed for receiver callbacks.

use alloc::{format, string::String, vec};
use alloy_primitives::{Address, FixedBytes, U256, U8};
use alloy_sol_types::sol;
use stylus_sdk::{abi::Bytes, prelude::*};

use crate::{
    city::City,
    constants::{ERC721_TOKEN_RECEIVER_ID, NAME, SYMBOL},
    error::ClubError,
    CryptoNomadsClub,
};

sol_storage! {
    pub struct Erc721 {
        /// Token id to owner map
        mapping(uint256 => address) owners;
        /// User to balance map
        mapping(address => uint256) balances;
        /// Token id to approved user map
        mapping(uint256 => address) token_approvals;
        /// User to operator map (the operator can manage all NFTs of the owner)
        mapping(address => mapping(address => bool)) operator_approvals;
        /// Tokens issued so far
        uint256 total_supply;
        /// Token id to city code
        mapping(uint256 => uint8) cities;
        /// Prefix of every token URI
        string base_uri;
    }
}

sol! {
    event Transfer(address indexed from, address indexed to, uint256 indexed token_id);
    event Approval(address indexed owner, address indexed approved, uint256 indexed token_id);
    event ApprovalForAll(address indexed owner, address indexed operator, bool approved);
}

sol_interface! {
    interface IERC721Receiver {
        function onERC721Received(address operator, address from, uint256 token_id, bytes data) external returns (bytes4);
    }
}

impl Erc721 {
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    pub fn balance(&self, owner: Address) -> U256 {
        self.balances.get(owner)
    }

    /// Gets the owner of the token, if it exists.
    pub fn owner(&self, token_id: U256) -> Result<Address, ClubError> {
        let owner = self.owners.get(token_id);
        if owner.is_zero() {
            return Err(ClubError::InvalidTokenId);
        }
        Ok(owner)
    }

    pub fn city_of(&self, token_id: U256) -> Result<City, ClubError> {
        self.owner(token_id)?;
        City::from_code(self.cities.get(token_id).to::<u8>()).ok_or(ClubError::InvalidTokenId)
    }

    pub fn base_uri(&self) -> String {
        self.base_uri.get_string()
    }

    pub fn set_base_uri(&mut self, base_uri: &str) {
        self.base_uri.set_str(base_uri);
    }

    pub fn token_uri(&self, token_id: U256) -> Result<String, ClubError> {
        self.owner(token_id)?;
        let base = self.base_uri.get_string();
        if base.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{base}{token_id}"))
    }

    pub fn get_approved(&self, token_id: U256) -> Result<Address, ClubError> {
        self.owner(token_id)?;
        Ok(self.token_approvals.get(token_id))
    }

    pub fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.operator_approvals.getter(owner).get(operator)
    }

    /// Issues the next token id to `to`, tagged with `city`.
    pub fn mint(&mut self, to: Address, city: City) -> Result<U256, ClubError> {
        if to.is_zero() {
            return Err(ClubError::MintToZero);
        }
        let token_id = self.total_supply.get();
        self.total_supply.set(token_id + U256::from(1));
        self.owners.insert(token_id, to);
        self.cities.insert(token_id, U8::from(city.code()));

        let mut balance = self.balances.setter(to);
        let held = balance.get();
        balance.set(held + U256::from(1));

        self.vm().log(Transfer {
            from: Address::ZERO,
            to,
            token_id,
        });
        Ok(token_id)
    }

    /// Checks that `spender` may move `token_id` out of `from` into `to`.
    fn require_transferable(
        &self,
        spender: Address,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), ClubError> {
        let owner = self.owner(token_id)?;
        let authorized = spender == owner
            || self.is_approved_for_all(owner, spender)
            || spender == self.token_approvals.get(token_id);
        if !authorized {
            return Err(ClubError::NotApproved);
        }
        if from != owner {
            return Err(ClubError::IncorrectOwner);
        }
        if to.is_zero() {
            return Err(ClubError::TransferToZero);
        }
        Ok(())
    }

    /// Moves `token_id` from `from` to `to`. Callers check [`Self::require_transferable`] first.
    fn transfer(&mut self, token_id: U256, from: Address, to: Address) {
        self.owners.insert(token_id, to);
        self.token_approvals.delete(token_id);

        let mut from_balance = self.balances.setter(from);
        let held = from_balance.get();
        from_balance.set(held - U256::from(1));

        let mut to_balance = self.balances.setter(to);
        let held = to_balance.get();
        to_balance.set(held + U256::from(1));

        self.vm().log(Transfer { from, to, token_id });
    }

    pub fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), ClubError> {
        let spender = self.vm().msg_sender();
        self.require_transferable(spender, from, to, token_id)?;
        self.transfer(token_id, from, to);
        Ok(())
    }

    pub fn approve(&mut self, approved: Address, token_id: U256) -> Result<(), ClubError> {
        let owner = self.owner(token_id)?;
        if approved == owner {
            return Err(ClubError::ApprovalToOwner);
        }
        let msg_sender = self.vm().msg_sender();
        if msg_sender != owner && !self.is_approved_for_all(owner, msg_sender) {
            return Err(ClubError::ApproveNotAuthorized);
        }
        self.token_approvals.insert(token_id, approved);

        self.vm().log(Approval {
            owner,
            approved,
            token_id,
        });
        Ok(())
    }

    pub fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
    ) -> Result<(), ClubError> {
        let owner = self.vm().msg_sender();
        if operator == owner {
            return Err(ClubError::ApproveToCaller);
        }
        self.operator_approvals
            .setter(owner)
            .insert(operator, approved);

        self.vm().log(ApprovalForAll {
            owner,
            operator,
            approved,
        });
        Ok(())
    }
}

/// Whether `interface` is ERC-165, ERC-721 or ERC-721 Metadata.
pub fn supports_interface(interface: FixedBytes<4>) -> bool {
    const IERC165: u32 = 0x01ffc9a7;
    const IERC721: u32 = 0x80ac58cd;
    const IERC721_METADATA: u32 = 0x5b5e139f;

    // 0xffffffff is special cased in ERC-165 and falls through to false
    matches!(
        u32::from_be_bytes(interface.0),
        IERC165 | IERC721 | IERC721_METADATA
    )
}

impl CryptoNomadsClub {
    /// Calls `onERC721Received` on `to` if it is a contract. Any failure or a
    /// wrong magic value rejects the transfer.
    fn call_receiver(
        &mut self,
        token_id: U256,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> Result<(), ClubError> {
        if self.vm().code_size(to) == 0 {
            return Ok(());
        }
        let operator = self.vm().msg_sender();
        let context = Call::new_mutating(self);
        let receiver = IERC721Receiver::new(to);
        let received = receiver
            .on_erc_721_received(self.vm(), context, operator, from, token_id, data.0.into())
            .map_err(|_| ClubError::NonReceiver)?;

        if u32::from_be_bytes(received.0) != ERC721_TOKEN_RECEIVER_ID {
            return Err(ClubError::NonReceiver);
        }
        Ok(())
    }
}

#[public]
pub trait IErc721 {
    /// Immutable NFT name.
    fn name(&self) -> Result<String, ClubError>;

    /// Immutable NFT symbol.
    fn symbol(&self) -> Result<String, ClubError>;

    /// The token's metadata URI: the base URI followed by the token id.
    fn token_uri(&self, token_id: U256) -> Result<String, ClubError>;

    /// Gets the number of NFTs owned by an account.
    fn balance_of(&self, owner: Address) -> Result<U256, ClubError>;

    /// Gets the owner of the NFT, if it exists.
    fn owner_of(&self, token_id: U256) -> Result<Address, ClubError>;

    /// Transfers an NFT, checking that a contract recipient accepts it.
    /// It includes additional data for the receiver.
    fn safe_transfer_from_with_data(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
        data: Bytes,
    ) -> Result<(), ClubError>;

    /// Equivalent to [`IErc721::safe_transfer_from_with_data`] with empty data.
    fn safe_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), ClubError>;

    /// Transfers the NFT.
    fn transfer_from(&mut self, from: Address, to: Address, token_id: U256)
        -> Result<(), ClubError>;

    /// Grants an account the ability to manage the sender's NFT.
    fn approve(&mut self, approved: Address, token_id: U256) -> Result<(), ClubError>;

    /// Grants an account the ability to manage all of the sender's NFTs.
    fn set_approval_for_all(&mut self, operator: Address, approved: bool)
        -> Result<(), ClubError>;

    /// Gets the account managing an NFT, or zero if unmanaged.
    fn get_approved(&self, token_id: U256) -> Result<Address, ClubError>;

    /// Determines if an account has been authorized to manage all of a user's NFTs.
    fn is_approved_for_all(&self, owner: Address, operator: Address) -> Result<bool, ClubError>;

    /// Whether the contract supports a given standard.
    fn supports_interface(&self, interface: FixedBytes<4>) -> Result<bool, ClubError>;
}

#[public]
impl IErc721 for CryptoNomadsClub {
    fn name(&self) -> Result<String, ClubError> {
        Ok(NAME.into())
    }

    fn symbol(&self) -> Result<String, ClubError> {
        Ok(SYMBOL.into())
    }

    #[selector(name = "tokenURI")]
    fn token_uri(&self, token_id: U256) -> Result<String, ClubError> {
        self.erc721.token_uri(token_id)
    }

    fn balance_of(&self, owner: Address) -> Result<U256, ClubError> {
        Ok(self.erc721.balance(owner))
    }

    fn owner_of(&self, token_id: U256) -> Result<Address, ClubError> {
        self.erc721.owner(token_id)
    }

    #[selector(name = "safeTransferFrom")]
    fn safe_transfer_from_with_data(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
        data: Bytes,
    ) -> Result<(), ClubError> {
        self.erc721.transfer_from(from, to, token_id)?;
        self.call_receiver(token_id, from, to, data)
    }

    #[selector(name = "safeTransferFrom")]
    fn safe_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), ClubError> {
        self.safe_transfer_from_with_data(from, to, token_id, Bytes(vec![].into()))
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), ClubError> {
        self.erc721.transfer_from(from, to, token_id)
    }

    fn approve(&mut self, approved: Address, token_id: U256) -> Result<(), ClubError> {
        self.erc721.approve(approved, token_id)
    }

    fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
    ) -> Result<(), ClubError> {
        self.erc721.set_approval_for_all(operator, approved)
    }

    fn get_approved(&self, token_id: U256) -> Result<Address, ClubError> {
        self.erc721.get_approved(token_id)
    }

    fn is_approved_for_all(&self, owner: Address, operator: Address) -> Result<bool, ClubError> {
        Ok(self.erc721.is_approved_for_all(owner, operator))
    }

    fn supports_interface(&self, interface: FixedBytes<4>) -> Result<bool, ClubError> {
        Ok(supports_interface(interface))
    }
}
