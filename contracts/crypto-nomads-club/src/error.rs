// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Ways the contract's methods may fail.
//!
//! Every failure the contract raises itself is reported with a human-readable
//! reason, ABI-encoded as Solidity's `Error(string)` so wallets and RPC clients
//! decode it the same way as a `require(cond, "reason")` revert. Failures of
//! external calls are re-raised with the callee's revert data untouched.

use alloc::vec::Vec;
use alloy_sol_types::{Revert, SolError};
use stylus_sdk::console;

/// Broad classes of failure, useful for callers that only care about the category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    AccessDenied,
    InvalidInput,
    QuotaExceeded,
    PaymentInsufficient,
    GatingDenied,
    ExternalCall,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClubError {
    /// Caller is not the contract owner.
    NotOwner,
    /// Ownership cannot be handed to the zero address.
    ZeroOwner,
    /// A city name is not in the registry.
    InvalidCity,
    /// `mint` was called with no cities or more than the batch limit.
    InvalidCityCount,
    /// The configured allow list has no code.
    AllowListNotContract,
    /// The caller holds no token of the allow-list collection.
    AllowListTokenRequired,
    /// The current sale batch cannot cover the request.
    BatchExhausted,
    /// Every public token has been sold.
    PublicSoldOut,
    /// The request would sell past the public cap.
    PublicSupplyExceeded,
    /// Every token of the collection has been issued.
    SoldOut,
    /// Every giftable token has been issued.
    GiftsExhausted,
    /// Attached value is below `count * price`.
    InsufficientEth,
    /// Token id has not been minted.
    InvalidTokenId,
    /// Attempt to issue a token to the zero address.
    MintToZero,
    /// Attempt to transfer a token to the zero address.
    TransferToZero,
    /// `from` is not the owner of the token.
    IncorrectOwner,
    /// Caller may not move the token.
    NotApproved,
    /// Caller may not manage approvals for the token.
    ApproveNotAuthorized,
    /// The owner cannot be the token's approved account.
    ApprovalToOwner,
    /// An account cannot be its own operator.
    ApproveToCaller,
    /// The receiving contract refused the token.
    NonReceiver,
    /// Revert data returned by another contract.
    ExternalCall(Vec<u8>),
}

impl ClubError {
    /// The revert reason, for errors raised by this contract.
    pub const fn reason(&self) -> Option<&'static str> {
        let reason = match self {
            ClubError::NotOwner => "Ownable: caller is not the owner",
            ClubError::ZeroOwner => "Ownable: new owner is the zero address",
            ClubError::InvalidCity => "Invalid city",
            ClubError::InvalidCityCount => "Invalid amount of cities selected",
            ClubError::AllowListNotContract => "function call to a non-contract account",
            ClubError::AllowListTokenRequired => "Requires allow list NFT",
            ClubError::BatchExhausted => "Not enough available to mint",
            ClubError::PublicSoldOut => "All public tokens sold out",
            ClubError::PublicSupplyExceeded => "Not enough public tokens available",
            ClubError::SoldOut => "Sold out",
            ClubError::GiftsExhausted => "Run out of soul bound tokens",
            ClubError::InsufficientEth => "Insufficient ETH",
            ClubError::InvalidTokenId => "ERC721: invalid token ID",
            ClubError::MintToZero => "ERC721: mint to the zero address",
            ClubError::TransferToZero => "ERC721: transfer to the zero address",
            ClubError::IncorrectOwner => "ERC721: transfer from incorrect owner",
            ClubError::NotApproved => "ERC721: caller is not token owner or approved",
            ClubError::ApproveNotAuthorized => {
                "ERC721: approve caller is not token owner or approved for all"
            }
            ClubError::ApprovalToOwner => "ERC721: approval to current owner",
            ClubError::ApproveToCaller => "ERC721: approve to caller",
            ClubError::NonReceiver => "ERC721: transfer to non ERC721Receiver implementer",
            ClubError::ExternalCall(_) => return None,
        };
        Some(reason)
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            ClubError::NotOwner | ClubError::NotApproved | ClubError::ApproveNotAuthorized => {
                ErrorKind::AccessDenied
            }
            ClubError::ZeroOwner
            | ClubError::InvalidCity
            | ClubError::InvalidCityCount
            | ClubError::InvalidTokenId
            | ClubError::MintToZero
            | ClubError::TransferToZero
            | ClubError::IncorrectOwner
            | ClubError::ApprovalToOwner
            | ClubError::ApproveToCaller
            | ClubError::NonReceiver => ErrorKind::InvalidInput,
            ClubError::BatchExhausted
            | ClubError::PublicSoldOut
            | ClubError::PublicSupplyExceeded
            | ClubError::SoldOut
            | ClubError::GiftsExhausted => ErrorKind::QuotaExceeded,
            ClubError::InsufficientEth => ErrorKind::PaymentInsufficient,
            ClubError::AllowListNotContract | ClubError::AllowListTokenRequired => {
                ErrorKind::GatingDenied
            }
            ClubError::ExternalCall(_) => ErrorKind::ExternalCall,
        }
    }
}

impl From<ClubError> for Vec<u8> {
    fn from(err: ClubError) -> Vec<u8> {
        console!("revert ({:?}): {:?}", err.kind(), err.reason());
        match err {
            ClubError::ExternalCall(data) => data,
            err => match err.reason() {
                Some(reason) => Revert {
                    reason: reason.into(),
                }
                .abi_encode(),
                None => Vec::new(),
            },
        }
    }
}

#[cfg(feature = "export-abi")]
impl stylus_sdk::abi::export::internal::InnerTypes for ClubError {
    fn inner_types() -> Vec<stylus_sdk::abi::export::internal::InnerType> {
        use alloc::{format, vec};
        use core::any::TypeId;
        use stylus_sdk::abi::export::internal::InnerType;

        vec![InnerType {
            name: format!("error {};", <Revert as SolError>::SIGNATURE),
            id: TypeId::of::<Revert>(),
        }]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn test_reason_is_encoded_as_error_string() {
        let data: Vec<u8> = ClubError::SoldOut.into();

        // Error(string) selector
        assert_eq!(data[..4], hex!("08c379a0"));
        let decoded = Revert::abi_decode(&data).unwrap();
        assert_eq!(decoded.reason, "Sold out");
    }

    #[test]
    fn test_owner_reason_matches_ownable() {
        let data: Vec<u8> = ClubError::NotOwner.into();
        let decoded = Revert::abi_decode(&data).unwrap();
        assert_eq!(decoded.reason, "Ownable: caller is not the owner");
    }

    #[test]
    fn test_external_revert_data_is_passed_through() {
        let err = ClubError::ExternalCall(vec![0xde, 0xad]);
        assert_eq!(err.reason(), None);
        assert_eq!(err.kind(), ErrorKind::ExternalCall);

        let data: Vec<u8> = err.into();
        assert_eq!(data, vec![0xde, 0xad]);
    }

    #[test]
    fn test_every_raised_error_has_a_reason() {
        let errors = [
            ClubError::NotOwner,
            ClubError::ZeroOwner,
            ClubError::InvalidCity,
            ClubError::InvalidCityCount,
            ClubError::AllowListNotContract,
            ClubError::AllowListTokenRequired,
            ClubError::BatchExhausted,
            ClubError::PublicSoldOut,
            ClubError::PublicSupplyExceeded,
            ClubError::SoldOut,
            ClubError::GiftsExhausted,
            ClubError::InsufficientEth,
            ClubError::InvalidTokenId,
            ClubError::MintToZero,
            ClubError::TransferToZero,
            ClubError::IncorrectOwner,
            ClubError::NotApproved,
            ClubError::ApproveNotAuthorized,
            ClubError::ApprovalToOwner,
            ClubError::ApproveToCaller,
            ClubError::NonReceiver,
        ];
        for err in errors {
            assert_ne!(err.kind(), ErrorKind::ExternalCall);
            let reason = err.reason().unwrap();
            let data: Vec<u8> = err.into();
            assert_eq!(Revert::abi_decode(&data).unwrap().reason, reason);
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ClubError::NotOwner.kind(), ErrorKind::AccessDenied);
        assert_eq!(ClubError::InvalidCity.kind(), ErrorKind::InvalidInput);
        assert_eq!(ClubError::InvalidCityCount.kind(), ErrorKind::InvalidInput);
        assert_eq!(ClubError::BatchExhausted.kind(), ErrorKind::QuotaExceeded);
        assert_eq!(ClubError::GiftsExhausted.kind(), ErrorKind::QuotaExceeded);
        assert_eq!(ClubError::InsufficientEth.kind(), ErrorKind::PaymentInsufficient);
        assert_eq!(ClubError::AllowListNotContract.kind(), ErrorKind::GatingDenied);
        assert_eq!(ClubError::AllowListTokenRequired.kind(), ErrorKind::GatingDenied);
    }
}
