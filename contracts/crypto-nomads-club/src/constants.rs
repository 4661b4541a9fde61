// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Immutable collection parameters.

use alloy_primitives::U256;

/// Immutable NFT name.
pub const NAME: &str = "Crypto Nomads Club";

/// Immutable NFT symbol.
pub const SYMBOL: &str = "CNC";

/// Tokens that can ever be sold through `mint`.
pub const MAX_PUBLIC_SUPPLY: U256 = U256::from_limbs([2900, 0, 0, 0]);

/// Tokens the owner can ever issue through `gift`.
pub const MAX_GIFT_SUPPLY: U256 = U256::from_limbs([100, 0, 0, 0]);

/// Hard cap over public and gifted tokens together.
pub const MAX_TOTAL_SUPPLY: U256 = U256::from_limbs([3000, 0, 0, 0]);

/// Largest number of cities accepted by a single `mint` call.
pub const MAX_CITIES_PER_MINT: usize = 5;

/// Selector returned by contracts implementing `IERC721Receiver`.
pub const ERC721_TOKEN_RECEIVER_ID: u32 = 0x150b7a02;
