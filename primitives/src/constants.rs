// Copyright 2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

#![allow(
    // Constants parameters inside `parameter_types!` already check
    // arithmetic operations at compile time
    clippy::arithmetic_side_effects
)]

#[cfg(feature = "mock")]
pub mod mock;

use crate::types::{Balance, BlockNumber};
use frame_support::PalletId;

pub const MILLISECS_PER_BLOCK: u32 = 12000;
pub const BLOCKS_PER_MINUTE: BlockNumber = 60_000 / (MILLISECS_PER_BLOCK as BlockNumber);
pub const BLOCKS_PER_HOUR: BlockNumber = BLOCKS_PER_MINUTE * 60;
pub const BLOCKS_PER_DAY: BlockNumber = BLOCKS_PER_HOUR * 24;

pub const BASE: u128 = 10_000_000_000;
pub const CENT: Balance = BASE / 100; // 100_000_000
pub const MILLI: Balance = CENT / 10; //  10_000_000
pub const MICRO: Balance = MILLI / 1000; // 10_000

// Rights pool
pub const RIGHTS_POOL_PALLET_ID: PalletId = PalletId(*b"zge/rpct");
/// Bounds of a weighted pool, rescaled from the engine's 18 decimals to `BASE`.
pub const MIN_WEIGHT: Balance = BASE;
pub const MAX_WEIGHT: Balance = 50 * BASE;
pub const MAX_TOTAL_WEIGHT: Balance = 50 * BASE;
pub const MIN_BALANCE: Balance = BASE / 1_000_000;
pub const MIN_FEE: Balance = BASE / 1_000_000;
pub const MAX_FEE: Balance = BASE / 10;
pub const MAX_IN_RATIO: Balance = BASE / 2;
pub const MAX_OUT_RATIO: Balance = BASE / 3 + 1;
pub const MIN_POOL_SUPPLY: Balance = 100 * BASE;
pub const MAX_POOL_SUPPLY: Balance = 1_000_000_000 * BASE;
pub const DEFAULT_MIN_WEIGHT_CHANGE_PERIOD: BlockNumber = 90;
pub const DEFAULT_ADD_TOKEN_TIMELOCK: BlockNumber = 90;
