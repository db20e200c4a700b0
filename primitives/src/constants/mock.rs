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

#![cfg(feature = "mock")]

pub use super::*;
use crate::types::{Asset, Balance, CurrencyId};
use frame_support::{parameter_types, PalletId};
use orml_traits::parameter_type_with_key;

// Rights pool
parameter_types! {
    pub const DefaultAddTokenTimelock: BlockNumber = DEFAULT_ADD_TOKEN_TIMELOCK;
    pub const DefaultMinWeightChangePeriod: BlockNumber = DEFAULT_MIN_WEIGHT_CHANGE_PERIOD;
    pub const MaxAssets: u32 = 8;
    pub const MaxInRatio: Balance = MAX_IN_RATIO;
    pub const MaxNameLength: u32 = 32;
    pub const MaxOutRatio: Balance = MAX_OUT_RATIO;
    pub const MaxPoolSupply: Balance = MAX_POOL_SUPPLY;
    pub const MaxSwapFee: Balance = MAX_FEE;
    pub const MaxTotalWeight: Balance = MAX_TOTAL_WEIGHT;
    pub const MaxWeight: Balance = MAX_WEIGHT;
    pub const MinAssets: u32 = 2;
    pub const MinBalance: Balance = MIN_BALANCE;
    pub const MinPoolSupply: Balance = MIN_POOL_SUPPLY;
    pub const MinSwapFee: Balance = MIN_FEE;
    pub const MinWeight: Balance = MIN_WEIGHT;
    pub const RightsPoolPalletId: PalletId = RIGHTS_POOL_PALLET_ID;
}

// ORML
parameter_types! {
    pub const GetNativeCurrencyId: CurrencyId = Asset::Ztg;
    pub const MaxLocks: u32 = 50;
    pub const MaxReserves: u32 = 50;
}

parameter_type_with_key! {
    // Pool shares and pooled assets must be able to drain to zero.
    pub ExistentialDeposits: |currency_id: CurrencyId| -> Balance {
        match currency_id {
            Asset::Ztg => ExistentialDeposit::get(),
            _ => 0
        }
    };
}

parameter_types! {
    pub const ExistentialDeposit: u128 = CENT;
}

// System
parameter_types! {
    pub const BlockHashCount: u64 = 250;
}
