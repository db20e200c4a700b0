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

pub use crate::asset::*;

use sp_runtime::{
    traits::{IdentifyAccount, Verify},
    MultiSignature,
};

pub type Amount = i128;

pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;

pub type Balance = u128;

pub type BlockNumber = u64;

/// Identifies a rights pool controller.
pub type ControllerId = u128;

pub type CurrencyId = Asset<ControllerId>;

pub type Hash = sp_core::H256;

pub type Signature = MultiSignature;

// Test

pub type AccountIdTest = u128;
