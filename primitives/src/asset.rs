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

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// The asset type used by the rights pool controller and its engine.
///
/// `PoolShare` carries the id of the controller that issues the share, so every controller
/// has its own fungible share asset on the shared `MultiCurrency` ledger.
#[cfg_attr(feature = "std", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
#[derive(
    Clone, Copy, Debug, Decode, Eq, Encode, MaxEncodedLen, Ord, PartialEq, PartialOrd, TypeInfo,
)]
pub enum Asset<CI: MaxEncodedLen> {
    Ztg,
    ForeignAsset(u32),
    PoolShare(CI),
}

impl<CI: MaxEncodedLen> Asset<CI> {
    pub fn is_pool_share(&self) -> bool {
        matches!(self, Asset::PoolShare(_))
    }
}

impl<CI: MaxEncodedLen> Default for Asset<CI> {
    fn default() -> Self {
        Self::Ztg
    }
}
