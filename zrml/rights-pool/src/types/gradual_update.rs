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

use crate::Config;
use frame_support::{BoundedVec, CloneNoBound, PartialEqNoBound, RuntimeDebugNoBound};
use frame_system::pallet_prelude::BlockNumberFor;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use zeitgeist_primitives::types::Balance;

/// A linear transition of all weights between two blocks.
///
/// `start_weights` and `end_weights` are ordered like the engine pool's assets at scheduling
/// time. Assets can't be added or removed while the transition is stored.
#[derive(CloneNoBound, Decode, Encode, Eq, MaxEncodedLen, PartialEqNoBound, RuntimeDebugNoBound, TypeInfo)]
#[scale_info(skip_type_params(T))]
pub struct GradualUpdate<T: Config> {
    pub start_block: BlockNumberFor<T>,
    pub end_block: BlockNumberFor<T>,
    pub start_weights: BoundedVec<Balance, T::MaxAssets>,
    pub end_weights: BoundedVec<Balance, T::MaxAssets>,
}
