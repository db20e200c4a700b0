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

use crate::{
    types::{InitialPool, Rights},
    AccountIdOf, Config, EnginePoolIdOf, Error,
};
use frame_support::{BoundedVec, CloneNoBound, PartialEqNoBound, RuntimeDebugNoBound};
use frame_system::pallet_prelude::BlockNumberFor;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::DispatchError;
use zeitgeist_primitives::types::Balance;

#[derive(CloneNoBound, Decode, Encode, Eq, MaxEncodedLen, PartialEqNoBound, RuntimeDebugNoBound, TypeInfo)]
#[scale_info(skip_type_params(T))]
pub enum PoolLifecycle<T: Config> {
    /// Constructed, but no engine pool exists yet.
    Uninitialized(InitialPool<T>),
    /// Bound to the engine pool with the specified ID.
    Active(EnginePoolIdOf<T>),
}

#[derive(CloneNoBound, Decode, Encode, Eq, MaxEncodedLen, PartialEqNoBound, RuntimeDebugNoBound, TypeInfo)]
#[scale_info(skip_type_params(T))]
pub struct Controller<T: Config> {
    pub owner: AccountIdOf<T>,
    pub rights: Rights,
    pub lifecycle: PoolLifecycle<T>,
    /// Upper bound on the total supply of pool shares, enforced on every mint.
    pub cap: Balance,
    pub min_weight_change_period: BlockNumberFor<T>,
    pub add_token_timelock: BlockNumberFor<T>,
    pub symbol: BoundedVec<u8, T::MaxNameLength>,
    pub name: BoundedVec<u8, T::MaxNameLength>,
}

impl<T: Config> Controller<T> {
    pub fn pool_id(&self) -> Result<EnginePoolIdOf<T>, DispatchError> {
        match self.lifecycle {
            PoolLifecycle::Active(pool_id) => Ok(pool_id),
            PoolLifecycle::Uninitialized(_) => Err(Error::<T>::PoolNotCreated.into()),
        }
    }
}
