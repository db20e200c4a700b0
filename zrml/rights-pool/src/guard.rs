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

use crate::{Config, Error, Locks, Pallet};
use frame_support::ensure;
use sp_runtime::{DispatchError, DispatchResult};
use zeitgeist_primitives::types::ControllerId;

impl<T: Config> Pallet<T> {
    /// Run `f` with the lock of `controller_id` held. Fails with `Reentrancy` if the lock is
    /// already held. The lock is released on every return path.
    pub(crate) fn with_guard<R, F>(controller_id: ControllerId, f: F) -> Result<R, DispatchError>
    where
        F: FnOnce() -> Result<R, DispatchError>,
    {
        ensure!(!Locks::<T>::get(controller_id), Error::<T>::Reentrancy);
        Locks::<T>::insert(controller_id, true);
        let result = f();
        Locks::<T>::remove(controller_id);
        result
    }

    pub(crate) fn ensure_unlocked(controller_id: ControllerId) -> DispatchResult {
        ensure!(!Locks::<T>::get(controller_id), Error::<T>::Reentrancy);
        Ok(())
    }
}
