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

use crate::{traits::ShareLedger, AccountIdOf, Config, Controllers, Error, Pallet};
use frame_support::ensure;
use orml_traits::MultiCurrency;
use sp_runtime::DispatchResult;
use zeitgeist_primitives::{
    math::checked_ops_res::CheckedAddRes,
    types::{Asset, Balance, ControllerId},
};

impl<T: Config> ShareLedger<T> for Pallet<T> {
    fn total_shares(controller_id: ControllerId) -> Balance {
        T::MultiCurrency::total_issuance(Asset::PoolShare(controller_id))
    }

    fn mint_shares(controller_id: ControllerId, amount: Balance) -> DispatchResult {
        let cap = Controllers::<T>::get(controller_id).ok_or(Error::<T>::ControllerNotFound)?.cap;
        let new_supply = Self::total_shares(controller_id).checked_add_res(&amount)?;
        ensure!(new_supply <= cap, Error::<T>::CapLimitReached);
        T::MultiCurrency::deposit(
            Asset::PoolShare(controller_id),
            &Self::controller_account(controller_id),
            amount,
        )
    }

    fn burn_shares(controller_id: ControllerId, amount: Balance) -> DispatchResult {
        T::MultiCurrency::withdraw(
            Asset::PoolShare(controller_id),
            &Self::controller_account(controller_id),
            amount,
        )
    }

    fn push_shares(
        controller_id: ControllerId,
        to: &AccountIdOf<T>,
        amount: Balance,
    ) -> DispatchResult {
        T::MultiCurrency::transfer(
            Asset::PoolShare(controller_id),
            &Self::controller_account(controller_id),
            to,
            amount,
        )
    }

    fn pull_shares(
        controller_id: ControllerId,
        from: &AccountIdOf<T>,
        amount: Balance,
    ) -> DispatchResult {
        T::MultiCurrency::transfer(
            Asset::PoolShare(controller_id),
            from,
            &Self::controller_account(controller_id),
            amount,
        )
    }
}
