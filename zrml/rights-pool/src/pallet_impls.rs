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
    types::Controller, AccountIdOf, Config, Controllers, EnginePoolIdOf, Error,
    LiquidityProviders, Pallet,
};
use frame_support::{ensure, traits::Get};
use orml_traits::MultiCurrency;
use sp_runtime::{traits::AccountIdConversion, DispatchError, DispatchResult};
use zeitgeist_primitives::{
    math::checked_ops_res::{CheckedAddRes, CheckedSubRes},
    traits::WeightedPoolEngine,
    types::{Balance, ControllerId, CurrencyId},
};

impl<T: Config> Pallet<T> {
    /// The account which holds the controller's assets in transit and which the engine pool is
    /// bound to.
    pub(crate) fn controller_account(controller_id: ControllerId) -> AccountIdOf<T> {
        T::PalletId::get().into_sub_account_truncating(controller_id)
    }

    pub(crate) fn controller(controller_id: ControllerId) -> Result<Controller<T>, DispatchError> {
        Controllers::<T>::get(controller_id).ok_or(Error::<T>::ControllerNotFound.into())
    }

    pub(crate) fn ensure_owner(controller: &Controller<T>, who: &AccountIdOf<T>) -> DispatchResult {
        ensure!(controller.owner == *who, Error::<T>::NotOwner);
        Ok(())
    }

    pub(crate) fn ensure_weight_in_bounds(weight: Balance) -> DispatchResult {
        ensure!(weight >= T::MinWeight::get(), Error::<T>::WeightBelowMin);
        ensure!(weight <= T::MaxWeight::get(), Error::<T>::WeightAboveMax);
        Ok(())
    }

    /// Reject assets which don't support zero-value transfers.
    pub(crate) fn verify_asset_compliance(
        controller_id: ControllerId,
        owner: &AccountIdOf<T>,
        asset: CurrencyId,
    ) -> DispatchResult {
        T::MultiCurrency::transfer(asset, &Self::controller_account(controller_id), owner, 0)
            .map_err(|_| Error::<T>::NonConformingAsset.into())
    }

    pub(crate) fn is_liquidity_provider(
        controller_id: ControllerId,
        controller: &Controller<T>,
        who: &AccountIdOf<T>,
    ) -> bool {
        !controller.rights.can_whitelist_lps
            || LiquidityProviders::<T>::contains_key(controller_id, who)
    }

    /// Move `amount` of `asset` from `from` into the engine pool.
    pub(crate) fn pull_underlying(
        controller_id: ControllerId,
        pool_id: EnginePoolIdOf<T>,
        asset: CurrencyId,
        from: &AccountIdOf<T>,
        amount: Balance,
    ) -> DispatchResult {
        let balance = T::Engine::balance(pool_id, &asset)?;
        let weight = T::Engine::denormalized_weight(pool_id, &asset)?;
        T::MultiCurrency::transfer(asset, from, &Self::controller_account(controller_id), amount)?;
        T::Engine::rebind(pool_id, asset, balance.checked_add_res(&amount)?, weight)
    }

    /// Move `amount` of `asset` from the engine pool to `to`.
    pub(crate) fn push_underlying(
        controller_id: ControllerId,
        pool_id: EnginePoolIdOf<T>,
        asset: CurrencyId,
        to: &AccountIdOf<T>,
        amount: Balance,
    ) -> DispatchResult {
        let balance = T::Engine::balance(pool_id, &asset)?;
        let weight = T::Engine::denormalized_weight(pool_id, &asset)?;
        T::Engine::rebind(pool_id, asset, balance.checked_sub_res(&amount)?, weight)?;
        T::MultiCurrency::transfer(asset, &Self::controller_account(controller_id), to, amount)
    }

    /// Run `f` with public swapping disabled, then restore the previous setting. On failure the
    /// surrounding transaction is rolled back, which restores the setting as well.
    pub(crate) fn with_public_swap_disabled<R, F>(
        pool_id: EnginePoolIdOf<T>,
        f: F,
    ) -> Result<R, DispatchError>
    where
        F: FnOnce() -> Result<R, DispatchError>,
    {
        let public_swap = T::Engine::is_public_swap(pool_id)?;
        T::Engine::set_public_swap(pool_id, false)?;
        let result = f()?;
        T::Engine::set_public_swap(pool_id, public_swap)?;
        Ok(result)
    }

    pub(crate) fn ensure_no_engine_exit_fee(pool_id: EnginePoolIdOf<T>) -> DispatchResult {
        ensure!(T::Engine::exit_fee(pool_id)? == 0, Error::<T>::NonZeroEngineExitFee);
        Ok(())
    }
}
