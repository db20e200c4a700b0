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
    math::{exit_amount_out, exit_ratio, join_amount_in, join_ratio},
    traits::ShareLedger,
    types::Controller,
    AccountIdOf, Config, EnginePoolIdOf, Error, Event, Pallet,
};
use alloc::vec::Vec;
use frame_support::{ensure, require_transactional, traits::Get};
use sp_runtime::{DispatchError, DispatchResult};
use zeitgeist_primitives::{
    math::{checked_ops_res::CheckedSubRes, fixed::bmul},
    traits::WeightedPoolEngine,
    types::{Balance, ControllerId, CurrencyId},
};

/// Pricing inputs of a single asset join or exit.
struct SingleAssetParams {
    balance: Balance,
    weight: Balance,
    total_supply: Balance,
    total_weight: Balance,
    swap_fee: Balance,
}

impl<T: Config> Pallet<T> {
    fn ensure_liquidity_provider(
        controller_id: ControllerId,
        controller: &Controller<T>,
        who: &AccountIdOf<T>,
    ) -> DispatchResult {
        ensure!(
            Self::is_liquidity_provider(controller_id, controller, who),
            Error::<T>::NotOnWhitelist
        );
        Ok(())
    }

    fn single_asset_params(
        controller_id: ControllerId,
        pool_id: EnginePoolIdOf<T>,
        asset: &CurrencyId,
    ) -> Result<SingleAssetParams, DispatchError> {
        ensure!(T::Engine::is_bound(pool_id, asset), Error::<T>::AssetNotBound);
        Ok(SingleAssetParams {
            balance: T::Engine::balance(pool_id, asset)?,
            weight: T::Engine::denormalized_weight(pool_id, asset)?,
            total_supply: Self::total_shares(controller_id),
            total_weight: T::Engine::total_denormalized_weight(pool_id)?,
            swap_fee: T::Engine::swap_fee(pool_id)?,
        })
    }

    /// Burn `pool_amount_in` minus the exit fee from the shares pulled from `who` and route the
    /// exit fee to the fee beneficiary.
    fn redeem_shares(
        controller_id: ControllerId,
        who: &AccountIdOf<T>,
        pool_amount_in: Balance,
        exit_fee: Balance,
    ) -> DispatchResult {
        Self::pull_shares(controller_id, who, pool_amount_in)?;
        Self::burn_shares(controller_id, pool_amount_in.checked_sub_res(&exit_fee)?)?;
        if exit_fee != 0 {
            Self::push_shares(controller_id, &T::FeeBeneficiary::get(), exit_fee)?;
        }
        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_join_pool(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        pool_amount_out: Balance,
        max_amounts_in: Vec<Balance>,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            let pool_id = controller.pool_id()?;
            Self::ensure_liquidity_provider(controller_id, &controller, &who)?;

            Self::with_public_swap_disabled(pool_id, || {
                let total_supply = Self::total_shares(controller_id);
                let ratio = join_ratio(pool_amount_out, total_supply)?;
                ensure!(ratio != 0, Error::<T>::MathApproximation);
                let assets = T::Engine::current_assets(pool_id)?;
                ensure!(max_amounts_in.len() == assets.len(), Error::<T>::LengthMismatch);

                let mut amounts_in = Vec::with_capacity(assets.len());
                for (asset, &max_amount_in) in assets.iter().zip(max_amounts_in.iter()) {
                    let balance = T::Engine::balance(pool_id, asset)?;
                    let amount_in = join_amount_in(ratio, balance)?;
                    ensure!(amount_in != 0, Error::<T>::MathApproximation);
                    ensure!(amount_in <= max_amount_in, Error::<T>::LimitIn);
                    amounts_in.push(amount_in);
                }

                for (asset, amount_in) in assets.into_iter().zip(amounts_in) {
                    Self::pull_underlying(controller_id, pool_id, asset, &who, amount_in)?;
                    Self::deposit_event(Event::Joined {
                        controller_id,
                        who: who.clone(),
                        asset,
                        amount_in,
                    });
                }
                Self::mint_shares(controller_id, pool_amount_out)?;
                Self::push_shares(controller_id, &who, pool_amount_out)?;

                Ok(())
            })
        })
    }

    #[require_transactional]
    pub(crate) fn do_exit_pool(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        pool_amount_in: Balance,
        min_amounts_out: Vec<Balance>,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            let pool_id = controller.pool_id()?;
            Self::ensure_no_engine_exit_fee(pool_id)?;

            Self::with_public_swap_disabled(pool_id, || {
                let total_supply = Self::total_shares(controller_id);
                let exit_fee = bmul(pool_amount_in, T::ExitFee::get())?;
                let ratio = exit_ratio(pool_amount_in.checked_sub_res(&exit_fee)?, total_supply)?;
                ensure!(ratio != 0, Error::<T>::MathApproximation);
                let assets = T::Engine::current_assets(pool_id)?;
                ensure!(min_amounts_out.len() == assets.len(), Error::<T>::LengthMismatch);

                let mut amounts_out = Vec::with_capacity(assets.len());
                for (asset, &min_amount_out) in assets.iter().zip(min_amounts_out.iter()) {
                    let balance = T::Engine::balance(pool_id, asset)?;
                    let amount_out = exit_amount_out(ratio, balance)?;
                    ensure!(amount_out != 0, Error::<T>::MathApproximation);
                    ensure!(amount_out >= min_amount_out, Error::<T>::LimitOut);
                    amounts_out.push(amount_out);
                }

                Self::redeem_shares(controller_id, &who, pool_amount_in, exit_fee)?;
                for (asset, amount_out) in assets.into_iter().zip(amounts_out) {
                    Self::push_underlying(controller_id, pool_id, asset, &who, amount_out)?;
                    Self::deposit_event(Event::Exited {
                        controller_id,
                        who: who.clone(),
                        asset,
                        amount_out,
                    });
                }

                Ok(())
            })
        })
    }

    /// Returns the amount of pool shares issued.
    #[require_transactional]
    pub(crate) fn do_joinswap_extern_amount_in(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        asset_in: CurrencyId,
        amount_in: Balance,
        min_pool_amount_out: Balance,
    ) -> Result<Balance, DispatchError> {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            let pool_id = controller.pool_id()?;
            Self::ensure_liquidity_provider(controller_id, &controller, &who)?;
            let params = Self::single_asset_params(controller_id, pool_id, &asset_in)?;
            ensure!(
                amount_in <= bmul(params.balance, T::MaxInRatio::get())?,
                Error::<T>::MaxInRatio
            );

            let pool_amount_out = T::Engine::calc_pool_out_given_single_in(
                params.balance,
                params.weight,
                params.total_supply,
                params.total_weight,
                amount_in,
                params.swap_fee,
            )?;
            ensure!(pool_amount_out != 0, Error::<T>::MathApproximation);
            ensure!(pool_amount_out >= min_pool_amount_out, Error::<T>::LimitOut);

            Self::deposit_event(Event::Joined {
                controller_id,
                who: who.clone(),
                asset: asset_in,
                amount_in,
            });
            Self::mint_shares(controller_id, pool_amount_out)?;
            Self::push_shares(controller_id, &who, pool_amount_out)?;
            Self::pull_underlying(controller_id, pool_id, asset_in, &who, amount_in)?;

            Ok(pool_amount_out)
        })
    }

    /// Returns the amount of `asset_in` paid.
    #[require_transactional]
    pub(crate) fn do_joinswap_pool_amount_out(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        asset_in: CurrencyId,
        pool_amount_out: Balance,
        max_amount_in: Balance,
    ) -> Result<Balance, DispatchError> {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            let pool_id = controller.pool_id()?;
            Self::ensure_liquidity_provider(controller_id, &controller, &who)?;
            let params = Self::single_asset_params(controller_id, pool_id, &asset_in)?;

            let amount_in = T::Engine::calc_single_in_given_pool_out(
                params.balance,
                params.weight,
                params.total_supply,
                params.total_weight,
                pool_amount_out,
                params.swap_fee,
            )?;
            ensure!(amount_in != 0, Error::<T>::MathApproximation);
            ensure!(amount_in <= max_amount_in, Error::<T>::LimitIn);
            ensure!(
                amount_in <= bmul(params.balance, T::MaxInRatio::get())?,
                Error::<T>::MaxInRatio
            );

            Self::deposit_event(Event::Joined {
                controller_id,
                who: who.clone(),
                asset: asset_in,
                amount_in,
            });
            Self::mint_shares(controller_id, pool_amount_out)?;
            Self::push_shares(controller_id, &who, pool_amount_out)?;
            Self::pull_underlying(controller_id, pool_id, asset_in, &who, amount_in)?;

            Ok(amount_in)
        })
    }

    /// Returns the amount of `asset_out` received.
    #[require_transactional]
    pub(crate) fn do_exitswap_pool_amount_in(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        asset_out: CurrencyId,
        pool_amount_in: Balance,
        min_amount_out: Balance,
    ) -> Result<Balance, DispatchError> {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            let pool_id = controller.pool_id()?;
            Self::ensure_no_engine_exit_fee(pool_id)?;
            let params = Self::single_asset_params(controller_id, pool_id, &asset_out)?;

            let amount_out = T::Engine::calc_single_out_given_pool_in(
                params.balance,
                params.weight,
                params.total_supply,
                params.total_weight,
                pool_amount_in,
                params.swap_fee,
            )?;
            ensure!(amount_out != 0, Error::<T>::MathApproximation);
            ensure!(amount_out >= min_amount_out, Error::<T>::LimitOut);
            ensure!(
                amount_out <= bmul(params.balance, T::MaxOutRatio::get())?,
                Error::<T>::MaxOutRatio
            );
            let exit_fee = bmul(pool_amount_in, T::ExitFee::get())?;

            Self::deposit_event(Event::Exited {
                controller_id,
                who: who.clone(),
                asset: asset_out,
                amount_out,
            });
            Self::redeem_shares(controller_id, &who, pool_amount_in, exit_fee)?;
            Self::push_underlying(controller_id, pool_id, asset_out, &who, amount_out)?;

            Ok(amount_out)
        })
    }

    /// Returns the amount of pool shares redeemed.
    #[require_transactional]
    pub(crate) fn do_exitswap_extern_amount_out(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        asset_out: CurrencyId,
        amount_out: Balance,
        max_pool_amount_in: Balance,
    ) -> Result<Balance, DispatchError> {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            let pool_id = controller.pool_id()?;
            Self::ensure_no_engine_exit_fee(pool_id)?;
            let params = Self::single_asset_params(controller_id, pool_id, &asset_out)?;
            ensure!(
                amount_out <= bmul(params.balance, T::MaxOutRatio::get())?,
                Error::<T>::MaxOutRatio
            );

            let pool_amount_in = T::Engine::calc_pool_in_given_single_out(
                params.balance,
                params.weight,
                params.total_supply,
                params.total_weight,
                amount_out,
                params.swap_fee,
            )?;
            ensure!(pool_amount_in != 0, Error::<T>::MathApproximation);
            ensure!(pool_amount_in <= max_pool_amount_in, Error::<T>::LimitIn);
            let exit_fee = bmul(pool_amount_in, T::ExitFee::get())?;

            Self::deposit_event(Event::Exited {
                controller_id,
                who: who.clone(),
                asset: asset_out,
                amount_out,
            });
            Self::redeem_shares(controller_id, &who, pool_amount_in, exit_fee)?;
            Self::push_underlying(controller_id, pool_id, asset_out, &who, amount_out)?;

            Ok(pool_amount_in)
        })
    }
}
