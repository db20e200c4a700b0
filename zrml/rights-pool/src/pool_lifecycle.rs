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
    traits::ShareLedger,
    types::{Controller, InitialAsset, InitialPool, PoolLifecycle, Rights},
    AccountIdOf, Config, Controllers, Error, Event, LiquidityProviders, NextControllerId, Pallet,
    LOG_TARGET,
};
use alloc::vec::Vec;
use frame_support::{ensure, require_transactional, traits::Get, BoundedVec};
use frame_system::pallet_prelude::BlockNumberFor;
use orml_traits::MultiCurrency;
use sp_runtime::{DispatchResult, SaturatedConversion};
use zeitgeist_primitives::{
    math::checked_ops_res::CheckedAddRes,
    traits::WeightedPoolEngine,
    types::{Balance, ControllerId, CurrencyId},
};

impl<T: Config> Pallet<T> {
    #[allow(clippy::too_many_arguments)]
    #[require_transactional]
    pub(crate) fn do_create_controller(
        who: AccountIdOf<T>,
        symbol: Vec<u8>,
        name: Vec<u8>,
        assets: Vec<CurrencyId>,
        balances: Vec<Balance>,
        weights: Vec<Balance>,
        swap_fee: Balance,
        rights: Rights,
    ) -> DispatchResult {
        ensure!(swap_fee >= T::MinSwapFee::get(), Error::<T>::SwapFeeBelowMin);
        ensure!(swap_fee <= T::MaxSwapFee::get(), Error::<T>::SwapFeeAboveMax);
        let asset_count: u32 = assets.len().saturated_into();
        ensure!(asset_count >= T::MinAssets::get(), Error::<T>::AssetLimitBelowMin);
        ensure!(asset_count <= T::MaxAssets::get(), Error::<T>::AssetLimitAboveMax);
        ensure!(
            assets.len() == balances.len() && assets.len() == weights.len(),
            Error::<T>::LengthMismatch
        );
        let symbol: BoundedVec<u8, T::MaxNameLength> =
            symbol.try_into().map_err(|_| Error::<T>::NameTooLong)?;
        let name: BoundedVec<u8, T::MaxNameLength> =
            name.try_into().map_err(|_| Error::<T>::NameTooLong)?;

        let controller_id = NextControllerId::<T>::get();
        let mut total_weight: Balance = 0;
        let mut initial_assets = Vec::with_capacity(assets.len());
        for ((asset, balance), weight) in assets.into_iter().zip(balances).zip(weights) {
            ensure!(
                !initial_assets.iter().any(|a: &InitialAsset| a.asset == asset),
                Error::<T>::DuplicateAsset
            );
            Self::ensure_weight_in_bounds(weight)?;
            ensure!(balance >= T::MinBalance::get(), Error::<T>::BalanceBelowMin);
            total_weight = total_weight.checked_add_res(&weight)?;
            Self::verify_asset_compliance(controller_id, &who, asset)?;
            initial_assets.push(InitialAsset { asset, balance, weight });
        }
        ensure!(total_weight <= T::MaxTotalWeight::get(), Error::<T>::MaxTotalWeight);
        let assets = initial_assets.try_into().map_err(|_| Error::<T>::AssetLimitAboveMax)?;

        let controller = Controller {
            owner: who.clone(),
            rights,
            lifecycle: PoolLifecycle::Uninitialized(InitialPool { assets, swap_fee }),
            cap: Balance::MAX,
            min_weight_change_period: T::DefaultMinWeightChangePeriod::get(),
            add_token_timelock: T::DefaultAddTokenTimelock::get(),
            symbol,
            name,
        };
        Controllers::<T>::insert(controller_id, controller);
        NextControllerId::<T>::put(controller_id.checked_add_res(&1)?);

        Self::deposit_event(Event::ControllerCreated { controller_id, owner: who, rights });

        Ok(())
    }

    #[require_transactional]
    pub(crate) fn do_create_pool(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        initial_supply: Balance,
        periods: Option<(BlockNumberFor<T>, BlockNumberFor<T>)>,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let mut controller = Self::controller(controller_id)?;
            Self::ensure_owner(&controller, &who)?;
            let InitialPool { assets, swap_fee } = match controller.lifecycle {
                PoolLifecycle::Uninitialized(ref initial_pool) => initial_pool.clone(),
                PoolLifecycle::Active(_) => return Err(Error::<T>::PoolAlreadyCreated.into()),
            };
            if let Some((min_weight_change_period, add_token_timelock)) = periods {
                ensure!(
                    min_weight_change_period >= add_token_timelock,
                    Error::<T>::InconsistentTimelock
                );
                controller.min_weight_change_period = min_weight_change_period;
                controller.add_token_timelock = add_token_timelock;
            }
            ensure!(initial_supply >= T::MinPoolSupply::get(), Error::<T>::InitialSupplyBelowMin);
            ensure!(initial_supply <= T::MaxPoolSupply::get(), Error::<T>::InitialSupplyAboveMax);
            if controller.rights.can_change_cap {
                controller.cap = initial_supply;
            }
            // The ledger reads the cap from storage.
            Controllers::<T>::insert(controller_id, &controller);

            Self::mint_shares(controller_id, initial_supply)?;
            Self::push_shares(controller_id, &who, initial_supply)?;

            let controller_account = Self::controller_account(controller_id);
            let pool_id = T::Engine::create_pool(&controller_account)?;
            Self::ensure_no_engine_exit_fee(pool_id)?;
            for InitialAsset { asset, balance, weight } in assets.into_iter() {
                T::MultiCurrency::transfer(asset, &who, &controller_account, balance)?;
                T::Engine::bind(pool_id, asset, balance, weight)?;
            }
            T::Engine::set_swap_fee(pool_id, swap_fee)?;
            T::Engine::set_public_swap(pool_id, true)?;

            controller.lifecycle = PoolLifecycle::Active(pool_id);
            Controllers::<T>::insert(controller_id, controller);

            log::debug!(
                target: LOG_TARGET,
                "Controller {} created engine pool {:?}",
                controller_id,
                pool_id
            );
            Self::deposit_event(Event::PoolCreated {
                controller_id,
                who: who.clone(),
                pool_id,
                initial_supply,
            });

            Ok(())
        })
    }

    #[require_transactional]
    pub(crate) fn do_set_swap_fee(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        swap_fee: Balance,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            Self::ensure_owner(&controller, &who)?;
            ensure!(controller.rights.can_change_swap_fee, Error::<T>::SwapFeeNotConfigurable);
            let pool_id = controller.pool_id()?;
            ensure!(swap_fee >= T::MinSwapFee::get(), Error::<T>::SwapFeeBelowMin);
            ensure!(swap_fee <= T::MaxSwapFee::get(), Error::<T>::SwapFeeAboveMax);

            T::Engine::set_swap_fee(pool_id, swap_fee)?;

            Self::deposit_event(Event::SwapFeeSet { controller_id, swap_fee });

            Ok(())
        })
    }

    #[require_transactional]
    pub(crate) fn do_set_public_swap(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        public_swap: bool,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            Self::ensure_owner(&controller, &who)?;
            ensure!(controller.rights.can_pause_swapping, Error::<T>::SwappingNotPausable);
            let pool_id = controller.pool_id()?;

            T::Engine::set_public_swap(pool_id, public_swap)?;

            Self::deposit_event(Event::PublicSwapSet { controller_id, public_swap });

            Ok(())
        })
    }

    /// Change the cap. A cap below the current supply is accepted and blocks minting until the
    /// supply has dropped below it.
    #[require_transactional]
    pub(crate) fn do_set_cap(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        new_cap: Balance,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let mut controller = Self::controller(controller_id)?;
            Self::ensure_owner(&controller, &who)?;
            ensure!(controller.rights.can_change_cap, Error::<T>::CapNotConfigurable);
            controller.pool_id()?;

            let old_cap = controller.cap;
            controller.cap = new_cap;
            Controllers::<T>::insert(controller_id, controller);

            Self::deposit_event(Event::CapChanged {
                controller_id,
                who: who.clone(),
                old_cap,
                new_cap,
            });

            Ok(())
        })
    }

    #[require_transactional]
    pub(crate) fn do_set_controller(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        new_owner: AccountIdOf<T>,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let mut controller = Self::controller(controller_id)?;
            Self::ensure_owner(&controller, &who)?;

            controller.owner = new_owner.clone();
            Controllers::<T>::insert(controller_id, controller);

            Self::deposit_event(Event::ControllerChanged {
                controller_id,
                old_owner: who.clone(),
                new_owner: new_owner.clone(),
            });

            Ok(())
        })
    }

    #[require_transactional]
    pub(crate) fn do_whitelist_liquidity_provider(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        provider: AccountIdOf<T>,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            Self::ensure_owner(&controller, &who)?;
            ensure!(controller.rights.can_whitelist_lps, Error::<T>::WhitelistingNotAllowed);

            LiquidityProviders::<T>::insert(controller_id, &provider, ());

            Self::deposit_event(Event::LiquidityProviderWhitelisted {
                controller_id,
                provider: provider.clone(),
            });

            Ok(())
        })
    }

    #[require_transactional]
    pub(crate) fn do_remove_whitelisted_liquidity_provider(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        provider: AccountIdOf<T>,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            Self::ensure_owner(&controller, &who)?;
            ensure!(controller.rights.can_whitelist_lps, Error::<T>::WhitelistingNotAllowed);
            ensure!(
                LiquidityProviders::<T>::contains_key(controller_id, &provider),
                Error::<T>::ProviderNotWhitelisted
            );

            LiquidityProviders::<T>::remove(controller_id, &provider);

            Self::deposit_event(Event::LiquidityProviderRemoved {
                controller_id,
                provider: provider.clone(),
            });

            Ok(())
        })
    }
}
