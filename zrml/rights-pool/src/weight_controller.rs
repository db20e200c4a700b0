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
    math::{interpolate_weight, scale_by_ratio},
    traits::ShareLedger,
    types::GradualUpdate,
    AccountIdOf, Config, Error, Event, GradualUpdates, Pallet, PendingTokenAdds, LOG_TARGET,
};
use alloc::vec::Vec;
use core::cmp;
use frame_support::{ensure, require_transactional, traits::Get, BoundedVec};
use frame_system::pallet_prelude::BlockNumberFor;
use orml_traits::MultiCurrency;
use sp_runtime::{DispatchResult, SaturatedConversion, Saturating};
use zeitgeist_primitives::{
    math::checked_ops_res::{CheckedAddRes, CheckedSubRes},
    traits::WeightedPoolEngine,
    types::{Balance, ControllerId, CurrencyId},
};

impl<T: Config> Pallet<T> {
    #[require_transactional]
    pub(crate) fn do_update_weight(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        asset: CurrencyId,
        new_weight: Balance,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            Self::ensure_owner(&controller, &who)?;
            ensure!(controller.rights.can_change_weights, Error::<T>::WeightsNotConfigurable);
            let pool_id = controller.pool_id()?;
            ensure!(
                !GradualUpdates::<T>::contains_key(controller_id),
                Error::<T>::GradualUpdateInProgress
            );
            Self::ensure_weight_in_bounds(new_weight)?;
            ensure!(T::Engine::is_bound(pool_id, &asset), Error::<T>::AssetNotBound);

            let current_weight = T::Engine::denormalized_weight(pool_id, &asset)?;
            if new_weight == current_weight {
                return Ok(());
            }
            let current_balance = T::Engine::balance(pool_id, &asset)?;
            let total_supply = Self::total_shares(controller_id);
            let total_weight = T::Engine::total_denormalized_weight(pool_id)?;
            let controller_account = Self::controller_account(controller_id);

            let pool_shares_amount = if new_weight < current_weight {
                let delta_weight = current_weight.checked_sub_res(&new_weight)?;
                let pool_shares_amount = scale_by_ratio(total_supply, delta_weight, total_weight)?;
                let balance_out = scale_by_ratio(current_balance, delta_weight, current_weight)?;
                let new_balance = current_balance.checked_sub_res(&balance_out)?;
                ensure!(new_balance >= T::MinBalance::get(), Error::<T>::BalanceBelowMin);

                T::Engine::rebind(pool_id, asset, new_balance, new_weight)?;
                T::MultiCurrency::transfer(asset, &controller_account, &who, balance_out)?;
                Self::pull_shares(controller_id, &who, pool_shares_amount)?;
                Self::burn_shares(controller_id, pool_shares_amount)?;

                pool_shares_amount
            } else {
                let delta_weight = new_weight.checked_sub_res(&current_weight)?;
                ensure!(
                    total_weight.checked_add_res(&delta_weight)? <= T::MaxTotalWeight::get(),
                    Error::<T>::MaxTotalWeight
                );
                let pool_shares_amount = scale_by_ratio(total_supply, delta_weight, total_weight)?;
                let balance_in = scale_by_ratio(current_balance, delta_weight, current_weight)?;

                T::MultiCurrency::transfer(asset, &who, &controller_account, balance_in)?;
                T::Engine::rebind(
                    pool_id,
                    asset,
                    current_balance.checked_add_res(&balance_in)?,
                    new_weight,
                )?;
                Self::mint_shares(controller_id, pool_shares_amount)?;
                Self::push_shares(controller_id, &who, pool_shares_amount)?;

                pool_shares_amount
            };

            Self::deposit_event(Event::WeightUpdated {
                controller_id,
                who: who.clone(),
                asset,
                old_weight: current_weight,
                new_weight,
                pool_shares_amount,
            });

            Ok(())
        })
    }

    #[require_transactional]
    pub(crate) fn do_update_weights_gradually(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        new_weights: Vec<Balance>,
        start_block: BlockNumberFor<T>,
        end_block: BlockNumberFor<T>,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            Self::ensure_owner(&controller, &who)?;
            ensure!(controller.rights.can_change_weights, Error::<T>::WeightsNotConfigurable);
            let pool_id = controller.pool_id()?;
            ensure!(
                !PendingTokenAdds::<T>::contains_key(controller_id),
                Error::<T>::TokenAddPending
            );

            let now = frame_system::Pallet::<T>::block_number();
            ensure!(end_block > now, Error::<T>::GradualUpdateTimeTravel);
            let start_block = cmp::max(start_block, now);
            ensure!(
                end_block > start_block
                    && end_block.saturating_sub(start_block) >= controller.min_weight_change_period,
                Error::<T>::WeightChangePeriodBelowMin
            );

            let assets = T::Engine::current_assets(pool_id)?;
            ensure!(new_weights.len() == assets.len(), Error::<T>::LengthMismatch);
            let mut total_weight: Balance = 0;
            let mut start_weights = Vec::with_capacity(assets.len());
            for (asset, &weight) in assets.iter().zip(new_weights.iter()) {
                Self::ensure_weight_in_bounds(weight)?;
                total_weight = total_weight.checked_add_res(&weight)?;
                start_weights.push(T::Engine::denormalized_weight(pool_id, asset)?);
            }
            ensure!(total_weight <= T::MaxTotalWeight::get(), Error::<T>::MaxTotalWeight);

            let start_weights: BoundedVec<_, T::MaxAssets> =
                start_weights.try_into().map_err(|_| Error::<T>::AssetLimitAboveMax)?;
            let end_weights: BoundedVec<_, T::MaxAssets> =
                new_weights.clone().try_into().map_err(|_| Error::<T>::AssetLimitAboveMax)?;
            // Overwrites the update in progress, if any.
            GradualUpdates::<T>::insert(
                controller_id,
                GradualUpdate { start_block, end_block, start_weights, end_weights },
            );

            Self::deposit_event(Event::GradualUpdateScheduled {
                controller_id,
                start_block,
                end_block,
                end_weights: new_weights.clone(),
            });

            Ok(())
        })
    }

    /// Move every weight to its interpolated value for the current block. Does nothing if no
    /// gradual update is stored or if it hasn't started yet.
    #[require_transactional]
    pub(crate) fn do_poke_weights(controller_id: ControllerId) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::controller(controller_id)?;
            ensure!(controller.rights.can_change_weights, Error::<T>::WeightsNotConfigurable);
            let pool_id = controller.pool_id()?;
            let Some(update) = GradualUpdates::<T>::get(controller_id) else {
                return Ok(());
            };
            let now = frame_system::Pallet::<T>::block_number();
            if now < update.start_block {
                log::warn!(
                    target: LOG_TARGET,
                    "Poke ignored, gradual update of controller {} starts at {:?}",
                    controller_id,
                    update.start_block,
                );
                return Ok(());
            }

            let elapsed: u128 =
                cmp::min(now, update.end_block).saturating_sub(update.start_block).saturated_into();
            let period: u128 = update.end_block.saturating_sub(update.start_block).saturated_into();
            let assets = T::Engine::current_assets(pool_id)?;
            let mut weights = Vec::with_capacity(assets.len());
            let mut decreasing = Vec::new();
            let mut increasing = Vec::new();
            for ((asset, &start_weight), &end_weight) in
                assets.into_iter().zip(update.start_weights.iter()).zip(update.end_weights.iter())
            {
                let weight = interpolate_weight(start_weight, end_weight, elapsed, period)?;
                weights.push(weight);
                if end_weight < start_weight {
                    decreasing.push((asset, weight));
                } else if end_weight > start_weight {
                    increasing.push((asset, weight));
                }
            }
            // Lower weights before raising others so that the engine's total weight never
            // exceeds the larger of the start and end totals.
            for (asset, weight) in decreasing.into_iter().chain(increasing) {
                let balance = T::Engine::balance(pool_id, &asset)?;
                T::Engine::rebind(pool_id, asset, balance, weight)?;
            }

            let completed = now >= update.end_block;
            if completed {
                GradualUpdates::<T>::remove(controller_id);
                log::debug!(
                    target: LOG_TARGET,
                    "Gradual update of controller {} completed",
                    controller_id
                );
            }

            Self::deposit_event(Event::WeightsPoked { controller_id, weights, completed });

            Ok(())
        })
    }
}
