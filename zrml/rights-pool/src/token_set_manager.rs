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
    math::shares_for_weight,
    traits::ShareLedger,
    types::{Controller, PendingTokenAdd},
    AccountIdOf, Config, Error, Event, GradualUpdates, Pallet, PendingTokenAdds, LOG_TARGET,
};
use frame_support::{ensure, require_transactional, traits::Get};
use orml_traits::MultiCurrency;
use sp_runtime::{DispatchError, DispatchResult, SaturatedConversion, Saturating};
use zeitgeist_primitives::{
    math::checked_ops_res::CheckedAddRes,
    traits::WeightedPoolEngine,
    types::{Balance, ControllerId, CurrencyId},
};

impl<T: Config> Pallet<T> {
    fn ensure_token_set_changeable(
        controller_id: ControllerId,
        who: &AccountIdOf<T>,
    ) -> Result<Controller<T>, DispatchError> {
        let controller = Self::controller(controller_id)?;
        Self::ensure_owner(&controller, who)?;
        ensure!(controller.rights.can_add_remove_tokens, Error::<T>::TokensNotAddableOrRemovable);
        ensure!(
            !GradualUpdates::<T>::contains_key(controller_id),
            Error::<T>::GradualUpdateInProgress
        );
        Ok(controller)
    }

    /// Record a token addition. Overwrites any addition which is already pending.
    #[require_transactional]
    pub(crate) fn do_commit_add_token(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        asset: CurrencyId,
        balance: Balance,
        weight: Balance,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::ensure_token_set_changeable(controller_id, &who)?;
            let pool_id = controller.pool_id()?;
            ensure!(!T::Engine::is_bound(pool_id, &asset), Error::<T>::AssetAlreadyBound);
            let asset_count: u32 = T::Engine::current_assets(pool_id)?.len().saturated_into();
            ensure!(asset_count < T::MaxAssets::get(), Error::<T>::TooManyAssets);
            Self::ensure_weight_in_bounds(weight)?;
            let total_weight = T::Engine::total_denormalized_weight(pool_id)?;
            ensure!(
                total_weight.checked_add_res(&weight)? <= T::MaxTotalWeight::get(),
                Error::<T>::MaxTotalWeight
            );
            ensure!(balance >= T::MinBalance::get(), Error::<T>::BalanceBelowMin);
            Self::verify_asset_compliance(controller_id, &controller.owner, asset)?;

            let commit_block = frame_system::Pallet::<T>::block_number();
            PendingTokenAdds::<T>::insert(
                controller_id,
                PendingTokenAdd { asset, balance, weight, commit_block },
            );

            Self::deposit_event(Event::NewTokenCommitted { asset, controller_id, who: who.clone() });

            Ok(())
        })
    }

    /// Bind the pending asset and mint pool shares in proportion to its share of the total
    /// weight.
    #[require_transactional]
    pub(crate) fn do_apply_add_token(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::ensure_token_set_changeable(controller_id, &who)?;
            let pool_id = controller.pool_id()?;
            let PendingTokenAdd { asset, balance, weight, commit_block } =
                PendingTokenAdds::<T>::get(controller_id).ok_or(Error::<T>::NoPendingTokenAdd)?;
            let now = frame_system::Pallet::<T>::block_number();
            ensure!(
                now.saturating_sub(commit_block) >= controller.add_token_timelock,
                Error::<T>::TimelockStillCounting
            );
            ensure!(!T::Engine::is_bound(pool_id, &asset), Error::<T>::AssetAlreadyBound);
            let asset_count: u32 = T::Engine::current_assets(pool_id)?.len().saturated_into();
            ensure!(asset_count < T::MaxAssets::get(), Error::<T>::TooManyAssets);

            let total_supply = Self::total_shares(controller_id);
            let total_weight = T::Engine::total_denormalized_weight(pool_id)?;
            ensure!(
                total_weight.checked_add_res(&weight)? <= T::MaxTotalWeight::get(),
                Error::<T>::MaxTotalWeight
            );
            let pool_shares_amount = shares_for_weight(total_supply, weight, total_weight)?;

            PendingTokenAdds::<T>::remove(controller_id);
            T::MultiCurrency::transfer(
                asset,
                &controller.owner,
                &Self::controller_account(controller_id),
                balance,
            )?;
            T::Engine::bind(pool_id, asset, balance, weight)?;
            Self::mint_shares(controller_id, pool_shares_amount)?;
            Self::push_shares(controller_id, &who, pool_shares_amount)?;
            log::debug!(target: LOG_TARGET, "Bound {:?} to controller {}", asset, controller_id);

            Self::deposit_event(Event::TokenAdded {
                controller_id,
                who: who.clone(),
                asset,
                balance,
                weight,
                pool_shares_amount,
            });

            Ok(())
        })
    }

    /// Unbind `asset`, pay its entire balance out to the owner and burn the owner's pool shares
    /// in proportion to the asset's share of the total weight.
    #[require_transactional]
    pub(crate) fn do_remove_token(
        who: AccountIdOf<T>,
        controller_id: ControllerId,
        asset: CurrencyId,
    ) -> DispatchResult {
        Self::with_guard(controller_id, || {
            let controller = Self::ensure_token_set_changeable(controller_id, &who)?;
            let pool_id = controller.pool_id()?;
            ensure!(
                !PendingTokenAdds::<T>::contains_key(controller_id),
                Error::<T>::TokenAddPending
            );
            ensure!(T::Engine::is_bound(pool_id, &asset), Error::<T>::AssetNotBound);
            let asset_count: u32 = T::Engine::current_assets(pool_id)?.len().saturated_into();
            ensure!(asset_count > T::MinAssets::get(), Error::<T>::TooFewAssets);

            let total_supply = Self::total_shares(controller_id);
            let weight = T::Engine::denormalized_weight(pool_id, &asset)?;
            let total_weight = T::Engine::total_denormalized_weight(pool_id)?;
            let pool_shares_amount = shares_for_weight(total_supply, weight, total_weight)?;
            let balance = T::Engine::balance(pool_id, &asset)?;

            T::Engine::unbind(pool_id, asset)?;
            T::MultiCurrency::transfer(
                asset,
                &Self::controller_account(controller_id),
                &controller.owner,
                balance,
            )?;
            Self::pull_shares(controller_id, &controller.owner, pool_shares_amount)?;
            Self::burn_shares(controller_id, pool_shares_amount)?;
            log::debug!(target: LOG_TARGET, "Unbound {:?} from controller {}", asset, controller_id);

            Self::deposit_event(Event::TokenRemoved {
                controller_id,
                who: who.clone(),
                asset,
                balance,
                pool_shares_amount,
            });

            Ok(())
        })
    }
}
