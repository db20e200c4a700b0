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

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use crate::{types::Rights, Pallet as RightsPool};
use alloc::{vec, vec::Vec};
use frame_benchmarking::v2::*;
use frame_support::{assert_ok, traits::Get};
use frame_system::{pallet_prelude::BlockNumberFor, Pallet as System, RawOrigin};
use orml_traits::MultiCurrency;
use zeitgeist_primitives::{
    constants::BASE,
    types::{Asset, Balance, ControllerId, CurrencyId},
};

const INITIAL_AMOUNT: Balance = 1_000_000 * BASE;
const INITIAL_BALANCE: Balance = 1_000 * BASE;

fn asset(index: u32) -> CurrencyId {
    Asset::ForeignAsset(index)
}

fn assets(asset_count: u32) -> Vec<CurrencyId> {
    (0..asset_count).map(asset).collect()
}

/// Fund `who` with the first `asset_count` assets plus one spare asset for token additions.
fn fund<T: Config>(who: &T::AccountId, asset_count: u32) {
    for index in 0..=asset_count {
        assert_ok!(T::MultiCurrency::deposit(asset(index), who, INITIAL_AMOUNT));
    }
}

fn create_staged_controller<T: Config>(
    owner: T::AccountId,
    asset_count: u32,
    rights: Rights,
) -> ControllerId {
    fund::<T>(&owner, asset_count);
    let controller_id = NextControllerId::<T>::get();
    let count = asset_count as usize;
    assert_ok!(RightsPool::<T>::create_controller(
        RawOrigin::Signed(owner).into(),
        b"RPT".to_vec(),
        b"Rights Pool Token".to_vec(),
        assets(asset_count),
        vec![INITIAL_BALANCE; count],
        vec![T::MinWeight::get(); count],
        T::MinSwapFee::get(),
        rights,
    ));
    controller_id
}

fn create_active_pool<T: Config>(
    owner: T::AccountId,
    asset_count: u32,
    rights: Rights,
) -> ControllerId {
    let controller_id = create_staged_controller::<T>(owner.clone(), asset_count, rights);
    assert_ok!(RightsPool::<T>::create_pool(
        RawOrigin::Signed(owner).into(),
        controller_id,
        T::MinPoolSupply::get(),
    ));
    controller_id
}

/// Create a pool with every right granted, lift its cap and whitelist `provider`, so that joins
/// take the longest path.
fn create_open_pool<T: Config>(
    owner: T::AccountId,
    provider: &T::AccountId,
    asset_count: u32,
) -> ControllerId {
    let controller_id = create_active_pool::<T>(owner.clone(), asset_count, Rights::all());
    assert_ok!(RightsPool::<T>::set_cap(
        RawOrigin::Signed(owner.clone()).into(),
        controller_id,
        T::MaxPoolSupply::get(),
    ));
    assert_ok!(RightsPool::<T>::whitelist_liquidity_provider(
        RawOrigin::Signed(owner).into(),
        controller_id,
        provider.clone(),
    ));
    fund::<T>(provider, asset_count);
    controller_id
}

fn min_weight_change_period<T: Config>() -> BlockNumberFor<T> {
    T::DefaultMinWeightChangePeriod::get()
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_controller(n: Linear<2, 8>) {
        let alice: T::AccountId = whitelisted_caller();
        fund::<T>(&alice, n);
        let count = n as usize;

        #[extrinsic_call]
        _(
            RawOrigin::Signed(alice),
            b"RPT".to_vec(),
            b"Rights Pool Token".to_vec(),
            assets(n),
            vec![INITIAL_BALANCE; count],
            vec![T::MinWeight::get(); count],
            T::MinSwapFee::get(),
            Rights::all(),
        );
    }

    #[benchmark]
    fn create_pool(n: Linear<2, 8>) {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_staged_controller::<T>(alice.clone(), n, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, T::MinPoolSupply::get());

        assert!(Controllers::<T>::get(controller_id).is_some_and(|c| c.pool_id().is_ok()));
    }

    #[benchmark]
    fn set_swap_fee() {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, T::MaxSwapFee::get());
    }

    #[benchmark]
    fn set_public_swap() {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, false);
    }

    #[benchmark]
    fn set_cap() {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, T::MaxPoolSupply::get());
    }

    #[benchmark]
    fn set_controller() {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, bob);
    }

    // Raising a weight is heavier than lowering it: the balance is pulled in before rebinding.
    #[benchmark]
    fn update_weight() {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());
        let new_weight = T::MinWeight::get().saturating_mul(2);

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, asset(0), new_weight);
    }

    #[benchmark]
    fn update_weights_gradually(n: Linear<2, 8>) {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), n, Rights::all());
        let new_weights = vec![T::MinWeight::get().saturating_mul(2); n as usize];
        let start_block = System::<T>::block_number();
        let end_block = start_block + min_weight_change_period::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, new_weights, start_block, end_block);

        assert!(GradualUpdates::<T>::contains_key(controller_id));
    }

    // Every asset changes its weight, so every asset is rebound.
    #[benchmark]
    fn poke_weights(n: Linear<2, 8>) {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), n, Rights::all());
        let new_weights = vec![T::MinWeight::get().saturating_mul(2); n as usize];
        let start_block = System::<T>::block_number();
        let period = min_weight_change_period::<T>();
        assert_ok!(RightsPool::<T>::update_weights_gradually(
            RawOrigin::Signed(alice.clone()).into(),
            controller_id,
            new_weights,
            start_block,
            start_block + period,
        ));
        System::<T>::set_block_number(start_block + period / 2u32.into());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id);
    }

    #[benchmark]
    fn commit_add_token() {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, asset(2), INITIAL_BALANCE, T::MinWeight::get());

        assert!(PendingTokenAdds::<T>::contains_key(controller_id));
    }

    #[benchmark]
    fn apply_add_token() {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());
        assert_ok!(RightsPool::<T>::commit_add_token(
            RawOrigin::Signed(alice.clone()).into(),
            controller_id,
            asset(2),
            INITIAL_BALANCE,
            T::MinWeight::get(),
        ));
        let now = System::<T>::block_number();
        System::<T>::set_block_number(now + T::DefaultAddTokenTimelock::get());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id);

        assert!(!PendingTokenAdds::<T>::contains_key(controller_id));
    }

    #[benchmark]
    fn remove_token() {
        let alice: T::AccountId = whitelisted_caller();
        let asset_count = T::MinAssets::get().saturating_add(1);
        let controller_id = create_active_pool::<T>(alice.clone(), asset_count, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, asset(0));
    }

    #[benchmark]
    fn join_pool(n: Linear<2, 8>) {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let controller_id = create_open_pool::<T>(alice, &bob, n);

        #[extrinsic_call]
        _(RawOrigin::Signed(bob), controller_id, BASE, vec![Balance::MAX; n as usize]);
    }

    #[benchmark]
    fn exit_pool(n: Linear<2, 8>) {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), n, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, BASE, vec![0; n as usize]);
    }

    #[benchmark]
    fn joinswap_extern_amount_in() {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let controller_id = create_open_pool::<T>(alice, &bob, 2);

        #[extrinsic_call]
        _(RawOrigin::Signed(bob), controller_id, asset(0), 10 * BASE, 0);
    }

    #[benchmark]
    fn joinswap_pool_amount_out() {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let controller_id = create_open_pool::<T>(alice, &bob, 2);

        #[extrinsic_call]
        _(RawOrigin::Signed(bob), controller_id, asset(0), BASE, Balance::MAX);
    }

    #[benchmark]
    fn exitswap_pool_amount_in() {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, asset(0), BASE, 0);
    }

    #[benchmark]
    fn exitswap_extern_amount_out() {
        let alice: T::AccountId = whitelisted_caller();
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, asset(0), 10 * BASE, Balance::MAX);
    }

    #[benchmark]
    fn whitelist_liquidity_provider() {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, bob.clone());

        assert!(LiquidityProviders::<T>::contains_key(controller_id, bob));
    }

    #[benchmark]
    fn remove_whitelisted_liquidity_provider() {
        let alice: T::AccountId = whitelisted_caller();
        let bob: T::AccountId = account("bob", 0, 0);
        let controller_id = create_active_pool::<T>(alice.clone(), 2, Rights::all());
        assert_ok!(RightsPool::<T>::whitelist_liquidity_provider(
            RawOrigin::Signed(alice.clone()).into(),
            controller_id,
            bob.clone(),
        ));

        #[extrinsic_call]
        _(RawOrigin::Signed(alice), controller_id, bob.clone());

        assert!(!LiquidityProviders::<T>::contains_key(controller_id, bob));
    }

    impl_benchmark_test_suite!(
        RightsPool,
        crate::mock::ExtBuilder::default().build(),
        crate::mock::Runtime
    );
}
