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

use super::*;
use crate::mock::types::ReentrantPoke;
use sp_runtime::DispatchError;

fn reentrancy<R>() -> Result<R, DispatchError> {
    Err(Error::<Runtime>::Reentrancy.into())
}

#[test]
fn nested_call_into_same_controller_fails() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        ReentrantPoke::set(&Some(controller_id));
        assert_noop!(
            RightsPool::join_pool(
                RuntimeOrigin::signed(BOB),
                controller_id,
                10 * BASE,
                vec![100 * BASE, 100 * BASE],
            ),
            Error::<Runtime>::Reentrancy
        );
    });
}

#[test]
fn nested_call_into_other_controller_is_allowed() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        let other_id = create_active_pool_with_assets(Rights::default(), vec![ASSET_C, ASSET_D]);
        ReentrantPoke::set(&Some(other_id));
        assert_ok!(RightsPool::join_pool(
            RuntimeOrigin::signed(BOB),
            controller_id,
            10 * BASE,
            vec![100 * BASE, 100 * BASE],
        ));
    });
}

#[test]
fn calls_fail_while_lock_is_held() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::all());
        Locks::<Runtime>::insert(controller_id, true);
        assert_noop!(
            RightsPool::set_swap_fee(RuntimeOrigin::signed(ALICE), controller_id, 2 * CENT),
            Error::<Runtime>::Reentrancy
        );
        assert_noop!(
            RightsPool::poke_weights(RuntimeOrigin::signed(BOB), controller_id),
            Error::<Runtime>::Reentrancy
        );
        assert_noop!(
            RightsPool::exit_pool(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                10 * BASE,
                vec![0, 0]
            ),
            Error::<Runtime>::Reentrancy
        );
    });
}

#[test]
fn read_api_fails_while_lock_is_held() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        Locks::<Runtime>::insert(controller_id, true);
        assert_eq!(RightsPool::is_public_swap(controller_id), reentrancy());
        assert_eq!(RightsPool::denormalized_weight(controller_id, ASSET_A), reentrancy());
        assert_eq!(RightsPool::total_supply(controller_id), reentrancy());
        assert_eq!(RightsPool::can_provide_liquidity(controller_id, &BOB), reentrancy());
        assert_eq!(RightsPool::rights(controller_id), reentrancy());
        assert_eq!(RightsPool::cap(controller_id), reentrancy());
        assert_eq!(RightsPool::gradual_update(controller_id), reentrancy());
        assert_eq!(RightsPool::pending_token_add(controller_id), reentrancy());
    });
}

#[test]
fn lock_is_released_after_call() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert!(!Locks::<Runtime>::get(controller_id));
        assert_ok!(RightsPool::join_pool(
            RuntimeOrigin::signed(BOB),
            controller_id,
            10 * BASE,
            vec![100 * BASE, 100 * BASE],
        ));
        assert!(!Locks::<Runtime>::get(controller_id));
        assert!(!Locks::<Runtime>::contains_key(controller_id));
    });
}
