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

#[test]
fn remove_token_works() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool_with_assets(Rights::default(), vec![ASSET_A, ASSET_B, ASSET_C]);
        assert_ok!(RightsPool::remove_token(RuntimeOrigin::signed(ALICE), controller_id, ASSET_C));
        System::assert_last_event(
            Event::TokenRemoved {
                controller_id,
                who: ALICE,
                asset: ASSET_C,
                balance: INITIAL_BALANCE,
                pool_shares_amount: 333_333_333_333,
            }
            .into(),
        );
        let pool_id = engine_pool_id(controller_id);
        assert!(!MockEngine::is_bound(pool_id, &ASSET_C));
        assert_eq!(MockEngine::current_assets(pool_id), Ok(vec![ASSET_A, ASSET_B]));
        assert_eq!(free_balance(ASSET_C, ALICE), INITIAL_AMOUNT);
        assert_eq!(free_balance(pool_shares(controller_id), ALICE), 666_666_666_667);
        assert_eq!(total_shares(controller_id), 666_666_666_667);
    });
}

#[test]
fn remove_token_fails_if_too_few_assets_remain() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::remove_token(RuntimeOrigin::signed(ALICE), controller_id, ASSET_A),
            Error::<Runtime>::TooFewAssets
        );
    });
}

#[test]
fn remove_token_fails_on_unbound_asset() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool_with_assets(Rights::default(), vec![ASSET_A, ASSET_B, ASSET_C]);
        assert_noop!(
            RightsPool::remove_token(RuntimeOrigin::signed(ALICE), controller_id, ASSET_D),
            Error::<Runtime>::AssetNotBound
        );
    });
}

#[test]
fn remove_token_fails_if_token_add_is_pending() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool_with_assets(Rights::default(), vec![ASSET_A, ASSET_B, ASSET_C]);
        assert_ok!(RightsPool::commit_add_token(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            ASSET_D,
            INITIAL_BALANCE,
            INITIAL_WEIGHT
        ));
        assert_noop!(
            RightsPool::remove_token(RuntimeOrigin::signed(ALICE), controller_id, ASSET_C),
            Error::<Runtime>::TokenAddPending
        );
    });
}

#[test]
fn remove_token_fails_during_gradual_update() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool_with_assets(Rights::default(), vec![ASSET_A, ASSET_B, ASSET_C]);
        assert_ok!(RightsPool::update_weights_gradually(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            vec![5 * BASE, 5 * BASE, 20 * BASE],
            10,
            110,
        ));
        assert_noop!(
            RightsPool::remove_token(RuntimeOrigin::signed(ALICE), controller_id, ASSET_C),
            Error::<Runtime>::GradualUpdateInProgress
        );
    });
}

#[test]
fn remove_token_fails_without_right() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool_with_assets(Rights::none(), vec![ASSET_A, ASSET_B, ASSET_C]);
        assert_noop!(
            RightsPool::remove_token(RuntimeOrigin::signed(ALICE), controller_id, ASSET_C),
            Error::<Runtime>::TokensNotAddableOrRemovable
        );
    });
}

#[test]
fn remove_token_fails_if_not_owner() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool_with_assets(Rights::default(), vec![ASSET_A, ASSET_B, ASSET_C]);
        assert_noop!(
            RightsPool::remove_token(RuntimeOrigin::signed(BOB), controller_id, ASSET_C),
            Error::<Runtime>::NotOwner
        );
    });
}
