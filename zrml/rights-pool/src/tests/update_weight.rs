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
use test_case::test_case;
use zeitgeist_primitives::constants::{MAX_WEIGHT, MIN_BALANCE, MIN_WEIGHT};

#[test]
fn update_weight_increase_pulls_balance_and_mints_shares() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_ok!(RightsPool::update_weight(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            ASSET_A,
            15 * BASE
        ));
        System::assert_last_event(
            Event::WeightUpdated {
                controller_id,
                who: ALICE,
                asset: ASSET_A,
                old_weight: INITIAL_WEIGHT,
                new_weight: 15 * BASE,
                pool_shares_amount: 25 * BASE,
            }
            .into(),
        );
        assert_eq!(engine_weight(controller_id, ASSET_A), 15 * BASE);
        assert_eq!(engine_balance(controller_id, ASSET_A), 1_500 * BASE);
        assert_eq!(engine_balance(controller_id, ASSET_B), INITIAL_BALANCE);
        assert_eq!(free_balance(ASSET_A, ALICE), INITIAL_AMOUNT - 1_500 * BASE);
        assert_eq!(free_balance(pool_shares(controller_id), ALICE), 125 * BASE);
        assert_eq!(total_shares(controller_id), 125 * BASE);
    });
}

#[test]
fn update_weight_decrease_pushes_balance_and_burns_shares() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_ok!(RightsPool::update_weight(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            ASSET_A,
            5 * BASE
        ));
        System::assert_last_event(
            Event::WeightUpdated {
                controller_id,
                who: ALICE,
                asset: ASSET_A,
                old_weight: INITIAL_WEIGHT,
                new_weight: 5 * BASE,
                pool_shares_amount: 25 * BASE,
            }
            .into(),
        );
        assert_eq!(engine_weight(controller_id, ASSET_A), 5 * BASE);
        assert_eq!(engine_balance(controller_id, ASSET_A), 500 * BASE);
        assert_eq!(free_balance(ASSET_A, ALICE), INITIAL_AMOUNT - 500 * BASE);
        assert_eq!(free_balance(pool_shares(controller_id), ALICE), 75 * BASE);
        assert_eq!(total_shares(controller_id), 75 * BASE);
        // The controller account doesn't keep any leftovers.
        let controller_account = crate::Pallet::<Runtime>::controller_account(controller_id);
        assert_eq!(free_balance(ASSET_A, controller_account), 0);
        assert_eq!(free_balance(pool_shares(controller_id), controller_account), 0);
    });
}

#[test]
fn update_weight_is_noop_if_weight_is_unchanged() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        System::reset_events();
        assert_ok!(RightsPool::update_weight(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            ASSET_A,
            INITIAL_WEIGHT
        ));
        assert!(System::events().is_empty());
        assert_eq!(engine_balance(controller_id, ASSET_A), INITIAL_BALANCE);
        assert_eq!(total_shares(controller_id), INITIAL_SUPPLY);
    });
}

#[test]
fn update_weight_fails_if_total_weight_is_too_large() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::update_weight(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                ASSET_A,
                41 * BASE
            ),
            Error::<Runtime>::MaxTotalWeight
        );
    });
}

#[test]
fn update_weight_fails_if_balance_would_drop_below_min() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(RightsPool::create_controller(
            RuntimeOrigin::signed(ALICE),
            b"RPT".to_vec(),
            b"Rights Pool Token".to_vec(),
            vec![ASSET_A, ASSET_B],
            vec![2 * MIN_BALANCE, INITIAL_BALANCE],
            vec![INITIAL_WEIGHT; 2],
            SWAP_FEE,
            Rights::default(),
        ));
        assert_ok!(RightsPool::create_pool(RuntimeOrigin::signed(ALICE), 0, INITIAL_SUPPLY));
        assert_noop!(
            RightsPool::update_weight(RuntimeOrigin::signed(ALICE), 0, ASSET_A, MIN_WEIGHT),
            Error::<Runtime>::BalanceBelowMin
        );
    });
}

#[test_case(MIN_WEIGHT - 1, Error::<Runtime>::WeightBelowMin)]
#[test_case(MAX_WEIGHT + 1, Error::<Runtime>::WeightAboveMax)]
fn update_weight_fails_on_invalid_weight(new_weight: Balance, error: Error<Runtime>) {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::update_weight(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                ASSET_A,
                new_weight
            ),
            error
        );
    });
}

#[test]
fn update_weight_fails_on_unbound_asset() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::update_weight(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                ASSET_C,
                INITIAL_WEIGHT
            ),
            Error::<Runtime>::AssetNotBound
        );
    });
}

#[test]
fn update_weight_fails_without_right() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::none());
        assert_noop!(
            RightsPool::update_weight(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                ASSET_A,
                5 * BASE
            ),
            Error::<Runtime>::WeightsNotConfigurable
        );
    });
}

#[test]
fn update_weight_fails_if_not_owner() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::update_weight(RuntimeOrigin::signed(BOB), controller_id, ASSET_A, 5 * BASE),
            Error::<Runtime>::NotOwner
        );
    });
}

#[test]
fn update_weight_fails_during_gradual_update() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_ok!(RightsPool::update_weights_gradually(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            vec![20 * BASE, 5 * BASE],
            10,
            110,
        ));
        assert_noop!(
            RightsPool::update_weight(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                ASSET_A,
                5 * BASE
            ),
            Error::<Runtime>::GradualUpdateInProgress
        );
    });
}

#[test]
fn update_weight_fails_if_owner_lacks_shares() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_ok!(<Tokens as MultiCurrency<AccountIdTest>>::transfer(
            pool_shares(controller_id),
            &ALICE,
            &BOB,
            80 * BASE
        ));
        assert_noop!(
            RightsPool::update_weight(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                ASSET_A,
                5 * BASE
            ),
            orml_tokens::Error::<Runtime>::BalanceTooLow
        );
    });
}
