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
use crate::mock::runtime::ExitFee;

#[test]
fn exit_pool_works() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_ok!(RightsPool::exit_pool(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            10 * BASE,
            vec![100 * BASE, 100 * BASE],
        ));
        System::assert_has_event(
            Event::Exited { controller_id, who: ALICE, asset: ASSET_A, amount_out: 100 * BASE }
                .into(),
        );
        System::assert_last_event(
            Event::Exited { controller_id, who: ALICE, asset: ASSET_B, amount_out: 100 * BASE }
                .into(),
        );
        for asset in [ASSET_A, ASSET_B] {
            assert_eq!(free_balance(asset, ALICE), INITIAL_AMOUNT - 900 * BASE);
            assert_eq!(engine_balance(controller_id, asset), 900 * BASE);
        }
        assert_eq!(free_balance(pool_shares(controller_id), ALICE), 90 * BASE);
        assert_eq!(total_shares(controller_id), 90 * BASE);
        assert_eq!(RightsPool::is_public_swap(controller_id), Ok(true));
    });
}

#[test]
fn exit_pool_charges_exit_fee() {
    ExtBuilder::default().build().execute_with(|| {
        ExitFee::set(&CENT);
        let controller_id = create_active_pool(Rights::default());
        assert_ok!(RightsPool::exit_pool(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            10 * BASE,
            vec![0, 0],
        ));
        assert_eq!(free_balance(pool_shares(controller_id), FEE_BENEFICIARY), BASE / 10);
        assert_eq!(free_balance(pool_shares(controller_id), ALICE), 90 * BASE);
        assert_eq!(total_shares(controller_id), 90 * BASE + BASE / 10);
        for asset in [ASSET_A, ASSET_B] {
            assert_eq!(engine_balance(controller_id, asset), 901 * BASE);
            assert_eq!(free_balance(asset, ALICE), INITIAL_AMOUNT - 901 * BASE);
        }
    });
}

#[test]
fn exit_pool_fails_on_limit_out() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::exit_pool(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                10 * BASE,
                vec![100 * BASE, 100 * BASE + 1],
            ),
            Error::<Runtime>::LimitOut
        );
    });
}

#[test]
fn exit_pool_fails_on_length_mismatch() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::exit_pool(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                10 * BASE,
                vec![0, 0, 0],
            ),
            Error::<Runtime>::LengthMismatch
        );
    });
}

#[test]
fn exit_pool_fails_on_zero_amount() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::exit_pool(RuntimeOrigin::signed(ALICE), controller_id, 0, vec![0, 0]),
            Error::<Runtime>::MathApproximation
        );
    });
}

#[test]
fn exit_pool_fails_if_engine_charges_exit_fee() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        MockEngineExitFee::set(&1);
        assert_noop!(
            RightsPool::exit_pool(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                10 * BASE,
                vec![0, 0],
            ),
            Error::<Runtime>::NonZeroEngineExitFee
        );
    });
}

#[test]
fn exit_pool_fails_if_caller_lacks_shares() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::exit_pool(RuntimeOrigin::signed(BOB), controller_id, 10 * BASE, vec![0, 0]),
            orml_tokens::Error::<Runtime>::BalanceTooLow
        );
    });
}

#[test]
fn exit_pool_is_not_subject_to_whitelist() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool(Rights { can_whitelist_lps: true, ..Default::default() });
        assert_ok!(RightsPool::exit_pool(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            10 * BASE,
            vec![0, 0],
        ));
    });
}
