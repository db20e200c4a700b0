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
use more_asserts::assert_le;

#[test]
fn exitswap_extern_amount_out_works() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        let amount_out = 990_000_000_000;
        let expected_pool_amount_in = 50_000_000_000;
        let alice_before = free_balance(ASSET_B, ALICE);
        assert_ok!(RightsPool::exitswap_extern_amount_out(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            ASSET_B,
            amount_out,
            expected_pool_amount_in,
        ));
        System::assert_last_event(
            Event::Exited { controller_id, who: ALICE, asset: ASSET_B, amount_out }.into(),
        );
        assert_eq!(free_balance(ASSET_B, ALICE), alice_before + amount_out);
        assert_eq!(engine_balance(controller_id, ASSET_B), INITIAL_BALANCE - amount_out);
        assert_eq!(engine_balance(controller_id, ASSET_A), INITIAL_BALANCE);
        assert_eq!(
            free_balance(pool_shares(controller_id), ALICE),
            INITIAL_SUPPLY - expected_pool_amount_in
        );
        assert_le!(total_shares(controller_id), INITIAL_SUPPLY);
    });
}

#[test]
fn exitswap_extern_amount_out_fails_on_limit_in() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::exitswap_extern_amount_out(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                ASSET_B,
                990_000_000_000,
                49_999_999_999,
            ),
            Error::<Runtime>::LimitIn
        );
    });
}

#[test]
fn exitswap_extern_amount_out_fails_on_max_out_ratio() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::exitswap_extern_amount_out(
                RuntimeOrigin::signed(ALICE),
                controller_id,
                ASSET_B,
                3_333_333_334_001,
                Balance::MAX,
            ),
            Error::<Runtime>::MaxOutRatio
        );
    });
}

#[test]
fn exitswap_extern_amount_out_fails_if_caller_lacks_shares() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::exitswap_extern_amount_out(
                RuntimeOrigin::signed(BOB),
                controller_id,
                ASSET_B,
                990_000_000_000,
                Balance::MAX,
            ),
            orml_tokens::Error::<Runtime>::BalanceTooLow
        );
    });
}

#[test]
fn exitswap_extern_amount_out_fails_on_unknown_controller() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            RightsPool::exitswap_extern_amount_out(
                RuntimeOrigin::signed(ALICE),
                7,
                ASSET_B,
                BASE,
                Balance::MAX,
            ),
            Error::<Runtime>::ControllerNotFound
        );
    });
}
