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

#[test]
fn joinswap_extern_amount_in_works() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        let amount_in = 100 * BASE;
        let expected_pool_amount_out = 49_500_000_000;
        assert_ok!(RightsPool::joinswap_extern_amount_in(
            RuntimeOrigin::signed(BOB),
            controller_id,
            ASSET_A,
            amount_in,
            expected_pool_amount_out,
        ));
        System::assert_last_event(
            Event::Joined { controller_id, who: BOB, asset: ASSET_A, amount_in }.into(),
        );
        assert_eq!(free_balance(ASSET_A, BOB), INITIAL_AMOUNT - amount_in);
        assert_eq!(free_balance(ASSET_B, BOB), INITIAL_AMOUNT);
        assert_eq!(engine_balance(controller_id, ASSET_A), 1_100 * BASE);
        assert_eq!(engine_balance(controller_id, ASSET_B), INITIAL_BALANCE);
        assert_eq!(free_balance(pool_shares(controller_id), BOB), expected_pool_amount_out);
        assert_eq!(total_shares(controller_id), INITIAL_SUPPLY + expected_pool_amount_out);
    });
}

#[test_case(ASSET_C, 100 * BASE, 0, Error::<Runtime>::AssetNotBound)]
#[test_case(ASSET_A, 500 * BASE + 1, 0, Error::<Runtime>::MaxInRatio)]
#[test_case(ASSET_A, 100 * BASE, 49_500_000_001, Error::<Runtime>::LimitOut)]
#[test_case(ASSET_A, 0, 0, Error::<Runtime>::MathApproximation)]
fn joinswap_extern_amount_in_fails(
    asset_in: CurrencyId,
    amount_in: Balance,
    min_pool_amount_out: Balance,
    error: Error<Runtime>,
) {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::joinswap_extern_amount_in(
                RuntimeOrigin::signed(BOB),
                controller_id,
                asset_in,
                amount_in,
                min_pool_amount_out,
            ),
            error
        );
    });
}

#[test]
fn joinswap_extern_amount_in_respects_cap() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool(Rights { can_change_cap: true, ..Default::default() });
        assert_ok!(RightsPool::set_cap(
            RuntimeOrigin::signed(ALICE),
            controller_id,
            INITIAL_SUPPLY + BASE
        ));
        assert_noop!(
            RightsPool::joinswap_extern_amount_in(
                RuntimeOrigin::signed(BOB),
                controller_id,
                ASSET_A,
                100 * BASE,
                0,
            ),
            Error::<Runtime>::CapLimitReached
        );
    });
}

#[test]
fn joinswap_extern_amount_in_fails_if_not_whitelisted() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool(Rights { can_whitelist_lps: true, ..Default::default() });
        assert_noop!(
            RightsPool::joinswap_extern_amount_in(
                RuntimeOrigin::signed(BOB),
                controller_id,
                ASSET_A,
                100 * BASE,
                0,
            ),
            Error::<Runtime>::NotOnWhitelist
        );
    });
}
