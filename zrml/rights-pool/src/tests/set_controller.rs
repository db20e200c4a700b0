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
fn set_controller_works() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_ok!(RightsPool::set_controller(RuntimeOrigin::signed(ALICE), controller_id, BOB));
        System::assert_last_event(
            Event::ControllerChanged { controller_id, old_owner: ALICE, new_owner: BOB }.into(),
        );
        assert_eq!(Controllers::<Runtime>::get(controller_id).unwrap().owner, BOB);
        assert_noop!(
            RightsPool::set_swap_fee(RuntimeOrigin::signed(ALICE), controller_id, SWAP_FEE),
            Error::<Runtime>::NotOwner
        );
        assert_ok!(RightsPool::set_swap_fee(RuntimeOrigin::signed(BOB), controller_id, SWAP_FEE));
    });
}

#[test]
fn set_controller_works_before_pool_creation() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_controller(Rights::default());
        assert_ok!(RightsPool::set_controller(RuntimeOrigin::signed(ALICE), controller_id, BOB));
        assert_noop!(
            RightsPool::create_pool(RuntimeOrigin::signed(ALICE), controller_id, INITIAL_SUPPLY),
            Error::<Runtime>::NotOwner
        );
    });
}

#[test]
fn set_controller_fails_if_not_owner() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::set_controller(RuntimeOrigin::signed(BOB), controller_id, BOB),
            Error::<Runtime>::NotOwner
        );
    });
}
