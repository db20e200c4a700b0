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
fn set_public_swap_works() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id =
            create_active_pool(Rights { can_pause_swapping: true, ..Default::default() });
        assert_ok!(RightsPool::set_public_swap(RuntimeOrigin::signed(ALICE), controller_id, false));
        System::assert_last_event(
            Event::PublicSwapSet { controller_id, public_swap: false }.into(),
        );
        assert_eq!(RightsPool::is_public_swap(controller_id), Ok(false));
        assert_ok!(RightsPool::set_public_swap(RuntimeOrigin::signed(ALICE), controller_id, true));
        assert_eq!(RightsPool::is_public_swap(controller_id), Ok(true));
    });
}

#[test]
fn set_public_swap_fails_without_right() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::default());
        assert_noop!(
            RightsPool::set_public_swap(RuntimeOrigin::signed(ALICE), controller_id, false),
            Error::<Runtime>::SwappingNotPausable
        );
    });
}

#[test]
fn set_public_swap_fails_if_not_owner() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_active_pool(Rights::all());
        assert_noop!(
            RightsPool::set_public_swap(RuntimeOrigin::signed(BOB), controller_id, false),
            Error::<Runtime>::NotOwner
        );
    });
}

#[test]
fn set_public_swap_fails_before_pool_creation() {
    ExtBuilder::default().build().execute_with(|| {
        let controller_id = create_controller(Rights::all());
        assert_noop!(
            RightsPool::set_public_swap(RuntimeOrigin::signed(ALICE), controller_id, false),
            Error::<Runtime>::PoolNotCreated
        );
    });
}
