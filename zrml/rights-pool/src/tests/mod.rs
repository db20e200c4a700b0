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

#![cfg(all(feature = "mock", test))]

mod exit_pool;
mod exitswap_extern_amount_out;
mod guard;
mod joinswap_extern_amount_in;
mod remove_token;
mod set_controller;
mod set_public_swap;
mod update_weight;

use crate::{
    mock::{
        consts::*,
        ext_builder::ExtBuilder,
        runtime::{RightsPool, Runtime, RuntimeOrigin, System, Tokens},
        types::{MockEngine, MockEngineExitFee, MockPools, MockRebindCount, NonTransferableAsset},
        utility::run_to_block,
    },
    types::{PoolLifecycle, Rights},
    Controllers, Error, Event, GradualUpdates, Locks, PendingTokenAdds,
};
use frame_support::{assert_noop, assert_ok};
use orml_traits::MultiCurrency;
use zeitgeist_primitives::{
    constants::{BASE, CENT},
    traits::WeightedPoolEngine,
    types::{AccountIdTest, Asset, Balance, ControllerId, CurrencyId},
};

const SWAP_FEE: Balance = CENT;
const INITIAL_BALANCE: Balance = 1_000 * BASE;
const INITIAL_WEIGHT: Balance = 10 * BASE;
const INITIAL_SUPPLY: Balance = 100 * BASE;

fn free_balance(asset: CurrencyId, who: AccountIdTest) -> Balance {
    <Tokens as MultiCurrency<AccountIdTest>>::free_balance(asset, &who)
}

fn pool_shares(controller_id: ControllerId) -> CurrencyId {
    Asset::PoolShare(controller_id)
}

fn total_shares(controller_id: ControllerId) -> Balance {
    <Tokens as MultiCurrency<AccountIdTest>>::total_issuance(pool_shares(controller_id))
}

/// Construct a controller owned by `ALICE` with `assets`, each with the initial balance and
/// weight.
fn create_controller_with_assets(rights: Rights, assets: Vec<CurrencyId>) -> ControllerId {
    let controller_id = crate::NextControllerId::<Runtime>::get();
    let count = assets.len();
    assert_ok!(RightsPool::create_controller(
        RuntimeOrigin::signed(ALICE),
        b"RPT".to_vec(),
        b"Rights Pool Token".to_vec(),
        assets,
        vec![INITIAL_BALANCE; count],
        vec![INITIAL_WEIGHT; count],
        SWAP_FEE,
        rights,
    ));
    controller_id
}

fn create_controller(rights: Rights) -> ControllerId {
    create_controller_with_assets(rights, vec![ASSET_A, ASSET_B])
}

fn create_active_pool_with_assets(rights: Rights, assets: Vec<CurrencyId>) -> ControllerId {
    let controller_id = create_controller_with_assets(rights, assets);
    assert_ok!(RightsPool::create_pool(
        RuntimeOrigin::signed(ALICE),
        controller_id,
        INITIAL_SUPPLY
    ));
    controller_id
}

fn create_active_pool(rights: Rights) -> ControllerId {
    create_active_pool_with_assets(rights, vec![ASSET_A, ASSET_B])
}

fn engine_pool_id(controller_id: ControllerId) -> u128 {
    match Controllers::<Runtime>::get(controller_id).unwrap().lifecycle {
        PoolLifecycle::Active(pool_id) => pool_id,
        PoolLifecycle::Uninitialized(_) => panic!("pool not created"),
    }
}

fn engine_balance(controller_id: ControllerId, asset: CurrencyId) -> Balance {
    MockEngine::balance(engine_pool_id(controller_id), &asset).unwrap()
}

fn engine_weight(controller_id: ControllerId, asset: CurrencyId) -> Balance {
    MockEngine::denormalized_weight(engine_pool_id(controller_id), &asset).unwrap()
}
