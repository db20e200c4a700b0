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

//! A storage-backed stand-in for a weighted pool engine. Assets are really moved between the
//! controller account and the pool account, but swaps are priced linearly in the asset's
//! normalized weight.

use crate::mock::{
    consts::CHARLIE,
    runtime::{RightsPool, RuntimeOrigin, Tokens},
};
use alloc::{vec, vec::Vec};
use frame_support::{pallet_prelude::ValueQuery, parameter_types, PalletId, Twox64Concat};
use orml_traits::MultiCurrency;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_runtime::{traits::AccountIdConversion, DispatchError, DispatchResult};
use zeitgeist_primitives::{
    constants::{mock::MaxTotalWeight, BASE},
    math::{
        checked_ops_res::{CheckedAddRes, CheckedSubRes},
        fixed::{bdiv, bmul},
    },
    traits::WeightedPoolEngine,
    types::{AccountIdTest, Balance, ControllerId, CurrencyId},
};

const MOCK_ENGINE_PALLET_ID: PalletId = PalletId(*b"zge/wpen");

parameter_types! {
    /// Exit fee reported by every mock pool.
    pub storage MockEngineExitFee: Balance = 0;
    /// If set, every rebind calls back into `poke_weights` of this controller.
    pub storage ReentrantPoke: Option<ControllerId> = None;
    /// Number of rebinds the engine has executed.
    pub storage MockRebindCount: u32 = 0;
}

#[derive(Clone, Debug, Decode, Encode, Eq, PartialEq, TypeInfo)]
pub struct MockRecord {
    pub asset: CurrencyId,
    pub balance: Balance,
    pub weight: Balance,
}

#[derive(Clone, Debug, Decode, Encode, Eq, PartialEq, TypeInfo)]
pub struct MockPool {
    pub controller: AccountIdTest,
    pub records: Vec<MockRecord>,
    pub swap_fee: Balance,
    pub public_swap: bool,
}

#[frame_support::storage_alias]
pub type MockPools = StorageMap<MockEngineStorage, Twox64Concat, u128, MockPool>;

#[frame_support::storage_alias]
pub type MockPoolCount = StorageValue<MockEngineStorage, u128, ValueQuery>;

pub struct MockEngine;

impl MockEngine {
    pub fn pool_account(pool_id: u128) -> AccountIdTest {
        MOCK_ENGINE_PALLET_ID.into_sub_account_truncating(pool_id)
    }

    pub fn pool(pool_id: u128) -> Result<MockPool, DispatchError> {
        MockPools::get(pool_id).ok_or(DispatchError::Other("MockEngine: unknown pool"))
    }

    fn record(pool_id: u128, asset: &CurrencyId) -> Result<MockRecord, DispatchError> {
        Self::pool(pool_id)?
            .records
            .into_iter()
            .find(|r| r.asset == *asset)
            .ok_or(DispatchError::Other("MockEngine: asset not bound"))
    }

    fn transfer(
        asset: CurrencyId,
        from: &AccountIdTest,
        to: &AccountIdTest,
        amount: Balance,
    ) -> DispatchResult {
        <Tokens as MultiCurrency<AccountIdTest>>::transfer(asset, from, to, amount)
    }

    fn mutate_pool<F>(pool_id: u128, f: F) -> DispatchResult
    where
        F: FnOnce(&mut MockPool) -> DispatchResult,
    {
        let mut pool = Self::pool(pool_id)?;
        f(&mut pool)?;
        MockPools::insert(pool_id, pool);
        Ok(())
    }

    /// Like a real engine, reject any binding that pushes the total weight above the maximum.
    fn ensure_total_weight(pool: &MockPool) -> DispatchResult {
        let total_weight =
            pool.records.iter().try_fold(0u128, |acc, r| acc.checked_add_res(&r.weight))?;
        if total_weight > MaxTotalWeight::get() {
            return Err(DispatchError::Other("MockEngine: max total weight exceeded"));
        }
        Ok(())
    }
}

impl WeightedPoolEngine for MockEngine {
    type AccountId = AccountIdTest;
    type Asset = CurrencyId;
    type Balance = Balance;
    type PoolId = u128;

    fn create_pool(controller: &AccountIdTest) -> Result<u128, DispatchError> {
        let pool_id = MockPoolCount::get();
        MockPools::insert(
            pool_id,
            MockPool { controller: *controller, records: vec![], swap_fee: 0, public_swap: false },
        );
        MockPoolCount::put(pool_id.checked_add_res(&1)?);
        Ok(pool_id)
    }

    fn exit_fee(pool_id: u128) -> Result<Balance, DispatchError> {
        Self::pool(pool_id)?;
        Ok(MockEngineExitFee::get())
    }

    fn bind(pool_id: u128, asset: CurrencyId, balance: Balance, weight: Balance) -> DispatchResult {
        Self::mutate_pool(pool_id, |pool| {
            if pool.records.iter().any(|r| r.asset == asset) {
                return Err(DispatchError::Other("MockEngine: asset already bound"));
            }
            Self::transfer(asset, &pool.controller, &Self::pool_account(pool_id), balance)?;
            pool.records.push(MockRecord { asset, balance, weight });
            Self::ensure_total_weight(pool)
        })
    }

    fn rebind(
        pool_id: u128,
        asset: CurrencyId,
        balance: Balance,
        weight: Balance,
    ) -> DispatchResult {
        if let Some(controller_id) = ReentrantPoke::get() {
            RightsPool::poke_weights(RuntimeOrigin::signed(CHARLIE), controller_id)?;
        }
        Self::mutate_pool(pool_id, |pool| {
            let pool_account = Self::pool_account(pool_id);
            let controller = pool.controller;
            let record = pool
                .records
                .iter_mut()
                .find(|r| r.asset == asset)
                .ok_or(DispatchError::Other("MockEngine: asset not bound"))?;
            if balance > record.balance {
                Self::transfer(asset, &controller, &pool_account, balance - record.balance)?;
            } else if balance < record.balance {
                Self::transfer(asset, &pool_account, &controller, record.balance - balance)?;
            }
            record.balance = balance;
            record.weight = weight;
            Self::ensure_total_weight(pool)?;
            MockRebindCount::set(&MockRebindCount::get().saturating_add(1));
            Ok(())
        })
    }

    fn unbind(pool_id: u128, asset: CurrencyId) -> DispatchResult {
        Self::mutate_pool(pool_id, |pool| {
            let index = pool
                .records
                .iter()
                .position(|r| r.asset == asset)
                .ok_or(DispatchError::Other("MockEngine: asset not bound"))?;
            let record = pool.records.remove(index);
            Self::transfer(asset, &Self::pool_account(pool_id), &pool.controller, record.balance)
        })
    }

    fn is_bound(pool_id: u128, asset: &CurrencyId) -> bool {
        Self::record(pool_id, asset).is_ok()
    }

    fn current_assets(pool_id: u128) -> Result<Vec<CurrencyId>, DispatchError> {
        Ok(Self::pool(pool_id)?.records.into_iter().map(|r| r.asset).collect())
    }

    fn balance(pool_id: u128, asset: &CurrencyId) -> Result<Balance, DispatchError> {
        Ok(Self::record(pool_id, asset)?.balance)
    }

    fn denormalized_weight(pool_id: u128, asset: &CurrencyId) -> Result<Balance, DispatchError> {
        Ok(Self::record(pool_id, asset)?.weight)
    }

    fn total_denormalized_weight(pool_id: u128) -> Result<Balance, DispatchError> {
        Self::pool(pool_id)?.records.iter().try_fold(0u128, |acc, r| acc.checked_add_res(&r.weight))
    }

    fn swap_fee(pool_id: u128) -> Result<Balance, DispatchError> {
        Ok(Self::pool(pool_id)?.swap_fee)
    }

    fn set_swap_fee(pool_id: u128, swap_fee: Balance) -> DispatchResult {
        Self::mutate_pool(pool_id, |pool| {
            pool.swap_fee = swap_fee;
            Ok(())
        })
    }

    fn is_public_swap(pool_id: u128) -> Result<bool, DispatchError> {
        Ok(Self::pool(pool_id)?.public_swap)
    }

    fn set_public_swap(pool_id: u128, public_swap: bool) -> DispatchResult {
        Self::mutate_pool(pool_id, |pool| {
            pool.public_swap = public_swap;
            Ok(())
        })
    }

    fn calc_pool_out_given_single_in(
        balance_in: Balance,
        weight_in: Balance,
        pool_supply: Balance,
        total_weight: Balance,
        amount_in: Balance,
        swap_fee: Balance,
    ) -> Result<Balance, DispatchError> {
        let net_amount_in = amount_in.checked_sub_res(&bmul(amount_in, swap_fee)?)?;
        let normalized_weight = bdiv(weight_in, total_weight)?;
        bmul(pool_supply, bmul(bdiv(net_amount_in, balance_in)?, normalized_weight)?)
    }

    fn calc_single_in_given_pool_out(
        balance_in: Balance,
        weight_in: Balance,
        pool_supply: Balance,
        total_weight: Balance,
        pool_amount_out: Balance,
        swap_fee: Balance,
    ) -> Result<Balance, DispatchError> {
        let normalized_weight = bdiv(weight_in, total_weight)?;
        let ratio = bdiv(pool_amount_out, pool_supply)?;
        let net_amount_in = bdiv(bmul(balance_in, ratio)?, normalized_weight)?;
        bdiv(net_amount_in, BASE.checked_sub_res(&swap_fee)?)
    }

    fn calc_single_out_given_pool_in(
        balance_out: Balance,
        weight_out: Balance,
        pool_supply: Balance,
        total_weight: Balance,
        pool_amount_in: Balance,
        swap_fee: Balance,
    ) -> Result<Balance, DispatchError> {
        let normalized_weight = bdiv(weight_out, total_weight)?;
        let ratio = bdiv(pool_amount_in, pool_supply)?;
        let gross_amount_out = bdiv(bmul(balance_out, ratio)?, normalized_weight)?;
        gross_amount_out.checked_sub_res(&bmul(gross_amount_out, swap_fee)?)
    }

    fn calc_pool_in_given_single_out(
        balance_out: Balance,
        weight_out: Balance,
        pool_supply: Balance,
        total_weight: Balance,
        amount_out: Balance,
        swap_fee: Balance,
    ) -> Result<Balance, DispatchError> {
        let normalized_weight = bdiv(weight_out, total_weight)?;
        let net_pool_amount_in =
            bmul(pool_supply, bmul(bdiv(amount_out, balance_out)?, normalized_weight)?)?;
        bdiv(net_pool_amount_in, BASE.checked_sub_res(&swap_fee)?)
    }
}
