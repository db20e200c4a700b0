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

use alloc::vec::Vec;
use core::fmt::Debug;
use parity_scale_codec::{Codec, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{DispatchError, DispatchResult};

/// A constant-weight automated market maker which holds the assets of a pool and prices swaps
/// against them.
///
/// Each pool has exactly one controller account, fixed on creation. Only the controller may
/// bind, rebind or unbind assets and change the pool's parameters. Balance increases requested
/// by the controller are pulled from the controller account, decreases are pushed back to it.
/// The engine never touches the pool share ledger; share supply is always passed in by the
/// caller.
pub trait WeightedPoolEngine {
    type AccountId;
    type Asset;
    type Balance;
    type PoolId: Clone + Codec + Copy + Debug + Eq + MaxEncodedLen + PartialEq + TypeInfo;

    /// Create an empty pool controlled by `controller` and return its id.
    fn create_pool(controller: &Self::AccountId) -> Result<Self::PoolId, DispatchError>;

    /// Return the fraction of pool shares the engine itself charges on exit. Controllers collect
    /// exit fees themselves and require this to be zero.
    fn exit_fee(pool_id: Self::PoolId) -> Result<Self::Balance, DispatchError>;

    /// Register `asset` with the pool and pull `balance` from the controller account.
    fn bind(
        pool_id: Self::PoolId,
        asset: Self::Asset,
        balance: Self::Balance,
        weight: Self::Balance,
    ) -> DispatchResult;

    /// Change the balance and weight of a bound asset. The difference between the old and new
    /// balance is pulled from or pushed to the controller account.
    fn rebind(
        pool_id: Self::PoolId,
        asset: Self::Asset,
        balance: Self::Balance,
        weight: Self::Balance,
    ) -> DispatchResult;

    /// Remove `asset` from the pool and push its entire balance to the controller account.
    fn unbind(pool_id: Self::PoolId, asset: Self::Asset) -> DispatchResult;

    fn is_bound(pool_id: Self::PoolId, asset: &Self::Asset) -> bool;

    /// Return the bound assets in binding order.
    fn current_assets(pool_id: Self::PoolId) -> Result<Vec<Self::Asset>, DispatchError>;

    fn balance(pool_id: Self::PoolId, asset: &Self::Asset) -> Result<Self::Balance, DispatchError>;

    fn denormalized_weight(
        pool_id: Self::PoolId,
        asset: &Self::Asset,
    ) -> Result<Self::Balance, DispatchError>;

    fn total_denormalized_weight(pool_id: Self::PoolId) -> Result<Self::Balance, DispatchError>;

    fn swap_fee(pool_id: Self::PoolId) -> Result<Self::Balance, DispatchError>;

    fn set_swap_fee(pool_id: Self::PoolId, swap_fee: Self::Balance) -> DispatchResult;

    fn is_public_swap(pool_id: Self::PoolId) -> Result<bool, DispatchError>;

    fn set_public_swap(pool_id: Self::PoolId, public_swap: bool) -> DispatchResult;

    /// Calculate the amount of pool shares issued for depositing `amount_in` of a single asset.
    ///
    /// # Arguments
    ///
    /// - `balance_in`: The pool's balance of the deposited asset.
    /// - `weight_in`: The denormalized weight of the deposited asset.
    /// - `pool_supply`: The total supply of pool shares.
    /// - `total_weight`: The sum of all denormalized weights.
    /// - `amount_in`: The amount deposited.
    /// - `swap_fee`: The swap fee charged on the part of the deposit that is swapped.
    fn calc_pool_out_given_single_in(
        balance_in: Self::Balance,
        weight_in: Self::Balance,
        pool_supply: Self::Balance,
        total_weight: Self::Balance,
        amount_in: Self::Balance,
        swap_fee: Self::Balance,
    ) -> Result<Self::Balance, DispatchError>;

    /// Calculate the amount of a single asset that must be deposited to receive `pool_amount_out`
    /// pool shares.
    fn calc_single_in_given_pool_out(
        balance_in: Self::Balance,
        weight_in: Self::Balance,
        pool_supply: Self::Balance,
        total_weight: Self::Balance,
        pool_amount_out: Self::Balance,
        swap_fee: Self::Balance,
    ) -> Result<Self::Balance, DispatchError>;

    /// Calculate the amount of a single asset received for redeeming `pool_amount_in` pool
    /// shares.
    fn calc_single_out_given_pool_in(
        balance_out: Self::Balance,
        weight_out: Self::Balance,
        pool_supply: Self::Balance,
        total_weight: Self::Balance,
        pool_amount_in: Self::Balance,
        swap_fee: Self::Balance,
    ) -> Result<Self::Balance, DispatchError>;

    /// Calculate the amount of pool shares that must be redeemed to receive `amount_out` of a
    /// single asset.
    fn calc_pool_in_given_single_out(
        balance_out: Self::Balance,
        weight_out: Self::Balance,
        pool_supply: Self::Balance,
        total_weight: Self::Balance,
        amount_out: Self::Balance,
        swap_fee: Self::Balance,
    ) -> Result<Self::Balance, DispatchError>;
}
