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

use sp_runtime::DispatchError;
use zeitgeist_primitives::math::{
    checked_ops_res::{CheckedAddRes, CheckedDivRes, CheckedMulRes, CheckedSubRes},
    fixed::{bdiv, bmul},
};

/// Fraction of the pool bought by `pool_amount_out` shares. The supply is reduced by one unit so
/// that rounding favors the pool.
pub(crate) fn join_ratio(pool_amount_out: u128, total_supply: u128) -> Result<u128, DispatchError> {
    bdiv(pool_amount_out, total_supply.checked_sub_res(&1)?)
}

pub(crate) fn join_amount_in(ratio: u128, balance: u128) -> Result<u128, DispatchError> {
    bmul(ratio, balance.checked_add_res(&1)?)
}

pub(crate) fn exit_ratio(net_pool_amount_in: u128, total_supply: u128) -> Result<u128, DispatchError> {
    bdiv(net_pool_amount_in, total_supply.checked_add_res(&1)?)
}

pub(crate) fn exit_amount_out(ratio: u128, balance: u128) -> Result<u128, DispatchError> {
    bmul(ratio, balance.checked_sub_res(&1)?)
}

/// Scale `value` by `numerator / denominator`, rounding the ratio first.
pub(crate) fn scale_by_ratio(
    value: u128,
    numerator: u128,
    denominator: u128,
) -> Result<u128, DispatchError> {
    bmul(value, bdiv(numerator, denominator)?)
}

/// Pool shares matching a bound asset of weight `weight`, rounding the product first.
pub(crate) fn shares_for_weight(
    total_supply: u128,
    weight: u128,
    total_weight: u128,
) -> Result<u128, DispatchError> {
    bdiv(bmul(total_supply, weight)?, total_weight)
}

/// Weight at `elapsed` blocks into a linear transition of `period` blocks. Reaches `end_weight`
/// exactly once `elapsed == period`.
pub(crate) fn interpolate_weight(
    start_weight: u128,
    end_weight: u128,
    elapsed: u128,
    period: u128,
) -> Result<u128, DispatchError> {
    if start_weight <= end_weight {
        let delta = end_weight.checked_sub_res(&start_weight)?;
        start_weight.checked_add_res(&delta.checked_mul_res(&elapsed)?.checked_div_res(&period)?)
    } else {
        let delta = start_weight.checked_sub_res(&end_weight)?;
        start_weight.checked_sub_res(&delta.checked_mul_res(&elapsed)?.checked_div_res(&period)?)
    }
}
