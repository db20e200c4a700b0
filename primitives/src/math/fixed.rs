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

//! Fixed point arithmetic with `BASE` as the unit. Results are rounded half up, which matches
//! the rounding of the weighted pool engines the controller talks to.

use crate::{
    constants::BASE,
    math::checked_ops_res::{CheckedAddRes, CheckedDivRes, CheckedMulRes},
};
use sp_runtime::DispatchError;

/// Fixed point multiplication `a * b / BASE`.
pub fn bmul(a: u128, b: u128) -> Result<u128, DispatchError> {
    let c0 = a.checked_mul_res(&b)?;
    let c1 = c0.checked_add_res(&(BASE / 2))?;
    c1.checked_div_res(&BASE)
}

/// Fixed point division `a * BASE / b`.
pub fn bdiv(a: u128, b: u128) -> Result<u128, DispatchError> {
    let c0 = a.checked_mul_res(&BASE)?;
    let c1 = c0.checked_add_res(&(b / 2))?;
    c1.checked_div_res(&b)
}
