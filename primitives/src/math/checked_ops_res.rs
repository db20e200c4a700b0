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

//! Checked arithmetic that reports failures as `DispatchError::Arithmetic`.

use sp_arithmetic::{
    traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub},
    ArithmeticError,
};
use sp_runtime::DispatchError;

macro_rules! impl_checked_op_res {
    ($res_trait:ident, $res_fn:ident, $op_trait:ident, $op_fn:ident, $error:ident) => {
        pub trait $res_trait
        where
            Self: Sized,
        {
            fn $res_fn(&self, other: &Self) -> Result<Self, DispatchError>;
        }

        impl<T> $res_trait for T
        where
            T: $op_trait,
        {
            #[inline]
            fn $res_fn(&self, other: &Self) -> Result<Self, DispatchError> {
                self.$op_fn(other).ok_or(DispatchError::Arithmetic(ArithmeticError::$error))
            }
        }
    };
}

impl_checked_op_res!(CheckedAddRes, checked_add_res, CheckedAdd, checked_add, Overflow);
impl_checked_op_res!(CheckedSubRes, checked_sub_res, CheckedSub, checked_sub, Underflow);
impl_checked_op_res!(CheckedMulRes, checked_mul_res, CheckedMul, checked_mul, Overflow);
impl_checked_op_res!(CheckedDivRes, checked_div_res, CheckedDiv, checked_div, DivisionByZero);
