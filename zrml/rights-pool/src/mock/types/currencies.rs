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

//! Wraps `Tokens` so that transfers of a configurable asset fail, like a token which rejects
//! zero-value transfers.

use crate::mock::runtime::Tokens;
use frame_support::parameter_types;
use orml_traits::MultiCurrency;
use sp_runtime::{DispatchError, DispatchResult};
use zeitgeist_primitives::types::{AccountIdTest, Balance, CurrencyId};

parameter_types! {
    /// If set, every transfer of this asset fails.
    pub storage NonTransferableAsset: Option<CurrencyId> = None;
}

pub struct MockCurrencies;

impl MultiCurrency<AccountIdTest> for MockCurrencies {
    type CurrencyId = CurrencyId;
    type Balance = Balance;

    fn minimum_balance(currency_id: Self::CurrencyId) -> Self::Balance {
        <Tokens as MultiCurrency<AccountIdTest>>::minimum_balance(currency_id)
    }

    fn total_issuance(currency_id: Self::CurrencyId) -> Self::Balance {
        <Tokens as MultiCurrency<AccountIdTest>>::total_issuance(currency_id)
    }

    fn total_balance(currency_id: Self::CurrencyId, who: &AccountIdTest) -> Self::Balance {
        <Tokens as MultiCurrency<AccountIdTest>>::total_balance(currency_id, who)
    }

    fn free_balance(currency_id: Self::CurrencyId, who: &AccountIdTest) -> Self::Balance {
        <Tokens as MultiCurrency<AccountIdTest>>::free_balance(currency_id, who)
    }

    fn ensure_can_withdraw(
        currency_id: Self::CurrencyId,
        who: &AccountIdTest,
        amount: Self::Balance,
    ) -> DispatchResult {
        <Tokens as MultiCurrency<AccountIdTest>>::ensure_can_withdraw(currency_id, who, amount)
    }

    fn transfer(
        currency_id: Self::CurrencyId,
        from: &AccountIdTest,
        to: &AccountIdTest,
        amount: Self::Balance,
    ) -> DispatchResult {
        if NonTransferableAsset::get() == Some(currency_id) {
            return Err(DispatchError::Other("MockCurrencies: asset is not transferable"));
        }
        <Tokens as MultiCurrency<AccountIdTest>>::transfer(currency_id, from, to, amount)
    }

    fn deposit(
        currency_id: Self::CurrencyId,
        who: &AccountIdTest,
        amount: Self::Balance,
    ) -> DispatchResult {
        <Tokens as MultiCurrency<AccountIdTest>>::deposit(currency_id, who, amount)
    }

    fn withdraw(
        currency_id: Self::CurrencyId,
        who: &AccountIdTest,
        amount: Self::Balance,
    ) -> DispatchResult {
        <Tokens as MultiCurrency<AccountIdTest>>::withdraw(currency_id, who, amount)
    }

    fn can_slash(currency_id: Self::CurrencyId, who: &AccountIdTest, value: Self::Balance) -> bool {
        <Tokens as MultiCurrency<AccountIdTest>>::can_slash(currency_id, who, value)
    }

    fn slash(
        currency_id: Self::CurrencyId,
        who: &AccountIdTest,
        amount: Self::Balance,
    ) -> Self::Balance {
        <Tokens as MultiCurrency<AccountIdTest>>::slash(currency_id, who, amount)
    }
}
