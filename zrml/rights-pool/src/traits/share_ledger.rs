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

use crate::{AccountIdOf, Config};
use sp_runtime::DispatchResult;
use zeitgeist_primitives::types::{Balance, ControllerId};

/// Accounting of a controller's pool shares.
///
/// Shares are minted to and burned from the controller account. `push_shares` and
/// `pull_shares` move them between the controller account and other accounts.
pub(crate) trait ShareLedger<T: Config> {
    fn total_shares(controller_id: ControllerId) -> Balance;

    /// Mint `amount` shares to the controller account. Fails with `CapLimitReached` if the total
    /// supply would exceed the controller's cap.
    fn mint_shares(controller_id: ControllerId, amount: Balance) -> DispatchResult;

    /// Burn `amount` shares held by the controller account.
    fn burn_shares(controller_id: ControllerId, amount: Balance) -> DispatchResult;

    fn push_shares(
        controller_id: ControllerId,
        to: &AccountIdOf<T>,
        amount: Balance,
    ) -> DispatchResult;

    fn pull_shares(
        controller_id: ControllerId,
        from: &AccountIdOf<T>,
        amount: Balance,
    ) -> DispatchResult;
}
