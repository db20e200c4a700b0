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

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// The privileged operations available to a controller's owner. Fixed when the controller is
/// constructed.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Rights {
    pub can_pause_swapping: bool,
    pub can_change_swap_fee: bool,
    pub can_change_weights: bool,
    pub can_add_remove_tokens: bool,
    pub can_whitelist_lps: bool,
    pub can_change_cap: bool,
}

impl Rights {
    /// All rights granted.
    pub fn all() -> Self {
        Rights {
            can_pause_swapping: true,
            can_change_swap_fee: true,
            can_change_weights: true,
            can_add_remove_tokens: true,
            can_whitelist_lps: true,
            can_change_cap: true,
        }
    }

    /// No rights granted. The pool behaves like a plain shared pool.
    pub fn none() -> Self {
        Rights {
            can_pause_swapping: false,
            can_change_swap_fee: false,
            can_change_weights: false,
            can_add_remove_tokens: false,
            can_whitelist_lps: false,
            can_change_cap: false,
        }
    }
}

impl Default for Rights {
    fn default() -> Self {
        Rights {
            can_pause_swapping: false,
            can_change_swap_fee: true,
            can_change_weights: true,
            can_add_remove_tokens: true,
            can_whitelist_lps: false,
            can_change_cap: false,
        }
    }
}
