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

//! Weights for zrml_rights_pool. These are conservative reference values; runtimes should
//! generate their own from the benchmarks in `benchmarking.rs` and set them as
//! `Config::WeightInfo`.

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

pub trait WeightInfoZeitgeist {
    fn create_controller(a: u32) -> Weight;
    fn create_pool(a: u32) -> Weight;
    fn set_swap_fee() -> Weight;
    fn set_public_swap() -> Weight;
    fn set_cap() -> Weight;
    fn set_controller() -> Weight;
    fn update_weight() -> Weight;
    fn update_weights_gradually(a: u32) -> Weight;
    fn poke_weights(a: u32) -> Weight;
    fn commit_add_token() -> Weight;
    fn apply_add_token() -> Weight;
    fn remove_token() -> Weight;
    fn join_pool(a: u32) -> Weight;
    fn exit_pool(a: u32) -> Weight;
    fn joinswap_extern_amount_in() -> Weight;
    fn joinswap_pool_amount_out() -> Weight;
    fn exitswap_pool_amount_in() -> Weight;
    fn exitswap_extern_amount_out() -> Weight;
    fn whitelist_liquidity_provider() -> Weight;
    fn remove_whitelisted_liquidity_provider() -> Weight;
}

pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    fn create_controller(a: u32) -> Weight {
        Weight::from_parts(30_000_000, 3593)
            .saturating_add(Weight::from_parts(12_000_000, 2609).saturating_mul(a.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn create_pool(a: u32) -> Weight {
        Weight::from_parts(60_000_000, 3593)
            .saturating_add(Weight::from_parts(40_000_000, 2609).saturating_mul(a.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().reads((4_u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().writes(5))
            .saturating_add(T::DbWeight::get().writes((4_u64).saturating_mul(a.into())))
    }
    fn set_swap_fee() -> Weight {
        Weight::from_parts(20_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn set_public_swap() -> Weight {
        Weight::from_parts(20_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn set_cap() -> Weight {
        Weight::from_parts(18_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn set_controller() -> Weight {
        Weight::from_parts(18_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn update_weight() -> Weight {
        Weight::from_parts(110_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(12))
            .saturating_add(T::DbWeight::get().writes(10))
    }
    fn update_weights_gradually(a: u32) -> Weight {
        Weight::from_parts(30_000_000, 3593)
            .saturating_add(Weight::from_parts(6_000_000, 2609).saturating_mul(a.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn poke_weights(a: u32) -> Weight {
        Weight::from_parts(30_000_000, 3593)
            .saturating_add(Weight::from_parts(14_000_000, 2609).saturating_mul(a.into()))
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().writes(3))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(a.into())))
    }
    fn commit_add_token() -> Weight {
        Weight::from_parts(45_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn apply_add_token() -> Weight {
        Weight::from_parts(100_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(12))
            .saturating_add(T::DbWeight::get().writes(10))
    }
    fn remove_token() -> Weight {
        Weight::from_parts(100_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(12))
            .saturating_add(T::DbWeight::get().writes(10))
    }
    fn join_pool(a: u32) -> Weight {
        Weight::from_parts(70_000_000, 3593)
            .saturating_add(Weight::from_parts(45_000_000, 2609).saturating_mul(a.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().reads((4_u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().writes(5))
            .saturating_add(T::DbWeight::get().writes((4_u64).saturating_mul(a.into())))
    }
    fn exit_pool(a: u32) -> Weight {
        Weight::from_parts(75_000_000, 3593)
            .saturating_add(Weight::from_parts(45_000_000, 2609).saturating_mul(a.into()))
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().reads((4_u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().writes(6))
            .saturating_add(T::DbWeight::get().writes((4_u64).saturating_mul(a.into())))
    }
    fn joinswap_extern_amount_in() -> Weight {
        Weight::from_parts(90_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(12))
            .saturating_add(T::DbWeight::get().writes(8))
    }
    fn joinswap_pool_amount_out() -> Weight {
        Weight::from_parts(90_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(12))
            .saturating_add(T::DbWeight::get().writes(8))
    }
    fn exitswap_pool_amount_in() -> Weight {
        Weight::from_parts(95_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(13))
            .saturating_add(T::DbWeight::get().writes(9))
    }
    fn exitswap_extern_amount_out() -> Weight {
        Weight::from_parts(95_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(13))
            .saturating_add(T::DbWeight::get().writes(9))
    }
    fn whitelist_liquidity_provider() -> Weight {
        Weight::from_parts(16_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn remove_whitelisted_liquidity_provider() -> Weight {
        Weight::from_parts(16_000_000, 3593)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
}
