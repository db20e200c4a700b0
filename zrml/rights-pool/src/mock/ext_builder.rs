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

use crate::mock::{
    consts::{ALICE, BOB, CHARLIE, FUNDED_ASSETS, INITIAL_AMOUNT},
    runtime::{Runtime, System},
};
use alloc::{vec, vec::Vec};
use sp_runtime::BuildStorage;
use zeitgeist_primitives::types::{AccountIdTest, Asset, Balance, CurrencyId};

pub struct ExtBuilder {
    balances: Vec<(AccountIdTest, CurrencyId, Balance)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        let mut balances = vec![];
        for who in [ALICE, BOB, CHARLIE] {
            for index in 0..FUNDED_ASSETS {
                balances.push((who, Asset::ForeignAsset(index), INITIAL_AMOUNT));
            }
        }
        Self { balances }
    }
}

impl ExtBuilder {
    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        orml_tokens::GenesisConfig::<Runtime> { balances: self.balances }
            .assimilate_storage(&mut t)
            .unwrap();

        let mut test_ext: sp_io::TestExternalities = t.into();

        test_ext.execute_with(|| System::set_block_number(1));

        test_ext
    }
}
