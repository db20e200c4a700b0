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

use crate as zrml_rights_pool;
use crate::{
    mock::{
        consts::FEE_BENEFICIARY,
        types::{MockCurrencies, MockEngine},
    },
    weights::WeightInfo,
};
use frame_support::{construct_runtime, parameter_types, traits::Everything};
use frame_system::mocking::MockBlock;
use sp_runtime::traits::{BlakeTwo256, ConstU32, IdentityLookup};
use zeitgeist_primitives::{
    constants::mock::{
        BlockHashCount, DefaultAddTokenTimelock, DefaultMinWeightChangePeriod,
        ExistentialDeposits, MaxAssets, MaxInRatio, MaxLocks, MaxNameLength, MaxOutRatio,
        MaxPoolSupply, MaxReserves, MaxSwapFee, MaxTotalWeight, MaxWeight, MinAssets, MinBalance,
        MinPoolSupply, MinSwapFee, MinWeight, RightsPoolPalletId,
    },
    types::{AccountIdTest, Amount, Balance, CurrencyId, Hash},
};

construct_runtime! {
    pub enum Runtime {
        RightsPool: zrml_rights_pool,
        System: frame_system,
        Tokens: orml_tokens,
    }
}

parameter_types! {
    pub const FeeBeneficiary: AccountIdTest = FEE_BENEFICIARY;
    pub storage ExitFee: Balance = 0;
}

impl zrml_rights_pool::Config for Runtime {
    type DefaultAddTokenTimelock = DefaultAddTokenTimelock;
    type DefaultMinWeightChangePeriod = DefaultMinWeightChangePeriod;
    type Engine = MockEngine;
    type ExitFee = ExitFee;
    type FeeBeneficiary = FeeBeneficiary;
    type MaxAssets = MaxAssets;
    type MaxInRatio = MaxInRatio;
    type MaxNameLength = MaxNameLength;
    type MaxOutRatio = MaxOutRatio;
    type MaxPoolSupply = MaxPoolSupply;
    type MaxSwapFee = MaxSwapFee;
    type MaxTotalWeight = MaxTotalWeight;
    type MaxWeight = MaxWeight;
    type MinAssets = MinAssets;
    type MinBalance = MinBalance;
    type MinPoolSupply = MinPoolSupply;
    type MinSwapFee = MinSwapFee;
    type MinWeight = MinWeight;
    type MultiCurrency = MockCurrencies;
    type PalletId = RightsPoolPalletId;
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = WeightInfo<Runtime>;
}

impl frame_system::Config for Runtime {
    type AccountData = ();
    type AccountId = AccountIdTest;
    type BaseCallFilter = Everything;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type BlockLength = ();
    type BlockWeights = ();
    type RuntimeCall = RuntimeCall;
    type RuntimeTask = RuntimeTask;
    type DbWeight = ();
    type RuntimeEvent = RuntimeEvent;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Nonce = u64;
    type MaxConsumers = ConstU32<16>;
    type MultiBlockMigrator = ();
    type OnKilledAccount = ();
    type OnNewAccount = ();
    type RuntimeOrigin = RuntimeOrigin;
    type PalletInfo = PalletInfo;
    type PreInherents = ();
    type PostInherents = ();
    type PostTransactions = ();
    type SingleBlockMigrations = ();
    type SS58Prefix = ();
    type SystemWeightInfo = ();
    type Version = ();
    type OnSetCode = ();
}

impl orml_tokens::Config for Runtime {
    type Amount = Amount;
    type Balance = Balance;
    type CurrencyId = CurrencyId;
    type DustRemovalWhitelist = Everything;
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposits = ExistentialDeposits;
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type CurrencyHooks = ();
    type ReserveIdentifier = [u8; 8];
    type WeightInfo = ();
}
