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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod benchmarking;
mod guard;
mod liquidity_gateway;
mod math;
pub mod mock;
mod pallet_impls;
mod pool_lifecycle;
mod share_ledger;
mod tests;
mod token_set_manager;
mod traits;
pub mod types;
mod weight_controller;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        traits::ShareLedger,
        types::{Controller, GradualUpdate, PendingTokenAdd, Rights},
        weights::WeightInfoZeitgeist,
    };
    use alloc::vec::Vec;
    use core::marker::PhantomData;
    use frame_support::{
        pallet_prelude::{OptionQuery, StorageDoubleMap, StorageMap, StorageValue, ValueQuery},
        traits::{Get, IsType, StorageVersion},
        transactional, Blake2_128Concat, PalletId, Twox64Concat,
    };
    use frame_system::{
        ensure_signed,
        pallet_prelude::{BlockNumberFor, OriginFor},
    };
    use orml_traits::MultiCurrency;
    use sp_runtime::{DispatchError, DispatchResult};
    use zeitgeist_primitives::{
        traits::WeightedPoolEngine,
        types::{Balance, ControllerId, CurrencyId},
    };

    pub(crate) const LOG_TARGET: &str = "runtime::zrml-rights-pool";
    pub(crate) const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type EnginePoolIdOf<T> = <<T as Config>::Engine as WeightedPoolEngine>::PoolId;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Number of blocks that must pass between committing and applying a token addition,
        /// unless overridden on pool creation.
        #[pallet::constant]
        type DefaultAddTokenTimelock: Get<BlockNumberFor<Self>>;

        /// Minimum length of a gradual weight update, unless overridden on pool creation.
        #[pallet::constant]
        type DefaultMinWeightChangePeriod: Get<BlockNumberFor<Self>>;

        /// The weighted pool engine which holds the pooled assets.
        type Engine: WeightedPoolEngine<
                AccountId = Self::AccountId,
                Asset = CurrencyId,
                Balance = Balance,
            >;

        /// Fraction of redeemed pool shares which is routed to `FeeBeneficiary` on exit.
        #[pallet::constant]
        type ExitFee: Get<Balance>;

        /// Receives the exit fees of all controllers.
        type FeeBeneficiary: Get<Self::AccountId>;

        #[pallet::constant]
        type MaxAssets: Get<u32>;

        /// Maximum fraction of an asset's pool balance that may be deposited in one single asset
        /// join.
        #[pallet::constant]
        type MaxInRatio: Get<Balance>;

        /// Maximum length of a pool share's symbol and name.
        #[pallet::constant]
        type MaxNameLength: Get<u32>;

        /// Maximum fraction of an asset's pool balance that may be withdrawn in one single asset
        /// exit.
        #[pallet::constant]
        type MaxOutRatio: Get<Balance>;

        #[pallet::constant]
        type MaxPoolSupply: Get<Balance>;

        #[pallet::constant]
        type MaxSwapFee: Get<Balance>;

        #[pallet::constant]
        type MaxTotalWeight: Get<Balance>;

        #[pallet::constant]
        type MaxWeight: Get<Balance>;

        #[pallet::constant]
        type MinAssets: Get<u32>;

        #[pallet::constant]
        type MinBalance: Get<Balance>;

        #[pallet::constant]
        type MinPoolSupply: Get<Balance>;

        #[pallet::constant]
        type MinSwapFee: Get<Balance>;

        #[pallet::constant]
        type MinWeight: Get<Balance>;

        /// Ledger of the pooled assets and of the pool shares.
        type MultiCurrency: MultiCurrency<Self::AccountId, CurrencyId = CurrencyId, Balance = Balance>;

        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type WeightInfo: WeightInfoZeitgeist;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    #[pallet::storage]
    pub type NextControllerId<T: Config> = StorageValue<_, ControllerId, ValueQuery>;

    #[pallet::storage]
    pub type Controllers<T: Config> =
        StorageMap<_, Twox64Concat, ControllerId, Controller<T>, OptionQuery>;

    /// Reentrancy latch of each controller. Set for the duration of a state-mutating call.
    #[pallet::storage]
    pub(crate) type Locks<T: Config> = StorageMap<_, Twox64Concat, ControllerId, bool, ValueQuery>;

    /// The gradual weight update in progress, if any.
    #[pallet::storage]
    pub type GradualUpdates<T: Config> =
        StorageMap<_, Twox64Concat, ControllerId, GradualUpdate<T>, OptionQuery>;

    /// The token addition waiting for its timelock, if any.
    #[pallet::storage]
    pub type PendingTokenAdds<T: Config> =
        StorageMap<_, Twox64Concat, ControllerId, PendingTokenAdd<T>, OptionQuery>;

    #[pallet::storage]
    pub type LiquidityProviders<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        ControllerId,
        Blake2_128Concat,
        AccountIdOf<T>,
        (),
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// A controller was constructed. Its pool has not been created yet.
        ControllerCreated { controller_id: ControllerId, owner: AccountIdOf<T>, rights: Rights },
        /// The initial assets were bound to a new engine pool and the initial supply was minted.
        PoolCreated {
            controller_id: ControllerId,
            who: AccountIdOf<T>,
            pool_id: EnginePoolIdOf<T>,
            initial_supply: Balance,
        },
        SwapFeeSet { controller_id: ControllerId, swap_fee: Balance },
        PublicSwapSet { controller_id: ControllerId, public_swap: bool },
        CapChanged {
            controller_id: ControllerId,
            who: AccountIdOf<T>,
            old_cap: Balance,
            new_cap: Balance,
        },
        ControllerChanged {
            controller_id: ControllerId,
            old_owner: AccountIdOf<T>,
            new_owner: AccountIdOf<T>,
        },
        /// The weight of `asset` was changed immediately. `pool_shares_amount` were minted to or
        /// burned from `who`.
        WeightUpdated {
            controller_id: ControllerId,
            who: AccountIdOf<T>,
            asset: CurrencyId,
            old_weight: Balance,
            new_weight: Balance,
            pool_shares_amount: Balance,
        },
        GradualUpdateScheduled {
            controller_id: ControllerId,
            start_block: BlockNumberFor<T>,
            end_block: BlockNumberFor<T>,
            end_weights: Vec<Balance>,
        },
        /// Weights were moved along the gradual update. `completed` is set if the update has
        /// reached its end and was cleared.
        WeightsPoked { controller_id: ControllerId, weights: Vec<Balance>, completed: bool },
        NewTokenCommitted { asset: CurrencyId, controller_id: ControllerId, who: AccountIdOf<T> },
        TokenAdded {
            controller_id: ControllerId,
            who: AccountIdOf<T>,
            asset: CurrencyId,
            balance: Balance,
            weight: Balance,
            pool_shares_amount: Balance,
        },
        TokenRemoved {
            controller_id: ControllerId,
            who: AccountIdOf<T>,
            asset: CurrencyId,
            balance: Balance,
            pool_shares_amount: Balance,
        },
        /// `who` deposited `amount_in` units of `asset`. Emitted once per asset of a join.
        Joined {
            controller_id: ControllerId,
            who: AccountIdOf<T>,
            asset: CurrencyId,
            amount_in: Balance,
        },
        /// `who` withdrew `amount_out` units of `asset`. Emitted once per asset of an exit.
        Exited {
            controller_id: ControllerId,
            who: AccountIdOf<T>,
            asset: CurrencyId,
            amount_out: Balance,
        },
        LiquidityProviderWhitelisted { controller_id: ControllerId, provider: AccountIdOf<T> },
        LiquidityProviderRemoved { controller_id: ControllerId, provider: AccountIdOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Fewer assets than `MinAssets` were specified.
        AssetLimitBelowMin,
        /// More assets than `MaxAssets` were specified.
        AssetLimitAboveMax,
        /// Parallel vectors differ in length, or do not match the pool's assets.
        LengthMismatch,
        /// The same asset was specified twice.
        DuplicateAsset,
        WeightBelowMin,
        WeightAboveMax,
        /// The sum of all weights would exceed `MaxTotalWeight`.
        MaxTotalWeight,
        /// A pool balance would drop below `MinBalance`.
        BalanceBelowMin,
        SwapFeeBelowMin,
        SwapFeeAboveMax,
        InitialSupplyBelowMin,
        InitialSupplyAboveMax,
        /// The add token timelock must not exceed the minimum weight change period.
        InconsistentTimelock,
        /// The pool share's symbol or name is too long.
        NameTooLong,
        /// The pool already holds `MaxAssets` assets.
        TooManyAssets,
        /// Removing the asset would leave fewer than `MinAssets` assets.
        TooFewAssets,
        /// The caller is not the owner of the controller.
        NotOwner,
        SwappingNotPausable,
        SwapFeeNotConfigurable,
        CapNotConfigurable,
        WeightsNotConfigurable,
        TokensNotAddableOrRemovable,
        WhitelistingNotAllowed,
        /// The caller is not on the controller's liquidity provider whitelist.
        NotOnWhitelist,
        /// The account to remove is not on the whitelist.
        ProviderNotWhitelisted,
        ControllerNotFound,
        /// The controller's pool has not been created yet.
        PoolNotCreated,
        /// The controller's pool was already created.
        PoolAlreadyCreated,
        /// The call is not allowed while a gradual weight update is in progress.
        GradualUpdateInProgress,
        /// The call is not allowed while a token addition is pending.
        TokenAddPending,
        NoPendingTokenAdd,
        /// The add token timelock has not elapsed yet.
        TimelockStillCounting,
        /// The gradual update would end in the past.
        GradualUpdateTimeTravel,
        /// The gradual update is shorter than the controller's minimum weight change period.
        WeightChangePeriodBelowMin,
        /// A zero-value transfer of the asset failed.
        NonConformingAsset,
        /// The engine charges its own exit fee.
        NonZeroEngineExitFee,
        AssetAlreadyBound,
        AssetNotBound,
        /// A computed amount was rounded to zero.
        MathApproximation,
        /// More than the specified maximum would have to be paid in.
        LimitIn,
        /// Less than the specified minimum would be paid out.
        LimitOut,
        /// The deposit exceeds `MaxInRatio` of the asset's pool balance.
        MaxInRatio,
        /// The withdrawal exceeds `MaxOutRatio` of the asset's pool balance.
        MaxOutRatio,
        /// Minting would push the total supply of pool shares above the cap.
        CapLimitReached,
        /// The controller is in the middle of another call.
        Reentrancy,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Construct a new controller owned by the caller.
        ///
        /// The assets, balances and weights are validated and staged. They are only moved once the
        /// owner calls `create_pool`.
        ///
        /// # Arguments
        ///
        /// - `symbol`, `name`: Metadata of the pool share.
        /// - `assets`: The initial assets of the pool.
        /// - `balances`: The initial balance of each asset, pulled from the owner on creation.
        /// - `weights`: The initial denormalized weight of each asset.
        /// - `swap_fee`: The swap fee the engine pool is created with.
        /// - `rights`: The privileged operations the owner may perform. Fixed forever.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_controller(assets.len() as u32))]
        #[transactional]
        #[allow(clippy::too_many_arguments)]
        pub fn create_controller(
            origin: OriginFor<T>,
            symbol: Vec<u8>,
            name: Vec<u8>,
            assets: Vec<CurrencyId>,
            balances: Vec<Balance>,
            weights: Vec<Balance>,
            #[pallet::compact] swap_fee: Balance,
            rights: Rights,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_create_controller(who, symbol, name, assets, balances, weights, swap_fee, rights)
        }

        /// Create the engine pool, bind the staged assets and mint `initial_supply` pool shares to
        /// the owner, using the default timing parameters.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::create_pool(T::MaxAssets::get()))]
        #[transactional]
        pub fn create_pool(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            #[pallet::compact] initial_supply: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_create_pool(who, controller_id, initial_supply, None)
        }

        /// Like `create_pool`, but override the minimum gradual update length and the add token
        /// timelock.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::create_pool(T::MaxAssets::get()))]
        #[transactional]
        pub fn create_pool_with_periods(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            #[pallet::compact] initial_supply: Balance,
            min_weight_change_period: BlockNumberFor<T>,
            add_token_timelock: BlockNumberFor<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_create_pool(
                who,
                controller_id,
                initial_supply,
                Some((min_weight_change_period, add_token_timelock)),
            )
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::set_swap_fee())]
        #[transactional]
        pub fn set_swap_fee(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            #[pallet::compact] swap_fee: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_swap_fee(who, controller_id, swap_fee)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_public_swap())]
        #[transactional]
        pub fn set_public_swap(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            public_swap: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_public_swap(who, controller_id, public_swap)
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_cap())]
        #[transactional]
        pub fn set_cap(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            #[pallet::compact] cap: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_cap(who, controller_id, cap)
        }

        /// Change the weight of `asset` immediately while keeping its price.
        ///
        /// Lowering the weight pays the freed balance out to the owner and burns pool shares from
        /// the owner. Raising the weight pulls the additional balance from the owner and mints
        /// pool shares to the owner.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::update_weight())]
        #[transactional]
        pub fn update_weight(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            asset: CurrencyId,
            #[pallet::compact] new_weight: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_update_weight(who, controller_id, asset, new_weight)
        }

        /// Schedule a linear transition from the current weights to `new_weights` between
        /// `start_block` and `end_block`. The transition is advanced by `poke_weights`.
        ///
        /// A `start_block` in the past is moved to the current block.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::update_weights_gradually(new_weights.len() as u32))]
        #[transactional]
        pub fn update_weights_gradually(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            new_weights: Vec<Balance>,
            start_block: BlockNumberFor<T>,
            end_block: BlockNumberFor<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_update_weights_gradually(
                who,
                controller_id,
                new_weights,
                start_block,
                end_block,
            )
        }

        /// Move the weights along the gradual update in progress. Callable by anyone.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::poke_weights(T::MaxAssets::get()))]
        #[transactional]
        pub fn poke_weights(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
        ) -> DispatchResult {
            ensure_signed(origin)?;

            Self::do_poke_weights(controller_id)
        }

        /// Announce that `asset` will be added with `balance` and `weight`. The addition may be
        /// applied once the controller's add token timelock has elapsed.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::commit_add_token())]
        #[transactional]
        pub fn commit_add_token(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            asset: CurrencyId,
            #[pallet::compact] balance: Balance,
            #[pallet::compact] weight: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_commit_add_token(who, controller_id, asset, balance, weight)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::apply_add_token())]
        #[transactional]
        pub fn apply_add_token(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_apply_add_token(who, controller_id)
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::remove_token())]
        #[transactional]
        pub fn remove_token(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            asset: CurrencyId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_remove_token(who, controller_id, asset)
        }

        /// Buy `pool_amount_out` pool shares by depositing every pool asset proportionally.
        ///
        /// # Arguments
        ///
        /// - `pool_amount_out`: The amount of pool shares to receive.
        /// - `max_amounts_in`: The maximum amount of each asset to pay, in pool asset order.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::join_pool(max_amounts_in.len() as u32))]
        #[transactional]
        pub fn join_pool(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            #[pallet::compact] pool_amount_out: Balance,
            max_amounts_in: Vec<Balance>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_join_pool(who, controller_id, pool_amount_out, max_amounts_in)
        }

        /// Redeem `pool_amount_in` pool shares for every pool asset proportionally, minus the
        /// exit fee.
        ///
        /// # Arguments
        ///
        /// - `pool_amount_in`: The amount of pool shares to redeem.
        /// - `min_amounts_out`: The minimum amount of each asset to receive, in pool asset order.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::exit_pool(min_amounts_out.len() as u32))]
        #[transactional]
        pub fn exit_pool(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            #[pallet::compact] pool_amount_in: Balance,
            min_amounts_out: Vec<Balance>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_exit_pool(who, controller_id, pool_amount_in, min_amounts_out)
        }

        /// Deposit exactly `amount_in` units of `asset_in` and receive at least
        /// `min_pool_amount_out` pool shares.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::joinswap_extern_amount_in())]
        #[transactional]
        pub fn joinswap_extern_amount_in(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            asset_in: CurrencyId,
            #[pallet::compact] amount_in: Balance,
            #[pallet::compact] min_pool_amount_out: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_joinswap_extern_amount_in(
                who,
                controller_id,
                asset_in,
                amount_in,
                min_pool_amount_out,
            )
            .map(|_| ())
        }

        /// Receive exactly `pool_amount_out` pool shares by depositing at most `max_amount_in`
        /// units of `asset_in`.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::joinswap_pool_amount_out())]
        #[transactional]
        pub fn joinswap_pool_amount_out(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            asset_in: CurrencyId,
            #[pallet::compact] pool_amount_out: Balance,
            #[pallet::compact] max_amount_in: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_joinswap_pool_amount_out(
                who,
                controller_id,
                asset_in,
                pool_amount_out,
                max_amount_in,
            )
            .map(|_| ())
        }

        /// Redeem exactly `pool_amount_in` pool shares for at least `min_amount_out` units of
        /// `asset_out`.
        #[pallet::call_index(16)]
        #[pallet::weight(T::WeightInfo::exitswap_pool_amount_in())]
        #[transactional]
        pub fn exitswap_pool_amount_in(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            asset_out: CurrencyId,
            #[pallet::compact] pool_amount_in: Balance,
            #[pallet::compact] min_amount_out: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_exitswap_pool_amount_in(
                who,
                controller_id,
                asset_out,
                pool_amount_in,
                min_amount_out,
            )
            .map(|_| ())
        }

        /// Receive exactly `amount_out` units of `asset_out` by redeeming at most
        /// `max_pool_amount_in` pool shares.
        #[pallet::call_index(17)]
        #[pallet::weight(T::WeightInfo::exitswap_extern_amount_out())]
        #[transactional]
        pub fn exitswap_extern_amount_out(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            asset_out: CurrencyId,
            #[pallet::compact] amount_out: Balance,
            #[pallet::compact] max_pool_amount_in: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_exitswap_extern_amount_out(
                who,
                controller_id,
                asset_out,
                amount_out,
                max_pool_amount_in,
            )
            .map(|_| ())
        }

        #[pallet::call_index(18)]
        #[pallet::weight(T::WeightInfo::whitelist_liquidity_provider())]
        #[transactional]
        pub fn whitelist_liquidity_provider(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            provider: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_whitelist_liquidity_provider(who, controller_id, provider)
        }

        #[pallet::call_index(19)]
        #[pallet::weight(T::WeightInfo::remove_whitelisted_liquidity_provider())]
        #[transactional]
        pub fn remove_whitelisted_liquidity_provider(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            provider: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_remove_whitelisted_liquidity_provider(who, controller_id, provider)
        }

        /// Transfer ownership of the controller to `new_owner`.
        #[pallet::call_index(20)]
        #[pallet::weight(T::WeightInfo::set_controller())]
        #[transactional]
        pub fn set_controller(
            origin: OriginFor<T>,
            #[pallet::compact] controller_id: ControllerId,
            new_owner: AccountIdOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_set_controller(who, controller_id, new_owner)
        }
    }

    // Read-only API. None of these acquire the controller's lock, but all of them fail while it
    // is held.
    impl<T: Config> Pallet<T> {
        pub fn is_public_swap(controller_id: ControllerId) -> Result<bool, DispatchError> {
            Self::ensure_unlocked(controller_id)?;
            let pool_id = Self::controller(controller_id)?.pool_id()?;
            T::Engine::is_public_swap(pool_id)
        }

        pub fn denormalized_weight(
            controller_id: ControllerId,
            asset: CurrencyId,
        ) -> Result<Balance, DispatchError> {
            Self::ensure_unlocked(controller_id)?;
            let pool_id = Self::controller(controller_id)?.pool_id()?;
            T::Engine::denormalized_weight(pool_id, &asset)
        }

        pub fn total_supply(controller_id: ControllerId) -> Result<Balance, DispatchError> {
            Self::ensure_unlocked(controller_id)?;
            Self::controller(controller_id)?;
            Ok(Self::total_shares(controller_id))
        }

        /// Return `true` if `who` may join the pool. Without whitelisting rights, everybody may.
        pub fn can_provide_liquidity(
            controller_id: ControllerId,
            who: &AccountIdOf<T>,
        ) -> Result<bool, DispatchError> {
            Self::ensure_unlocked(controller_id)?;
            let controller = Self::controller(controller_id)?;
            Ok(Self::is_liquidity_provider(controller_id, &controller, who))
        }

        pub fn rights(controller_id: ControllerId) -> Result<Rights, DispatchError> {
            Self::ensure_unlocked(controller_id)?;
            Ok(Self::controller(controller_id)?.rights)
        }

        pub fn cap(controller_id: ControllerId) -> Result<Balance, DispatchError> {
            Self::ensure_unlocked(controller_id)?;
            Ok(Self::controller(controller_id)?.cap)
        }

        pub fn gradual_update(
            controller_id: ControllerId,
        ) -> Result<Option<GradualUpdate<T>>, DispatchError> {
            Self::ensure_unlocked(controller_id)?;
            Self::controller(controller_id)?;
            Ok(GradualUpdates::<T>::get(controller_id))
        }

        pub fn pending_token_add(
            controller_id: ControllerId,
        ) -> Result<Option<PendingTokenAdd<T>>, DispatchError> {
            Self::ensure_unlocked(controller_id)?;
            Self::controller(controller_id)?;
            Ok(PendingTokenAdds::<T>::get(controller_id))
        }
    }
}
