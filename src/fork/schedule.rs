use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named protocol upgrades, in activation order on mainnet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fork {
    Vip191,
    EthConst,
    Blocklist,
    EthIst,
    Vip214,
    Finality,
    Galactica,
}

impl Fork {
    pub const ALL: [Fork; 7] = [
        Fork::Vip191,
        Fork::EthConst,
        Fork::Blocklist,
        Fork::EthIst,
        Fork::Vip214,
        Fork::Finality,
        Fork::Galactica,
    ];
}

/// The fork that introduces the base fee and dynamic-fee transactions.
pub const FEE_MARKET_FORK: Fork = Fork::Galactica;

/// Activation heights of protocol upgrades
///
/// A fork without an entry is never active. The schedule is passed into
/// every validation call rather than read from a global.
///
/// # Example TOML
/// ```toml
/// [forks]
/// vip191 = 0
/// galactica = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForkSchedule {
    activations: BTreeMap<Fork, u32>,
}

impl ForkSchedule {
    /// No fork is ever active.
    pub fn no_fork() -> Self {
        Self::default()
    }

    /// Every fork active from genesis, as on a solo/dev chain.
    pub fn solo() -> Self {
        Self {
            activations: Fork::ALL.iter().map(|fork| (*fork, 0)).collect(),
        }
    }

    pub fn with(mut self, fork: Fork, height: u32) -> Self {
        self.activations.insert(fork, height);
        self
    }

    pub fn activation_height(&self, fork: Fork) -> Option<u32> {
        self.activations.get(&fork).copied()
    }

    pub fn is_active(&self, fork: Fork, height: u32) -> bool {
        self.activation_height(fork)
            .is_some_and(|activation| height >= activation)
    }
}
