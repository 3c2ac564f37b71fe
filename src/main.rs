use ethers::types::H256;
use std::sync::Arc;
use tracing::info;
use txpool_admission::{
    api::Server,
    chain::{BlockSummary, HeaderBuilder},
    config::Config,
    fork::{FEE_MARKET_FORK, INITIAL_BASE_FEE},
    pool::TxPool,
    state::{MemoryState, MemoryStater},
    tx::Features,
};

/// Starts the pool intake with a genesis head and serves submissions.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load("config/default.toml")?;
    info!("Pool intake starting with config: {:?}", config);

    // Genesis state; the consensus engine advances the head from here.
    let mut stater = MemoryStater::new();
    let root = stater.insert(MemoryState::new(H256::zero()));

    let mut genesis = HeaderBuilder::new()
        .number(0)
        .tx_features(Features::DELEGATION)
        .state_root(root);
    if config.forks.is_active(FEE_MARKET_FORK, 0) {
        genesis = genesis.base_fee(INITIAL_BASE_FEE);
    }
    let head = BlockSummary::new(genesis.build());

    let pool = Arc::new(TxPool::new(
        config.chain.tag,
        config.forks.clone(),
        stater,
        head,
    ));
    info!("Transaction pool ready for chain tag {:#04x}", pool.chain_tag());

    let server = Server::new(config.api.clone(), pool);
    server.start().await?;

    Ok(())
}
