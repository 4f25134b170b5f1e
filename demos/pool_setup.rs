//! Pool setup walkthrough.
//!
//! Derives every deployment value for a concentrated-liquidity pool from
//! two token addresses, two deposits, a fee, a tick spacing and a price
//! range, printing each one as it is computed.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example pool_setup
//! ```

use ekubo_pool_math::domain::BindingToken;
use ekubo_pool_math::session::PoolSession;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()?;

    println!("=== Ekubo Pool Setup ===\n");
    let mut session = PoolSession::new();

    // ── 1. Order the tokens ─────────────────────────────────────────────
    let pair = session.assign_tokens(
        "0x0275d08f64e8c9da4aea46168979205d309fdd079c5a5b4df4252df1cb72ab0f",
        "0x00abbd6f1e590eb83addd87ba5ac27960d859b1f17d11a3c1cd6a0006704b141",
    )?;
    println!("token0: {}", pair.token0());
    println!("token1: {}\n", pair.token1());

    // ── 2. Deposits and starting price ──────────────────────────────────
    let initial = session.set_amounts(1_000.0, 2_000.0)?;
    println!("initial price: {}", initial.price());
    println!("sqrt ratio:    {}", initial.sqrt_ratio());
    println!("initial tick:  {}\n", initial.tick());

    // ── 3. Fee and tick spacing ─────────────────────────────────────────
    let fee = session.set_fee(0.3)?;
    let spacing = session.set_tick_spacing(0.1)?;
    println!("fee (Q128):    {fee} (~{:.4}%)", fee.as_percent());
    println!("tick spacing:  {spacing} (~{:.4}%)\n", spacing.as_percent());

    // ── 4. Price range ──────────────────────────────────────────────────
    let bounds = session.compute_bounds(1.5, 2.5)?;
    let (raw_lower, raw_upper) = bounds.raw_ticks();
    println!("raw ticks:     [{raw_lower}, {raw_upper}]");
    println!(
        "aligned ticks: [{}, {}]",
        bounds.lower_tick(),
        bounds.upper_tick()
    );
    if let Some(warning) = bounds.warning() {
        println!("warning:       {warning}");
    }
    println!();

    // ── 5. Liquidity ────────────────────────────────────────────────────
    let liquidity = session.compute_liquidity()?;
    println!("{liquidity}");
    let binding = match liquidity.binding_token() {
        BindingToken::Token0 => "token0",
        BindingToken::Token1 => "token1",
    };
    println!("binding side:  {binding}\n");

    // ── 6. Snapshot ─────────────────────────────────────────────────────
    let params = session.finalize()?;
    println!("stage:         {}", session.stage());
    println!(
        "deploy with:   fee={} tick_spacing={} initial_tick={} bounds=[{}, {}]",
        params.fee(),
        params.tick_spacing(),
        params.initial_price().tick(),
        params.bounds().lower_tick(),
        params.bounds().upper_tick()
    );

    Ok(())
}
