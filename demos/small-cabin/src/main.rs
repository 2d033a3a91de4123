//! small-cabin — smallest end-to-end example for the cabin boarding simulator.
//!
//! Runs one seeded window-first boarding on the default 7×10 cabin, printing
//! a text frame every few ticks, then compares all strategies over a handful
//! of seeds.  Swap the dimensions and seed counts to explore bigger cabins.

use anyhow::Result;

use cabin_sim::SimHandle;
use cabin_strategy::BoardingStrategy;

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:       u16 = 7;
const HEIGHT:      u16 = 10;
const SEED:        u64 = 42;
const FRAME_EVERY: u32 = 10;
const TRIALS:      u64 = 20;

fn main() -> Result<()> {
    // ── One watched run ───────────────────────────────────────────────────
    let mut sim = SimHandle::new();
    sim.init_random_seeded(WIDTH, HEIGHT, BoardingStrategy::WindowFirst, SEED)?;

    println!("window-first boarding, {WIDTH}x{HEIGHT} cabin, seed {SEED}\n");
    loop {
        let finished = sim.step()?;
        let tick = sim.tick()?;
        if tick.0 % FRAME_EVERY == 0 || finished {
            println!("{tick}:");
            println!("{}", sim.state()?.ascii_frame());
        }
        if finished {
            println!("boarded in {tick}");
            break;
        }
    }

    // ── Strategy comparison ───────────────────────────────────────────────
    println!("\nmean ticks over {TRIALS} seeds:");
    let strategies = [
        BoardingStrategy::Random,
        BoardingStrategy::back_to_front(),
        BoardingStrategy::front_to_back(),
        BoardingStrategy::AisleFirst,
        BoardingStrategy::WindowFirst,
    ];
    for strategy in strategies {
        println!("  {:<16} {:.1}", strategy.to_string(), mean_ticks(strategy)?);
    }

    Ok(())
}

fn mean_ticks(strategy: BoardingStrategy) -> Result<f64> {
    let mut total: u64 = 0;
    for seed in 0..TRIALS {
        let mut sim = SimHandle::new();
        sim.init_random_seeded(WIDTH, HEIGHT, strategy, seed)?;
        while !sim.step()? {}
        total += sim.tick()?.0 as u64;
    }
    Ok(total as f64 / TRIALS as f64)
}
