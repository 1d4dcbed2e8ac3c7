use std::env;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use log::info;

use synacor_puzzles::{ack, coins, PuzzleError, Result};

// Registers loaded just before the teleporter's check routine is called.
const A: u16 = 4;
const B: u16 = 1;
const R7: u16 = 1;
// Value the check must return for the teleporter to work.
const TELEPORTER_TARGET: u32 = 6;

fn run_coins() -> Result<()> {
    let coins = coins::solve()?;
    let values: Vec<i64> = coins.iter().map(|c| c.value()).collect();
    println!("{:?}", values);
    for coin in coins {
        println!("- {}", coin.name());
    }
    Ok(())
}

fn run_teleporter() -> Result<()> {
    let wrapped = ack::f_orig(A, B, R7)?;
    let plain = ack::f_minus(A, B, R7)?;
    info!("f_orig({}, {}) with r7={} = {}", A, B, R7, wrapped);
    if wrapped != plain {
        info!("f_minus diverges from the wrapping function: {} != {}", plain, wrapped);
    }
    println!("{}", plain);
    Ok(())
}

fn run_search() -> Result<()> {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = cancel.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))?;
    info!("searching r7 for f({}, {}) == {}", A, B, TELEPORTER_TARGET);
    match ack::search(A, B, TELEPORTER_TARGET, 0..32768, &cancel)? {
        Some(r7) => println!("Found {}", r7),
        None => println!("No r7 gives {}", TELEPORTER_TARGET),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "> {}", record.args()))
        .init();

    let command = env::args().nth(1);
    match command.as_deref() {
        None => {
            run_coins()?;
            run_teleporter()
        }
        Some("coins") => run_coins(),
        Some("teleporter") => run_teleporter(),
        Some("search") => run_search(),
        Some(other) => Err(PuzzleError::UnknownCommand(other.to_string())),
    }
}
