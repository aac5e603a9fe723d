//! Search for a net common to several boxes.
//!
//! ```text
//! find_nets LxHxD [LxHxD ...]
//! ```
//!
//! Every box folding from the same candidate is appended to `results.txt`;
//! the search stops at the first candidate matching all the targets. The
//! classic run is `find_nets 1x1x5 1x2x3`, two boxes of 22 faces each.

use std::process::ExitCode;

use box_nets::search::{CommonNetSearch, OffsetSearchConfig, Reporter};
use box_nets::topology::BoxDims;

const RESULTS_PATH: &str = "results.txt";

fn parse_dims(arg: &str) -> Option<BoxDims> {
    let mut parts = arg.split('x').map(str::parse::<usize>);
    let length = parts.next()?.ok()?;
    let height = parts.next()?.ok()?;
    let depth = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    BoxDims::new(length, height, depth).ok()
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: find_nets LxHxD [LxHxD ...]");
        return ExitCode::FAILURE;
    }

    let mut targets = Vec::with_capacity(args.len());
    for arg in &args {
        match parse_dims(arg) {
            Some(dims) => targets.push(dims),
            None => {
                eprintln!("bad box dimensions {arg:?}: expected LxHxD with positive integers");
                return ExitCode::FAILURE;
            }
        }
    }

    let search = match CommonNetSearch::new(&targets, OffsetSearchConfig::default()) {
        Ok(search) => search,
        Err(err) => {
            eprintln!("cannot search these boxes: {err}");
            return ExitCode::FAILURE;
        }
    };
    let reporter = match Reporter::append_to(RESULTS_PATH) {
        Ok(reporter) => reporter,
        Err(err) => {
            eprintln!("cannot open {RESULTS_PATH}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let found = search.run(|net, matches| {
        if let Err(err) = reporter.record(net, matches) {
            log::error!("failed to record a match: {err}");
        }
    });

    match found {
        Some(net) => {
            println!("common net of {}:", args.join(", "));
            print!("{net}");
            ExitCode::SUCCESS
        }
        None => {
            println!("no common net in this candidate family");
            ExitCode::FAILURE
        }
    }
}
