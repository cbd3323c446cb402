//! Plan command - show the scan region for a requested component list.

use clap::Args;

use docren_core::{parse_component_list, plan_region, FULL_SCAN};

/// Arguments for the plan command.
#[derive(Args)]
pub struct PlanArgs {
    /// Comma-separated component list (e.g. "date,vendor,amount")
    #[arg(short = 'l', long, default_value = "")]
    components: String,

    /// Pin the scan to the whole document, bypassing the heuristic
    #[arg(long)]
    full_scan: bool,
}

pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    // An explicit full-scan pin short-circuits the planner entirely.
    let percent = if args.full_scan {
        FULL_SCAN
    } else {
        plan_region(&parse_component_list(&args.components))
    };

    println!("{percent}");
    Ok(())
}
