//! Nexus-0 CLI
//!
//! Usage:
//!   nexus0 --region 60621                   # Score one region
//!   nexus0 --list-regions                   # Known region keys
//!   nexus0 --audit events.json              # Audit an event log file
//!   nexus0 --audit -                        # Audit events from stdin
//!   nexus0 --region 60621 --json            # JSON output

use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::process;

use nexus0::core::{list_known_region_keys, perform_audit, score_region};
use nexus0::types::{AuditSummary, CompositeScoreResult, InterventionEventRecord};
use nexus0::{HDI_THRESHOLD, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "nexus0",
    version = VERSION,
    about = "Stability Nexus Nexus-0 - Harm density scoring and event audits",
    long_about = "Nexus-0 is the reference implementation of the Stability Nexus\n\
                  scoring core.\n\n\
                  It computes the Harm Density Index (HDI) for regions in the\n\
                  static reference table (child indicators weighted 2:1 over\n\
                  adult indicators) and audits intervention event logs into\n\
                  confidence, replication, and latency statistics.\n\n\
                  Modes:\n  \
                  --region KEY    Score one region\n  \
                  --list-regions  Print known region keys\n  \
                  --audit FILE    Audit a JSON event log ('-' for stdin)"
)]
struct Args {
    /// Region key to score
    #[arg(short, long)]
    region: Option<String>,

    /// List known region keys
    #[arg(short, long)]
    list_regions: bool,

    /// Audit a JSON array of intervention events ('-' reads stdin)
    #[arg(short, long)]
    audit: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show raw indicator breakdown / per-event detail
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.audit {
        run_audit(path, &args);
    } else if args.list_regions {
        run_list(&args);
    } else if let Some(ref key) = args.region {
        run_score(key, &args);
    } else {
        // Default to a full-table scoring pass
        run_score_all(&args);
    }
}

/// Score a single region
fn run_score(key: &str, args: &Args) {
    let result = score_region(key);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else if args.verbose {
        print_verbose_score(&result, args.no_color);
    } else if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }
}

/// Score every region in the reference table
fn run_score_all(args: &Args) {
    let results: Vec<CompositeScoreResult> = list_known_region_keys()
        .iter()
        .map(|key| score_region(key))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).unwrap());
        return;
    }

    print_header("Harm Map", args.no_color);
    for result in &results {
        if args.no_color {
            println!("{}", result.to_parseable_string());
        } else {
            println!("{}", result.to_terminal_string());
        }
    }
    println!();
    println!("Priority threshold: HDI >= {:.1}", HDI_THRESHOLD);
}

/// Print known region keys
fn run_list(args: &Args) {
    let keys = list_known_region_keys();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&keys).unwrap());
    } else {
        for key in keys {
            println!("{}", key);
        }
    }
}

/// Audit a JSON event log from a file or stdin
fn run_audit(path: &str, args: &Args) {
    let raw = match read_events_source(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Cannot read event log '{}': {}", path, e);
            process::exit(1);
        }
    };

    let events: Vec<InterventionEventRecord> = match serde_json::from_str(&raw) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Malformed event log '{}': {}", path, e);
            process::exit(1);
        }
    };

    let summary = perform_audit(&events);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    } else if args.verbose {
        print_verbose_audit(&summary, args.no_color);
    } else if args.no_color {
        println!("{}", summary.to_parseable_string());
    } else {
        println!("{}", summary.to_terminal_string());
    }
}

/// Read the raw event log ('-' means stdin)
fn read_events_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Nexus-0 v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  Nexus-0 v{} - {}\x1b[0m", VERSION, mode);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!();
}

/// Print score with full indicator breakdown
fn print_verbose_score(result: &CompositeScoreResult, no_color: bool) {
    let color = if no_color { "" } else { result.color_code() };
    let reset = if no_color { "" } else { CompositeScoreResult::color_reset() };

    println!("{}{} ({}){}", color, result.display_name, result.key, reset);
    println!("{}  HDI = {:.1}  (priority: {}){}", color, result.score, result.breaches_threshold(), reset);
    println!("{}  Indicators:{}", color, reset);
    println!("{}    child_welfare:         {:.1} (w=2.0){}", color, result.child_welfare_reading, reset);
    println!("{}    health_volatility:     {:.1} (w=2.0){}", color, result.volatility_reading, reset);
    println!("{}    food_scarcity:         {:.1} (w=1.0){}", color, result.food_scarcity_reading, reset);
    println!("{}    economic_desperation:  {:.1} (w=1.0){}", color, result.economic_desperation_reading, reset);
}

/// Print audit summary with per-event detail
fn print_verbose_audit(summary: &AuditSummary, no_color: bool) {
    if no_color {
        println!("{}", summary.to_parseable_string());
    } else {
        println!("{}", summary.to_terminal_string());
    }

    for line in &summary.per_event_status {
        let color = if no_color { "" } else { line.status.color_code() };
        let reset = if no_color { "" } else { nexus0::types::EventStatus::color_reset() };
        println!(
            "{}  {} {} | latency={:.1}d | replicated={}{}",
            color, line.id, line.status, line.latency_days, line.replicated, reset
        );
    }
}
