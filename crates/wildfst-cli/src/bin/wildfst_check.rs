// wildfst-check: Audit wildcard usage in a transducer.
//
// Reads a transducer in AT&T text form from stdin and reports arcs that
// pair the identity wildcard with anything else, whether wildcards occur at
// all, and whether the network is an acceptor in the wildcard sense.
// Exits with code 1 if any disallowed pair is found.
//
// Usage:
//   wildfst-check [OPTIONS] < in.att
//
// Options:
//   -c, --config PATH        JSON pass configuration (default: $WILDFST_CONFIG)
//   --other-id N             Identity wildcard label
//   --other-nonid N          Non-identity wildcard label
//   -v, --verbose            Verbose logging to stderr
//   -h, --help               Print help

use std::io;
use std::process;

use wildfst_cli::{CheckReport, fatal, init_logging, parse_options, read_att};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_options(&args).unwrap_or_else(|e| fatal(&e.to_string()));

    if opts.help {
        println!("wildfst-check: Audit wildcard usage in an AT&T-format transducer.");
        println!();
        println!("Usage: wildfst-check [OPTIONS] < in.att");
        println!();
        println!("Exits with code 1 if an arc pairs the identity wildcard with");
        println!("any other label.");
        println!();
        println!("Options:");
        println!("  -c, --config PATH        JSON pass configuration (default: $WILDFST_CONFIG)");
        println!("  --other-id N             Identity wildcard label");
        println!("  --other-nonid N          Non-identity wildcard label");
        println!("  -v, --verbose            Verbose logging to stderr");
        println!("  -h, --help               Print this help");
        return;
    }
    init_logging(opts.verbose);

    if !opts.positional.is_empty() {
        fatal("wildfst-check takes no positional arguments");
    }
    let config = opts.load_config().unwrap_or_else(|e| fatal(&e.to_string()));
    let fst = read_att(io::stdin().lock()).unwrap_or_else(|e| fatal(&e.to_string()));

    let report = CheckReport::new(&fst, &config);
    println!("{report}");
    if !report.is_clean() {
        process::exit(1);
    }
}
