// wildfst-pass: Run one wildcard pass on a transducer.
//
// Reads a transducer in AT&T text form from stdin, runs the named pass and
// writes the result in the same form to stdout.
//
// Usage:
//   wildfst-pass [OPTIONS] <PASS> < in.att > out.att
//
// Options:
//   -c, --config PATH        JSON pass configuration (default: $WILDFST_CONFIG)
//   --other-id N             Identity wildcard label
//   --other-nonid N          Non-identity wildcard label
//   --alphabet N,N,...       Symbols for expand/close
//   --separator N            Rule separator label (sync-rule)
//   --hard-epsilon N         Hard-epsilon label (sync-rule)
//   -v, --verbose            Log pass summaries to stderr
//   -h, --help               Print help

use std::io::{self, BufWriter};

use wildfst_cli::{Pass, fatal, init_logging, parse_options, read_att, write_att};

fn print_help() {
    println!("wildfst-pass: Run one wildcard pass on an AT&T-format transducer.");
    println!();
    println!("Usage: wildfst-pass [OPTIONS] <PASS> < in.att > out.att");
    println!();
    println!("Passes:");
    for pass in Pass::ALL {
        println!("  {}", pass.name());
    }
    println!();
    println!("Options:");
    println!("  -c, --config PATH        JSON pass configuration (default: $WILDFST_CONFIG)");
    println!("  --other-id N             Identity wildcard label");
    println!("  --other-nonid N          Non-identity wildcard label");
    println!("  --alphabet N,N,...       Symbols for expand/close");
    println!("  --separator N            Rule separator label (sync-rule)");
    println!("  --hard-epsilon N         Hard-epsilon label (sync-rule)");
    println!("  -v, --verbose            Log pass summaries to stderr");
    println!("  -h, --help               Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_options(&args).unwrap_or_else(|e| fatal(&e.to_string()));

    if opts.help {
        print_help();
        return;
    }
    init_logging(opts.verbose);

    let pass: Pass = match opts.positional.as_slice() {
        [name] => name.parse().unwrap_or_else(|e: wildfst_cli::CliError| fatal(&e.to_string())),
        [] => fatal("missing pass name (see --help)"),
        _ => fatal("expected exactly one pass name"),
    };
    let config = opts.load_config().unwrap_or_else(|e| fatal(&e.to_string()));

    let mut fst = read_att(io::stdin().lock()).unwrap_or_else(|e| fatal(&e.to_string()));
    pass.run(&mut fst, &config)
        .unwrap_or_else(|e| fatal(&e.to_string()));

    let out = BufWriter::new(io::stdout().lock());
    write_att(&fst, out).unwrap_or_else(|e| fatal(&e.to_string()));
}
