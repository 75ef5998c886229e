// AT&T text format for transducers.
//
// One line per arc (`src dst ilabel olabel [weight]`) or final state
// (`state [weight]`), fields separated by whitespace. The source of the
// first line is the start state. Labels are numeric; there are no symbol
// tables. A missing weight means 0.0 (tropical one).

use std::io::{BufRead, Write};

use wildfst_core::{Label, TropicalWeight};
use wildfst_fst::{Arc, StateId, VectorFst};

use crate::CliError;

/// One parsed line.
enum Entry {
    Final { state: StateId, weight: TropicalWeight },
    Arc { src: StateId, arc: Arc },
}

impl Entry {
    fn max_state(&self) -> StateId {
        match self {
            Entry::Final { state, .. } => *state,
            Entry::Arc { src, arc } => (*src).max(arc.nextstate),
        }
    }
}

/// Parse a transducer from AT&T text.
///
/// Empty input yields an empty network with no start state. State ids are
/// dense: an id larger than the number of state references in the whole
/// input is a parse error rather than a request for that many states.
pub fn read_att<R: BufRead>(reader: R) -> Result<VectorFst, CliError> {
    let mut entries: Vec<(usize, Entry)> = Vec::new();
    let mut references = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let entry = match fields.len() {
            1 | 2 => {
                let state = parse_state(fields[0], lineno)?;
                let weight = match fields.get(1) {
                    Some(w) => parse_weight(w, lineno)?,
                    None => TropicalWeight::ONE,
                };
                references += 1;
                Entry::Final { state, weight }
            }
            4 | 5 => {
                let src = parse_state(fields[0], lineno)?;
                let dst = parse_state(fields[1], lineno)?;
                let ilabel = parse_label(fields[2], lineno)?;
                let olabel = parse_label(fields[3], lineno)?;
                let weight = match fields.get(4) {
                    Some(w) => parse_weight(w, lineno)?,
                    None => TropicalWeight::ONE,
                };
                references += 2;
                Entry::Arc {
                    src,
                    arc: Arc::new(ilabel, olabel, weight, dst),
                }
            }
            n => {
                return Err(CliError::Parse {
                    line: lineno,
                    message: format!("expected 1, 2, 4 or 5 fields, found {n}"),
                });
            }
        };
        entries.push((lineno, entry));
    }

    let mut num_states = 0usize;
    for (line, entry) in &entries {
        let state = entry.max_state();
        if state as usize > references {
            return Err(CliError::Parse {
                line: *line,
                message: format!(
                    "state id {state} out of range for {references} state references"
                ),
            });
        }
        num_states = num_states.max(state as usize + 1);
    }

    let mut fst = VectorFst::new();
    fst.reserve_states(num_states)?;
    fst.add_states(num_states);
    for (_, entry) in entries {
        match entry {
            Entry::Final { state, weight } => {
                if fst.start().is_none() {
                    fst.set_start(state)?;
                }
                fst.set_final(state, weight)?;
            }
            Entry::Arc { src, arc } => {
                if fst.start().is_none() {
                    fst.set_start(src)?;
                }
                fst.add_arc(src, arc)?;
            }
        }
    }
    tracing::debug!(
        states = fst.num_states(),
        arcs = fst.num_arcs(),
        "read AT&T transducer"
    );
    Ok(fst)
}

/// Write a transducer as AT&T text, start state first.
///
/// A network without a start state writes nothing.
pub fn write_att<W: Write>(fst: &VectorFst, mut out: W) -> Result<(), CliError> {
    let Some(start) = fst.start() else {
        return Ok(());
    };
    let order = std::iter::once(start).chain(fst.states().filter(|&s| s != start));
    for s in order {
        for arc in fst.arcs(s) {
            write!(out, "{s}\t{}\t{}\t{}", arc.nextstate, arc.ilabel, arc.olabel)?;
            if !arc.weight.is_one() {
                write!(out, "\t{}", arc.weight)?;
            }
            writeln!(out)?;
        }
        let final_weight = fst.final_weight(s);
        if final_weight.is_one() {
            writeln!(out, "{s}")?;
        } else if !final_weight.is_zero() {
            writeln!(out, "{s}\t{final_weight}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn parse_state(field: &str, line: usize) -> Result<StateId, CliError> {
    field.parse().map_err(|_| CliError::Parse {
        line,
        message: format!("invalid state id {field:?}"),
    })
}

fn parse_label(field: &str, line: usize) -> Result<Label, CliError> {
    field.parse().map_err(|_| CliError::Parse {
        line,
        message: format!("invalid label {field:?}"),
    })
}

fn parse_weight(field: &str, line: usize) -> Result<TropicalWeight, CliError> {
    field
        .parse::<f32>()
        .map(TropicalWeight::new)
        .map_err(|_| CliError::Parse {
            line,
            message: format!("invalid weight {field:?}"),
        })
}
