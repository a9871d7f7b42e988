//! Renderers for discoveries and run summaries
//!
//! All writers take any `Write` sink so the driver can target stdout or files.

use std::io::Write;

use crate::algorithm::executor::{Discovery, SearchSummary, StopReason};
use crate::io::configuration::ITEMSET_WILDCARD;
use crate::io::error::Result;
use crate::spatial::{Database, Hyperinterval};

/// `KEPT:`/`DISCARDED:` line for one discovery
pub fn describe(discovery: &Discovery) -> String {
    format!(
        "{} {} complexity: {} covered: {}",
        if discovery.kept { "KEPT:" } else { "DISCARDED:" },
        discovery.hint,
        discovery.complexity,
        discovery.inside_count
    )
}

/// Itemset notation for binary data: the fixed value per column or a wildcard
pub fn itemset(hint: &Hyperinterval) -> String {
    let items: Vec<String> = hint
        .lower()
        .iter()
        .zip(hint.upper())
        .enumerate()
        .map(|(dim, (lo, hi))| {
            if hint.is_full(dim) || lo != hi {
                ITEMSET_WILDCARD.to_string()
            } else {
                format!("{lo}")
            }
        })
        .collect();
    format!("[{}]", items.join(", "))
}

/// One line per hyperinterval with a tab-separated 0/1 flag per record
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_coverage<W: Write>(
    writer: &mut W,
    database: &Database,
    hints: &[Hyperinterval],
) -> Result<()> {
    for hint in hints {
        let flags: Vec<&str> = database
            .coverage(hint)
            .iter()
            .by_vals()
            .map(|covered| if covered { "1" } else { "0" })
            .collect();
        writeln!(writer, "{}", flags.join("\t"))?;
    }
    Ok(())
}

fn write_box<W: Write>(writer: &mut W, hint: &Hyperinterval) -> Result<()> {
    let fields: Vec<String> = hint
        .centre()
        .into_iter()
        .chain(hint.half_extent())
        .map(|value| value.to_string())
        .collect();
    writeln!(writer, "{}", fields.join("\t"))?;
    Ok(())
}

/// Centres and half-extents, kept discoveries first, then the discarded ones
///
/// The two blocks are separated by an empty line so plotting tools can treat
/// them as separate data sets.
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_boxes<W: Write>(writer: &mut W, discoveries: &[Discovery]) -> Result<()> {
    for discovery in discoveries.iter().filter(|d| d.kept) {
        write_box(writer, &discovery.hint)?;
    }
    write!(writer, "\n\n")?;
    for discovery in discoveries.iter().filter(|d| !d.kept) {
        write_box(writer, &discovery.hint)?;
    }
    Ok(())
}

/// Closing statistics of a run
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_summary<W: Write>(writer: &mut W, summary: &SearchSummary) -> Result<()> {
    if summary.stop == Some(StopReason::Interrupted) {
        writeln!(writer, "Interrupted")?;
    }
    writeln!(writer, "Discoveries:                                 {}", summary.discoveries)?;
    writeln!(writer, "Kept:                                        {}", summary.kept)?;
    writeln!(writer, "Single uniform data complexity:              {}", summary.data_complexity)?;
    writeln!(writer, "Comparative single uniform data complexity:  {}", summary.base_complexity)?;
    writeln!(writer, "Discretized double uniform model complexity: {}", summary.model_complexity)?;
    writeln!(
        writer,
        "Reference complexity:                        {}",
        summary.base_complexity + summary.model_complexity
    )?;
    Ok(())
}
