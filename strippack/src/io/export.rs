use crate::entities::{Item, Layout};
use crate::io::ext_repr::{ExtPlacedItem, ExtSPSolution};
use anyhow::Result;
use itertools::Itertools;
use std::io::Write;
use std::time::Duration;

/// Exports a layout out of the library
pub fn export(layout: &Layout, run_time: Duration) -> ExtSPSolution {
    ExtSPSolution {
        strip_width: layout.strip.width,
        height: layout.height(),
        fitness: layout.fitness(),
        run_time_ms: run_time.as_millis() as u64,
        placed_items: layout
            .placed_items()
            .iter()
            .map(|pi| ExtPlacedItem {
                item_id: pi.id as u64,
                left: pi.left(),
                bottom: pi.bottom(),
                right: pi.right(),
                top: pi.top(),
                rotated: pi.is_rotated(),
            })
            .collect(),
    }
}

/// Writes a layout in the plain text solution format:
/// a `# <instance> <algorithm> <fitness> <height> <elapsed-ms>` summary line,
/// followed by an `id left top right bottom` line per placed item.
pub fn write_text_solution(
    writer: &mut impl Write,
    layout: &Layout,
    instance_name: &str,
    algorithm: &str,
    elapsed: Duration,
) -> Result<()> {
    writeln!(
        writer,
        "# {} {} {} {} {}",
        instance_name,
        algorithm,
        layout.fitness(),
        layout.height(),
        elapsed.as_millis()
    )?;
    for pi in layout.placed_items() {
        writeln!(
            writer,
            "{} {} {} {} {}",
            pi.id,
            pi.left(),
            pi.top(),
            pi.right(),
            pi.bottom()
        )?;
    }
    Ok(())
}

/// Compact representation of a sequence: item ids in order, rotated items prefixed with `R`.
pub fn sequence_signature(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| match item.is_rotated() {
            true => format!("R{}", item.id),
            false => item.id.to_string(),
        })
        .join(" ")
}
