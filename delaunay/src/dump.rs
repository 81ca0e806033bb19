//! `.node`/`.ele` diagnostic dump, in the format Shewchuk's `triangle` and
//! `showme` tools read. Reconstructs the dropped `print_trifiles`
//! diagnostic: one vertex per line, one triangle per line, nothing else.

use glam::DVec2;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `<stem>.node` and `<stem>.ele` describing `points`/`triangles`.
pub(crate) fn write_node_ele(
    points: &[DVec2],
    triangles: &[[u32; 3]],
    stem: &Path,
) -> io::Result<()> {
    let mut node = BufWriter::new(File::create(stem.with_extension("node"))?);
    writeln!(node, "{} 2 0 0", points.len())?;
    for (i, p) in points.iter().enumerate() {
        writeln!(node, "{i} {} {}", p.x, p.y)?;
    }
    node.flush()?;

    let mut ele = BufWriter::new(File::create(stem.with_extension("ele"))?);
    writeln!(ele, "{} 3 0", triangles.len())?;
    for (i, t) in triangles.iter().enumerate() {
        writeln!(ele, "{i} {} {} {}", t[0], t[1], t[2])?;
    }
    ele.flush()?;

    Ok(())
}
