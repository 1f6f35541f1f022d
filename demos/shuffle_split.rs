//! Build a 12-segment circle, shuffle it, split it, sort it, and render each
//! stage with its element sets highlighted.
//!
//! Run with `cargo run --example shuffle_split [output-dir]`.

use mesh_reorder::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

fn render_stage(mesh: &Mesh, stage: &str, dir: &Path) -> Result<(), MeshError> {
    for (idx, (name, positions)) in mesh.elsets().iter().enumerate() {
        let options = DrawOptions {
            colormap: Colormap::Cividis,
            title: format!("{stage}: {name}"),
            annotate: name == ALL,
            ..Default::default()
        };
        let path = dir.join(format!("{stage}{:02}.svg", idx + 1));
        let file = File::create(&path)?;
        SvgRenderer::new(options)
            .highlight(positions)
            .write(BufWriter::new(file), mesh)?;
        println!("{stage:>8} {name:<13} {positions:?} -> {}", path.display());
    }
    Ok(())
}

fn main() -> Result<(), MeshError> {
    let dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    let mut mesh = circle_mesh(CircleMeshOptions {
        nelements: 12,
        ..Default::default()
    })?;
    render_stage(&mesh, "sorted", &dir)?;

    let shuffled = TopologyShuffler::seeded(12).shuffle(&mut mesh);
    println!("permutation {:?}, flipped {:?}", shuffled.permutation, shuffled.flipped);
    render_stage(&mesh, "shuffled", &dir)?;

    let split = mesh.split()?;
    println!(
        "removed {:?} at {:?}",
        split.removed_elements, split.removed_positions
    );
    render_stage(&mesh, "split", &dir)?;

    let sorted = mesh.sort();
    println!("sorted into {} chains", sorted.chains);
    render_stage(&mesh, "resorted", &dir)?;

    mesh.save(dir.join("mesh.bin"))?;
    Ok(())
}
