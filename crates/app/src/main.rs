//! CLI entry point: load an OBJ file and report buffer statistics.

use anyhow::{Context, Result};

fn parse_color_arg() -> [f32; 4] {
    // Accept: --color=R,G,B[,A], components in 0..1. Default = white.
    let mut color = [1.0, 1.0, 1.0, 1.0];
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--color=") {
            let parts: Vec<f32> = val
                .split(',')
                .filter_map(|p| p.trim().parse::<f32>().ok())
                .collect();
            color = match parts.as_slice() {
                [r, g, b] => [*r, *g, *b, 1.0],
                [r, g, b, a] => [*r, *g, *b, *a],
                _ => {
                    eprintln!("[warn] Unknown color '{}', falling back to white.", val);
                    color
                }
            };
        }
    }
    color
}

fn parse_frame_arg() -> bool {
    // --frame[=on|off], default off
    for arg in std::env::args() {
        if arg == "--frame" {
            return true;
        }
        if let Some(val) = arg.strip_prefix("--frame=") {
            return matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        }
    }
    false
}

fn parse_path_arg() -> Option<String> {
    std::env::args().skip(1).find(|arg| !arg.starts_with("--"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path =
        parse_path_arg().context("usage: app [--frame] [--color=R,G,B[,A]] <file.obj>")?;
    let color = parse_color_arg();
    let frame_mode = parse_frame_arg();
    log::info!(
        "Loading '{}' (frame={}, color={:?})",
        path,
        frame_mode,
        color
    );

    if frame_mode {
        let frame = mesh::load_frame_from_path(&path, color)?;
        log::info!(
            "Frame buffers: {} face-vertex entries ({} position, {} color, {} normal, {} uv floats)",
            frame.len(),
            frame.positions().len(),
            frame.colors().len(),
            frame.normals().len(),
            frame.uvs().len()
        );
    } else {
        let data = mesh::load_obj_from_path(&path, color)?;
        log::info!(
            "Indexed mesh: {} vertices, {} triangles ({} vertex bytes, {} index bytes)",
            data.vertex_count(),
            data.triangle_count(),
            data.vertex_bytes().len(),
            data.index_bytes().len()
        );
    }

    Ok(())
}
