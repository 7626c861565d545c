//! Prints an SVG sheet of progress clip shapes.
//!
//! ```text
//! cargo run --example progress_svg                 # default 160 x 100 tiles
//! cargo run --example progress_svg -- 120 120      # custom tile size
//! RUST_LOG=radial_clip=trace cargo run --example progress_svg
//! ```

use radial_clip::export::SvgClipPath;
use radial_clip::geometry::RectSize;
use radial_clip::progress::{ProgressIndicator, ProgressState};
use radial_clip::Result;

const STEP_COUNT: u32 = 6;
const STEPS: [f64; STEP_COUNT as usize] = [0.0, 0.1, 0.25, 0.5, 0.8, 1.0];

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for radial_clip.
    // Override with RUST_LOG env var (e.g. RUST_LOG=radial_clip=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("radial_clip=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>());
    let width = args.next().and_then(|r| r.ok()).unwrap_or(160.0);
    let height = args.next().and_then(|r| r.ok()).unwrap_or(100.0);
    let size = RectSize::new(width, height)?;

    let indicator = ProgressIndicator::default();
    let svg = SvgClipPath::new();
    let mut state = ProgressState::default();
    let mut last_drawn = None;

    let gap = 10.0;
    let total_width = (width + gap) * f64::from(STEP_COUNT) + gap;
    let total_height = height + 2.0 * gap;

    let mut defs = String::new();
    let mut tiles = String::new();
    for (i, &progress) in (0_u32..).zip(STEPS.iter()) {
        state.set(progress);
        if last_drawn == Some(state.revision()) {
            continue;
        }
        last_drawn = Some(state.revision());

        let region = indicator.outline(size, state.progress());
        tracing::info!(
            progress = state.progress(),
            area = region.area(),
            "clip region built"
        );

        let id = format!("progress-{i}");
        defs.push_str(&svg.clip_path_element(&id, &region));
        defs.push('\n');

        let x = gap + (width + gap) * f64::from(i);
        tiles.push_str(&format!(
            concat!(
                r#"<g transform="translate({x} {y})">"#,
                r##"<rect width="{w}" height="{h}" fill="#ddd"/>"##,
                r##"<rect width="{w}" height="{h}" fill="#2a7" clip-path="url(#{id})"/>"##,
                "</g>\n"
            ),
            x = x,
            y = gap,
            w = width,
            h = height,
            id = id,
        ));
    }

    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_width}" height="{total_height}">"#
    );
    println!("<defs>\n{defs}</defs>");
    print!("{tiles}");
    println!("</svg>");
    Ok(())
}
