//! Renders a simulated heading sweep of the compass dial to SVG files.
//!
//! ```text
//! compass-studio [STYLE.mkml] [OUT_DIR] [SIZE]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use compass_engine::logging::{init_logging, LoggingConfig};
use compass_ui::prelude::*;

/// Headings fed to the dial, with whether the widget is on screen at the time.
const SWEEP: &[(f32, bool)] = &[
    (0.0, true),
    (45.0, true),
    (90.0, true),
    (135.0, false),
    (180.0, true),
    (270.0, true),
    (405.0, true),
    (-30.0, true),
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let style_path = args.next().map(PathBuf::from);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "frames".to_string()));
    let size = match args.next() {
        Some(s) => MeasureSpec::Exactly(s.parse().with_context(|| format!("invalid size {s:?}"))?),
        None => MeasureSpec::Unspecified,
    };

    let source = match &style_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading style document {}", path.display()))?,
        None => include_str!("../ui/compass.mkml").to_string(),
    };

    let mut fonts = FontSystem::new();
    let loaded = load_font(&mut fonts);
    let fallback = MonospaceMetrics::default();
    let metrics: &dyn TextMeasure = if loaded.is_some() { &fonts } else { &fallback };
    // Labels are centered with the loaded font's widths, so the SVG must name it.
    let (font, family) = loaded.unwrap_or((FontId::default(), "monospace"));
    let base = CompassStyle::new().font(font);

    let config = load_str_with(&source, base).context("loading compass style")?;
    let mut compass = config.into_view(metrics);
    compass.on_accessibility(|event| log::info!("announce: {}", event.text()));

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut draw_list = DrawList::new();
    let mut written = 0;
    for (frame, &(bearing, visible)) in SWEEP.iter().enumerate() {
        let change = compass.set_bearing(bearing, visible)?;
        if !change.redraw {
            continue;
        }
        let resolved = compass.render_into(&mut draw_list, size, size, metrics);
        let svg = SvgSurface::new(resolved.x, resolved.y).font_family(family).render(&draw_list);
        write_frame(&out_dir, frame, bearing, &svg)?;
        written += 1;
    }

    println!("wrote {written} frames to {}", out_dir.display());
    Ok(())
}

fn write_frame(dir: &Path, frame: usize, bearing: f32, svg: &str) -> Result<()> {
    let path = dir.join(format!("compass_{frame:02}.svg"));
    std::fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
    log::debug!("frame {frame}: bearing {bearing} -> {}", path.display());
    Ok(())
}

/// Loads the first system font found and returns it with its family name.
///
/// `None` means the caller falls back to fixed-advance metrics.
fn load_font(fonts: &mut FontSystem) -> Option<(FontId, &'static str)> {
    let (bytes, family) = [
        ("/usr/share/fonts/TTF/DejaVuSans.ttf", "DejaVu Sans"),
        ("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf", "DejaVu Sans"),
        ("/usr/share/fonts/dejavu/DejaVuSans.ttf", "DejaVu Sans"),
        ("/usr/share/fonts/noto/NotoSans-Regular.ttf", "Noto Sans"),
        ("/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf", "Noto Sans"),
    ]
    .iter()
    .find_map(|&(p, family)| std::fs::read(p).ok().map(|b| (b, family)))?;

    match fonts.load_font(&bytes) {
        Ok(id) => Some((id, family)),
        Err(e) => {
            log::warn!("{e}; using fixed-advance metrics");
            None
        }
    }
}
