//! Headless front-end: lays out a page, sweeps the scroll position from top
//! to bottom and logs what each pinned section is doing, plus where a gesture
//! ending there would snap.

use anyhow::Context;
use clap::Parser;
use scrollpin_core::{
    sections, Page, PageLayout, Phase, SectionGeometry, Stage, StageConfig, Viewport,
    VisualState,
};

#[derive(Parser, Debug)]
#[command(name = "scrollpin-native", about = "Sweep a page's scroll choreography")]
struct Args {
    /// Page id (home, about, ai-tools, creators, brands, contact, login)
    #[arg(long, default_value = "home")]
    page: String,

    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Scroll step in px
    #[arg(long, default_value_t = 80.0)]
    step: f32,

    /// Height assumed for non-pinned sections, in px
    #[arg(long, default_value_t = 900.0)]
    flowing_height: f32,
}

fn phase_tag(phase: Phase) -> &'static str {
    match phase {
        Phase::Before => "before",
        Phase::Entrance => "enter",
        Phase::Settle => "settle",
        Phase::Exit => "exit",
        Phase::After => "after",
    }
}

fn mean_opacity(states: &[VisualState]) -> f32 {
    if states.is_empty() {
        return 1.0;
    }
    states.iter().map(|s| s.opacity).sum::<f32>() / states.len() as f32
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    anyhow::ensure!(args.step > 0.0, "--step must be positive");

    let page = Page::from_id(&args.page);
    let viewport = Viewport::new(args.width, args.height);
    let geometry: Vec<SectionGeometry> = sections::blueprints_for(page)
        .iter()
        .map(|bp| {
            if bp.is_pinned() {
                SectionGeometry::pinned(viewport)
            } else {
                SectionGeometry::flowing(args.flowing_height)
            }
        })
        .collect();
    let layout = PageLayout::from_sections(&geometry, viewport).context("laying out page")?;

    let mut stage = Stage::new(StageConfig::default(), viewport);
    stage.navigate(page, &layout);
    log::info!(
        "[sweep] page={} document={:.0}px max_scroll={:.0}px pinned={}",
        page.id(),
        layout.document_height,
        layout.max_scroll,
        stage.registry().len()
    );

    let mut scroll = 0.0_f32;
    loop {
        let frame = stage.on_scroll(scroll);
        let summary: Vec<String> = frame
            .sections
            .iter()
            .map(|(h, sf)| {
                format!(
                    "{}:{}@{:.2}/a{:.2}",
                    h,
                    phase_tag(sf.phase),
                    sf.progress,
                    mean_opacity(&sf.states)
                )
            })
            .collect();
        let snap = match (frame.snap_target, stage.max_scroll() > 0.0) {
            (Some(t), true) => format!("{:.0}", t * stage.max_scroll()),
            _ => "-".to_owned(),
        };
        log::info!("[sweep] s={:>6.0} snap={:>6} {}", scroll, snap, summary.join(" "));

        if scroll >= layout.max_scroll {
            break;
        }
        scroll = (scroll + args.step).min(layout.max_scroll);
    }
    Ok(())
}
