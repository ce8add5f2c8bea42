use anyhow::Context;
use clap::Parser;
use generator::layout::build_layout;
use gui_bridge::bridge::HostBridge;
use gui_bridge::model::SummaryModel;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::LayoutConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Rust-facing mask-node workflow driver")]
struct Args {
    /// Run a single offline layout and emit a baseline summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a region layout from YAML
    #[arg(long)]
    layout: Option<PathBuf>,
    #[arg(long, default_value_t = 3)]
    regions: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Keep the host bridge alive for incoming layouts
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let layout = if let Some(path) = args.layout {
        LayoutConfig::load(path)?
    } else {
        build_layout(args.regions, args.seed)?
    };

    let runner = Runner::new();
    let bridge = HostBridge::new(Arc::new(runner.clone()));

    if args.offline {
        let result = runner.execute(&layout)?;

        println!(
            "Offline run -> regions {}, merged peak {:.3}, canvas {}x{}",
            result.region_coverage.len(),
            result.merged_peak,
            result.canvas.0,
            result.canvas.1
        );

        let model = SummaryModel::from_result(&result);
        bridge.publish(&model)?;
        bridge.publish_status("Offline mask workflow results ready.");

        let report = format!(
            "regions={} coverage={:?} merged_peak={:.4} notes={:?}\n",
            result.region_coverage.len(),
            result.region_coverage,
            result.merged_peak,
            result.notes
        );
        let report_path = PathBuf::from("tools/data/offline_masks.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
