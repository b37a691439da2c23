/// `AdInsights` - Ad Insights Explorer Lite
///
/// Copyright (C) 2026 Daniel Freiermuth
///
/// This program is free software: you can redistribute it and/or modify
/// it under the terms of the GNU General Public License as published by
/// the Free Software Foundation, either version 3 of the License, or
/// (at your option) any later version.
///
/// This program is distributed in the hope that it will be useful,
/// but WITHOUT ANY WARRANTY; without even the implied warranty of
/// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
/// GNU General Public License for more details.
///
/// You should have received a copy of the GNU General Public License
/// along with this program.  If not, see <https://www.gnu.org/licenses/>.
use adinsights::config::GlobalConfig;
use adinsights::core::HttpSource;
use adinsights::ui::AdInsightsApp;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "ram-profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[derive(Parser, Debug)]
#[command(name = "adinsights")]
#[command(version)]
#[command(about = "Browse ad anomalies and word-usage insights from the analysis backend", long_about = None)]
struct Args {
    /// Base URL of the analysis backend (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Persist the effective settings to the config file
    #[arg(long)]
    save_config: bool,

    /// Path for the DHAT heap profiling output (only used when built with --features ram-profiling)
    #[cfg(feature = "ram-profiling")]
    #[arg(
        long = "profile-output",
        value_name = "PROFILE_FILE",
        default_value = "dhat-heap.json"
    )]
    profile_output: std::path::PathBuf,
}

fn main() -> eframe::Result<()> {
    // Set RUST_LOG environment variable to override (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(
        "AdInsights starting up (version {})",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    #[cfg(feature = "ram-profiling")]
    let _profiler = {
        tracing::info!("RAM profiling enabled, output: {:?}", args.profile_output);
        dhat::Profiler::builder()
            .file_name(args.profile_output.clone())
            .build()
    };

    #[cfg(feature = "cpu-profiling")]
    {
        tracing::info!("CPU profiling enabled with Tracy - run Tracy profiler to connect");
    }

    let mut config = GlobalConfig::load();
    if let Some(api_base) = args.api_base {
        tracing::info!("Using backend from command line: {api_base}");
        config.api_base = api_base;
    }
    if args.save_config {
        if let Err(e) = config.save() {
            tracing::warn!("Could not save config: {e}");
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Ad Insights Explorer Lite",
        native_options,
        Box::new(move |cc| {
            let source = HttpSource::new(&config.api_base);
            Ok(Box::new(AdInsightsApp::new(cc, source, config)))
        }),
    )
}
