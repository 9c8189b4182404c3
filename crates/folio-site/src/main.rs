//! Entry point for the Folio desktop app.

use std::process::ExitCode;

use clap::Parser;
use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};
use folio_core::content::PROFILE;
use folio_logging::{FolioSubscriberBuilder, LogConfig};
use folio_site::components::app::App;
use folio_site::config::{set_launch_config, Args, SiteConfig};
use folio_site::{FONT_LINK, SITE_CSS};

fn main() -> ExitCode {
    let args = Args::parse();
    let log_config = LogConfig::desktop(&args.log_level, args.log_dir.clone());
    // Returning from main drops the guard, which flushes the log file.
    let _log_guard = FolioSubscriberBuilder::new().with_config(log_config).init();

    let config = match SiteConfig::from_env(args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("folio: {e}");
            return ExitCode::from(2);
        }
    };

    let window_title = format!("{} | Portfolio", PROFILE.name);
    tracing::info!(
        route = %config.initial_route,
        theme = %config.theme,
        animate = config.animate,
        "Starting {}",
        window_title
    );

    let geometry = config.window;
    let mut wb = WindowBuilder::new()
        .with_title(&window_title)
        .with_maximized(false)
        .with_inner_size(LogicalSize::new(geometry.width, geometry.height));

    if let (Some(x), Some(y)) = (geometry.x, geometry.y) {
        wb = wb.with_position(LogicalPosition::new(x, y));
    }

    set_launch_config(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(r#"{FONT_LINK}<style>{SITE_CSS}</style>"#)),
        )
        .launch(App);

    ExitCode::SUCCESS
}
