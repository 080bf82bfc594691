//! Example page lifecycle CLI.
//!
//! Builds a small page, runs one lifecycle over it and prints every element's
//! configuration as JSON.
//!
//! # Usage
//!
//! ```bash
//! THEOPHILE_LOG=theophile_hooks=trace,theophile_config=debug theophile-demo
//! ```
//!
//! `THEOPHILE_LOG` may also be set in a `.env` file.

use example::{ConfigPlugin, MountReportPlugin, Page, demo_page};
use theophile_core_plugins::{TracingFormat, TracingPlugin};
use theophile_hooks::HookRegistry;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let mut tracing_plugin = TracingPlugin::default().with_format(TracingFormat::Compact);
    if let Ok(filter) = std::env::var("THEOPHILE_LOG") {
        tracing_plugin = tracing_plugin.with_env_filter(filter);
    }

    let hooks = HookRegistry::<Page>::new();
    let installed = hooks
        .add_plugin(tracing_plugin)
        .and_then(|()| hooks.add_plugin(ConfigPlugin::default()))
        .and_then(|()| hooks.add_plugin(MountReportPlugin));
    if let Err(e) = installed {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let page = demo_page();
    match hooks.exec(&page).await {
        Ok(result) => tracing::info!(
            hooks = result.hooks_invoked,
            duration = ?result.duration,
            "lifecycle complete"
        ),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    page.root.walk(&mut |element| {
        match serde_json::to_string(&element.config_snapshot()) {
            Ok(json) => println!("<{}> {json}", element.tag),
            Err(e) => eprintln!("Error: cannot serialize <{}>: {e}", element.tag),
        }
    });
}
