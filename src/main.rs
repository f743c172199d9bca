#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use stampprompt::app::settings::AppSettings;
use tracing_subscriber::prelude::*;

/// Overrides the `log_filter` setting when set.
const LOG_ENV_VAR: &str = "STAMPPROMPT_LOG";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "", "stampprompt")
}

fn init_logging(settings: &AppSettings) {
    let Some(proj_dirs) = project_dirs() else {
        eprintln!("No home directory found; logging disabled");
        return;
    };

    let log_dir = proj_dirs.data_dir().join("logs");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_path = log_dir.join("stampprompt.log");

    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .expect("Failed to open log file");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = file.metadata() {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                eprintln!("Failed to set log file permissions: {}", e);
            }
        }
    }

    let filter = match std::env::var(LOG_ENV_VAR) {
        Ok(directives) => tracing_subscriber::EnvFilter::builder().parse(&directives),
        Err(_) => tracing_subscriber::EnvFilter::builder().parse(&settings.log_filter),
    }
    .unwrap_or_else(|e| {
        eprintln!("Invalid log filter ({}), falling back to defaults", e);
        tracing_subscriber::EnvFilter::new(stampprompt::app::settings::DEFAULT_LOG_FILTER)
    });

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(move || file.try_clone().expect("Failed to clone file handle"))
            .with_ansi(false), // No ANSI colors in file
    );

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Bridge log crate events to tracing (eframe, egui, winit, arboard).
    // Must run after the subscriber is installed.
    tracing_log::LogTracer::init().expect("Failed to initialize log-to-tracing bridge");

    tracing::info!("Logging initialized to: {:?}", log_path);
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "Stamp Prompt crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        eprintln!("\n{}", crash_msg);

        if let Some(proj_dirs) = project_dirs() {
            let log_dir = proj_dirs.data_dir().join("logs");
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
                eprintln!("Crash log written to: {:?}", crash_log_path);
            }
        }
    }));
}

fn main() -> eframe::Result {
    // Panic hook first so even a failed logging setup leaves a trace
    setup_panic_handler();

    // Settings decide the log filter, so any problem with them is reported
    // once logging is up
    let (settings, settings_error) = match AppSettings::try_load() {
        Ok(settings) => (settings, None),
        Err(e) => (AppSettings::default(), Some(e)),
    };
    init_logging(&settings);
    if let Some(e) = settings_error {
        tracing::warn!("Ignoring settings file: {:#}", e);
    }

    tracing::info!(
        "stampprompt {} starting (theme {})",
        env!("CARGO_PKG_VERSION"),
        settings.theme
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stamp Prompt")
            .with_inner_size([560.0, 720.0])
            .with_min_inner_size([380.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stamp Prompt",
        native_options,
        Box::new(move |cc| Ok(Box::new(stampprompt::StampPromptApp::new(cc, settings)))),
    )
}
