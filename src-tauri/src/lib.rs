//! CatMap Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - api: Admin backend boundary (HTTP client + wire normalization)
//! - commands: Tauri command handlers

use tauri::Manager;

mod api;
mod commands;
mod config;
mod domain;

use api::HttpAdminApi;
use config::ApiConfig;

/// Application state shared across commands
pub struct AppState {
    pub api: HttpAdminApi,
}

pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    // Focus the existing window when a new instance tries to start
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(
                app_handle.path().app_log_dir().expect("failed to get log dir"),
                "CatMap",
            )
            .expect("failed to init rolling logger");

            eprintln!(
                "[{}] App setup starting",
                chrono::Local::now().format("%H:%M:%S%.3f")
            );

            let config = ApiConfig::from_env();
            log::info!("admin backend at {}", config.base_url);

            let api = HttpAdminApi::new(config)?;
            app.manage(AppState { api });

            eprintln!(
                "[{}] State managed, app will start immediately",
                chrono::Local::now().format("%H:%M:%S%.3f")
            );
            let _ = rolling_logger::info("App setup complete");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Taxonomies
            commands::get_our_categories,
            commands::get_vendor_categories,
            // Mappings
            commands::get_mapped_categories,
            commands::map_vendor_category,
            commands::unmap_vendor_category,
            // Vendors
            commands::get_vendor_list,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
