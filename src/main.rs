mod app;
mod config;
mod error;
mod guide;
mod logging;
mod persist;
mod responder;
mod session;
mod theme;
mod ui;
mod workflow;

use app::GuideDeskApp;
use config::Config;
use eframe::egui;
use guide::store::GuideStore;
use responder::EchoResponder;
use session::store::SessionStore;
use tracing::info;
use workflow::ViewModel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = std::env::current_dir()?;
    let config = Config::load(&workspace)?;
    logging::init_logging(&config.logging.level);

    let paths = config.storage_paths(&workspace);
    let sessions = SessionStore::open(&paths.history_dir)?;
    let guides = GuideStore::open(&paths.guide_file, &paths.attachment_dir)?;
    info!(
        history = %sessions.dir().display(),
        guides = %guides.path().display(),
        "opened stores"
    );

    let font_path = config.font_path(&workspace);
    let app = GuideDeskApp::new(
        sessions,
        guides,
        Box::new(EchoResponder),
        ViewModel::new(config.desk.counselor_name.clone()),
        config::export_dir(&workspace),
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("상담 관리 시스템")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 600.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "guidedesk",
        native_options,
        Box::new(move |creation_context| {
            app.setup(&creation_context.egui_ctx, font_path.as_deref());
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
