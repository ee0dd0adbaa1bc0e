use eframe::egui;

use praepdrill::{
    catalog::VerbCatalog,
    gui::PraepdrillApp,
    quiz::QuizSession,
};

fn main() -> eframe::Result {
    let catalog = match VerbCatalog::load_bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load the verb catalog: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([560.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Praepdrill",
        options,
        Box::new(|cc| Ok(Box::new(PraepdrillApp::new(cc, QuizSession::new(catalog))))),
    )
}
