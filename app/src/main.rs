use crate::app::App;

mod app;
mod cadence;
mod settings;
mod view;

fn main() -> eframe::Result {
    env_logger::init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sparse Life",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
