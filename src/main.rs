use eframe::egui;

use brand_site::config::SiteConfig;

mod app;
mod ui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = SiteConfig::from_env().unwrap_or_else(|err| {
        log::warn!("invalid configuration ({err}), using defaults");
        SiteConfig::default()
    });
    log::info!(
        "starting: interval {}ms, {} visible cards, assets in {}",
        config.carousel.interval.as_millis(),
        config.carousel.visible,
        config.asset_dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([420.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Kamel Hothi OBE",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app::SiteApp::new(config)))
        }),
    )
}
