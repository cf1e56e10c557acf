//! `SiteApp`: the top-level egui application state.
//!
//! This module declares the `SiteApp` struct and its `eframe::App` impl.
//! Drawing is split across the sibling sub-modules:
//!
//! - `page`      : navigation bar and the static page sections
//! - `stack_view`: the recommendation card stack and its input wiring

pub mod page;
pub mod stack_view;

use std::collections::HashMap;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use eframe::egui;

use brand_site::carousel::RotationController;
use brand_site::config::SiteConfig;
use brand_site::content::copy::{self, Section};
use brand_site::content::{self as site_content, ImageSource, Recommendation};
use brand_site::media::image::ImageLoader;

use crate::ui;

// ─── Application state ───────────────────────────────────────────────────────

pub struct SiteApp {
    pub stack: RotationController<Recommendation>,
    pub stack_view: stack_view::StackViewState,
    // Image loading
    pub images: ImageLoader,
    pub image_sources: Vec<ImageSource>,
    pub textures: HashMap<String, egui::TextureHandle>,
    pub profile_image: ImageSource,
    /// Section requested from the nav bar, scrolled to on the next frame.
    pub scroll_target: Option<Section>,
    /// Local calendar date at launch, for the footer.
    pub today: NaiveDate,
}

impl SiteApp {
    pub fn new(config: SiteConfig) -> Self {
        let recommendations = site_content::recommendations();
        let profile_image = ImageSource::parse(copy::PROFILE_IMAGE);

        let mut image_sources = vec![profile_image.clone()];
        for rec in &recommendations {
            if !image_sources.contains(&rec.image) {
                image_sources.push(rec.image.clone());
            }
        }

        let mut images = ImageLoader::new(config.asset_dir.clone());
        for source in &image_sources {
            images.request(source);
        }

        Self {
            stack: RotationController::new(recommendations, &config.carousel, Instant::now()),
            stack_view: stack_view::StackViewState::default(),
            images,
            image_sources,
            textures: HashMap::new(),
            profile_image,
            scroll_target: None,
            today: Local::now().date_naive(),
        }
    }

    /// Poll the image loader and upload finished decodes as textures.
    fn upload_textures(&mut self, ctx: &egui::Context) {
        self.images.poll();
        for source in &self.image_sources {
            let key = source.key();
            if self.textures.contains_key(&key) {
                continue;
            }
            if let Some(data) = self.images.get(source) {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [data.width as usize, data.height as usize],
                    &data.rgba,
                );
                let tex = ctx.load_texture(format!("img_{key}"), image, egui::TextureOptions::LINEAR);
                log::debug!("texture ready: {key} ({}x{})", data.width, data.height);
                self.textures.insert(key, tex);
            }
        }
        if self.images.pending_count() > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.upload_textures(ctx);

        if self.stack.tick(now) {
            log::trace!("autoplay advanced to {:?}", self.stack.current());
        }

        egui::TopBottomPanel::top("nav")
            .frame(
                egui::Frame::none()
                    .fill(ui::CARD)
                    .inner_margin(egui::Margin::symmetric(24.0, 10.0)),
            )
            .show(ctx, |ui| {
                self.draw_nav(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ui::BACKGROUND))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_page(ui, now);
                    });
            });

        if let Some(wait) = self.stack.time_until_next_advance(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
