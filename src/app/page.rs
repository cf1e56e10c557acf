//! Page sections for `SiteApp`.
//!
//! Draws the navigation bar and, inside the central scroll area: hero,
//! impact metrics, about, speaking engagements, recommendations and footer.

use std::time::Instant;

use eframe::egui;
use egui::{Rect, RichText, Rounding, Vec2};

use brand_site::content::copy::{self, Section};
use brand_site::media::image::ImageStatus;

use super::SiteApp;
use crate::ui;

const MAX_CONTENT_WIDTH: f32 = 1120.0;
const WIDE_LAYOUT: f32 = 860.0;
const SECTION_GAP: f32 = 96.0;

impl SiteApp {
    // ── Navigation ───────────────────────────────────────────────────────────

    pub fn draw_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(ui::gradient_text(copy::MONOGRAM, 20.0));
            ui.add_space(24.0);

            for section in Section::NAV {
                let label = RichText::new(section.label()).size(14.0).color(ui::TEXT_MUTED);
                if ui.add(egui::Button::new(label).frame(false)).clicked() {
                    log::debug!("nav -> {}", section.anchor());
                    self.scroll_target = Some(section);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.hyperlink_to(RichText::new("Connect").strong(), copy::PROFILE_URL);
            });
        });
    }

    // ── Page body ────────────────────────────────────────────────────────────

    pub fn draw_page(&mut self, ui: &mut egui::Ui, now: Instant) {
        let width = ui.available_width().min(MAX_CONTENT_WIDTH);
        let margin = ((ui.available_width() - width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(margin);
            ui.vertical(|ui| {
                ui.set_width(width);
                ui.add_space(48.0);
                self.draw_hero(ui);
                ui.add_space(SECTION_GAP);
                self.section(ui, Section::Impact, |app, ui| app.draw_metrics(ui));
                ui.add_space(SECTION_GAP);
                self.section(ui, Section::About, |app, ui| app.draw_about(ui));
                ui.add_space(SECTION_GAP);
                self.section(ui, Section::Speaking, |app, ui| app.draw_speaking(ui));
                ui.add_space(SECTION_GAP);
                self.section(ui, Section::Recommendations, |app, ui| {
                    app.draw_recommendations(ui, now)
                });
                ui.add_space(SECTION_GAP);
                self.draw_footer(ui);
            });
        });
    }

    /// Draw one section and scroll to it when the nav bar asked for it.
    fn section(
        &mut self,
        ui: &mut egui::Ui,
        section: Section,
        add_contents: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        let response = ui.vertical(|ui| add_contents(self, ui)).response;
        if self.scroll_target == Some(section) {
            ui.scroll_to_rect(response.rect, Some(egui::Align::TOP));
            self.scroll_target = None;
        }
    }

    /// Two columns on wide windows, stacked otherwise.
    fn split(
        &mut self,
        ui: &mut egui::Ui,
        left: impl FnOnce(&mut Self, &mut egui::Ui),
        right: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        if ui.available_width() >= WIDE_LAYOUT {
            ui.columns(2, |cols| {
                let (first, second) = cols.split_at_mut(1);
                left(self, &mut first[0]);
                right(self, &mut second[0]);
            });
        } else {
            left(self, ui);
            ui.add_space(32.0);
            right(self, ui);
        }
    }

    // ── Hero ─────────────────────────────────────────────────────────────────

    fn draw_hero(&mut self, ui: &mut egui::Ui) {
        self.split(
            ui,
            |app, ui| {
                ui::pill(ui, &copy::HERO_TAGLINE.to_uppercase());
                ui.add_space(16.0);
                let (before, accent, after) = copy::HERO_HEADLINE;
                ui.label(ui::accent_heading(before, accent, after, 52.0));
                ui.add_space(24.0);
                ui.label(RichText::new(copy::HERO_INTRO).size(20.0).color(ui::TEXT_MUTED));
                ui.add_space(32.0);
                ui.horizontal(|ui| {
                    ui.hyperlink_to(
                        RichText::new(copy::HERO_PRIMARY_CTA).size(18.0).strong(),
                        copy::PROFILE_URL,
                    );
                    ui.add_space(24.0);
                    let secondary = egui::Button::new(
                        RichText::new(copy::HERO_SECONDARY_CTA).size(18.0).color(ui::TEXT),
                    )
                    .rounding(Rounding::same(999.0));
                    if ui.add(secondary).clicked() {
                        app.scroll_target = Some(Section::Impact);
                    }
                });
            },
            |app, ui| app.draw_profile_pane(ui),
        );
    }

    /// Profile photo with loading and missing-file states.
    fn draw_profile_pane(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width().min(384.0);
        let size = Vec2::new(width, width * 5.0 / 4.0);
        ui.vertical_centered(|ui| {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            let painter = ui.painter_at(rect.expand(4.0));
            let rounding = Rounding::same(16.0);

            painter.rect_filled(rect, rounding, ui::CARD);
            match self.images.status(&self.profile_image) {
                ImageStatus::Ready(_) => {
                    if let Some(tex) = self.textures.get(&self.profile_image.key()) {
                        painter.image(
                            tex.id(),
                            rect,
                            cover_uv(tex.size_vec2(), rect.size()),
                            egui::Color32::WHITE,
                        );
                    }
                }
                ImageStatus::Loading | ImageStatus::Unknown => {
                    centered_note(&painter, rect, "Loading...");
                }
                ImageStatus::Unavailable => {
                    centered_note(&painter, rect, copy::PROFILE_IMAGE_MISSING);
                }
            }
            painter.rect_stroke(rect, rounding, egui::Stroke::new(1.0, ui::BORDER));

            let badge = Rect::from_min_size(
                rect.min + Vec2::new(16.0, 16.0),
                Vec2::new(rect.width() - 32.0, 36.0),
            );
            painter.rect_filled(badge, Rounding::same(999.0), egui::Color32::from_black_alpha(110));
            painter.text(
                badge.center(),
                egui::Align2::CENTER_CENTER,
                copy::OWNER_NAME,
                egui::FontId::proportional(14.0),
                ui::TEXT,
            );
        });
    }

    // ── Sections ─────────────────────────────────────────────────────────────

    fn draw_metrics(&mut self, ui: &mut egui::Ui) {
        ui.columns(copy::METRICS.len(), |cols| {
            for (col, (label, value, suffix)) in cols.iter_mut().zip(copy::METRICS) {
                ui::metric(col, label, value, suffix);
            }
        });
    }

    fn draw_about(&mut self, ui: &mut egui::Ui) {
        self.split(
            ui,
            |_, ui| {
                ui::glass_pane(ui, |ui| {
                    ui.label(ui::accent_heading("About ", "Kamel", "", 34.0));
                    ui.add_space(16.0);
                    for paragraph in copy::ABOUT_PARAGRAPHS {
                        ui.label(RichText::new(paragraph).size(17.0).color(ui::TEXT_MUTED));
                        ui.add_space(12.0);
                    }
                });
            },
            |_, ui| {
                ui::glass_pane(ui, |ui| {
                    ui.label(RichText::new("Focus Themes").size(18.0).strong().color(ui::TEXT));
                    ui.add_space(10.0);
                    ui.horizontal_wrapped(|ui| {
                        for theme in copy::FOCUS_THEMES {
                            ui::pill(ui, theme);
                        }
                    });
                });
                ui.add_space(24.0);
                ui::glass_pane(ui, |ui| {
                    ui.label(RichText::new("Signature Topics").size(18.0).strong().color(ui::TEXT));
                    ui.add_space(10.0);
                    for topic in copy::SIGNATURE_TOPICS {
                        ui.label(RichText::new(topic).size(16.0).color(ui::TEXT_MUTED));
                        ui.add_space(6.0);
                    }
                });
            },
        );
    }

    fn draw_speaking(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(ui::accent_heading("Keynote & Advisory ", "Engagements", "", 40.0));
            ui.add_space(16.0);
            ui.label(RichText::new(copy::SPEAKING_INTRO).size(17.0).color(ui::TEXT_MUTED));
        });
        ui.add_space(40.0);

        let columns = if ui.available_width() >= WIDE_LAYOUT {
            copy::ENGAGEMENTS.len()
        } else {
            1
        };
        ui.columns(columns, |cols| {
            for (i, (title, body)) in copy::ENGAGEMENTS.iter().enumerate() {
                let col = &mut cols[i % columns];
                ui::glass_pane(col, |ui| {
                    ui.set_min_height(140.0);
                    ui.label(RichText::new(*title).size(18.0).strong().color(ui::TEXT));
                    ui.add_space(8.0);
                    ui.label(RichText::new(*body).size(14.0).color(ui::TEXT_MUTED));
                });
                col.add_space(16.0);
            }
        });
    }

    fn draw_recommendations(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal_wrapped(|ui| {
            ui.vertical(|ui| {
                ui.label(ui::accent_heading("LinkedIn ", "Recommendations", "", 40.0));
                ui.add_space(12.0);
                ui.label(RichText::new(copy::RECOMMENDATIONS_INTRO).size(18.0).color(ui::TEXT_MUTED));
            });
        });
        ui.hyperlink_to("View Profile \u{2197}", copy::PROFILE_URL);
        ui.add_space(48.0);

        self.split(
            ui,
            |_, ui| {
                ui.label(RichText::new(copy::RECOMMENDATIONS_BODY).size(18.0).color(ui::TEXT_MUTED));
                ui.add_space(20.0);
                ui.label(RichText::new(copy::RECOMMENDATIONS_HINT).size(15.0).color(ui::TEXT_FAINT));
                ui.add_space(20.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in copy::RECOMMENDATION_TAGS {
                        ui::pill(ui, &tag.to_uppercase());
                    }
                });
            },
            |app, ui| {
                ui.vertical_centered(|ui| app.draw_stack(ui, now));
            },
        );
    }

    fn draw_footer(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(copy::footer_line(self.today))
                    .size(12.0)
                    .color(ui::TEXT_FAINT),
            );
        });
        ui.add_space(32.0);
    }
}

/// UV rectangle that crops an image to fill `target` without distortion.
fn cover_uv(image: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        let visible = target_aspect / image_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(inset, 0.0), egui::pos2(1.0 - inset, 1.0))
    } else {
        let visible = image_aspect / target_aspect;
        let inset = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(0.0, inset), egui::pos2(1.0, 1.0 - inset))
    }
}

fn centered_note(painter: &egui::Painter, rect: Rect, text: &str) {
    let galley = painter.layout(
        text.to_string(),
        egui::FontId::proportional(14.0),
        ui::TEXT_MUTED,
        rect.width() - 48.0,
    );
    let pos = rect.center() - galley.size() / 2.0;
    painter.galley(pos, galley, ui::TEXT_MUTED);
}
