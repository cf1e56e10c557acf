//! Stateless egui helpers shared by every page section: palette, gradient
//! text, glass panes, pills and avatar fallbacks.

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, Pos2, Rect, Rounding, Stroke};

// ─── Palette ──────────────────────────────────────────────────────────────────

pub const BACKGROUND: Color32 = Color32::from_rgb(2, 6, 23);
pub const CARD: Color32 = Color32::from_rgb(15, 23, 42);
pub const CARD_TOP: Color32 = Color32::from_rgb(8, 12, 30);
pub const GLASS: Color32 = Color32::from_rgba_premultiplied(12, 12, 14, 14);
pub const BORDER: Color32 = Color32::from_rgba_premultiplied(38, 38, 38, 38);
pub const TEXT: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(178, 181, 194);
pub const TEXT_FAINT: Color32 = Color32::from_rgb(110, 114, 130);

/// Fuchsia → pink → amber accent stops.
pub const ACCENT: [Color32; 3] = [
    Color32::from_rgb(217, 70, 239),
    Color32::from_rgb(236, 72, 153),
    Color32::from_rgb(251, 191, 36),
];

// ─── Colour math ──────────────────────────────────────────────────────────────

/// Linear blend of two opaque colours, `t` in 0..=1.
pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}

/// Sample the accent gradient at `t` in 0..=1.
pub fn accent_at(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        mix(ACCENT[0], ACCENT[1], t * 2.0)
    } else {
        mix(ACCENT[1], ACCENT[2], (t - 0.5) * 2.0)
    }
}

// ─── Text ─────────────────────────────────────────────────────────────────────

/// Append `text` to `job` with each character tinted along the accent
/// gradient.
pub fn append_gradient(job: &mut LayoutJob, text: &str, font_id: FontId) {
    let count = text.chars().count().max(2) - 1;
    for (i, ch) in text.chars().enumerate() {
        let mut buf = [0u8; 4];
        job.append(
            ch.encode_utf8(&mut buf),
            0.0,
            TextFormat {
                font_id: font_id.clone(),
                color: accent_at(i as f32 / count as f32),
                ..Default::default()
            },
        );
    }
}

/// Heading made of plain text around one gradient phrase.
pub fn accent_heading(before: &str, accent: &str, after: &str, size: f32) -> LayoutJob {
    let font_id = FontId::proportional(size);
    let plain = TextFormat {
        font_id: font_id.clone(),
        color: TEXT,
        ..Default::default()
    };
    let mut job = LayoutJob::default();
    if !before.is_empty() {
        job.append(before, 0.0, plain.clone());
    }
    append_gradient(&mut job, accent, font_id);
    if !after.is_empty() {
        job.append(after, 0.0, plain);
    }
    job
}

pub fn gradient_text(text: &str, size: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    append_gradient(&mut job, text, FontId::proportional(size));
    job
}

// ─── Containers ───────────────────────────────────────────────────────────────

/// Translucent rounded pane with a hairline border.
pub fn glass_pane<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(GLASS)
        .stroke(Stroke::new(1.0, BORDER))
        .rounding(Rounding::same(16.0))
        .inner_margin(24.0)
        .show(ui, add_contents)
}

/// Small rounded tag.
pub fn pill(ui: &mut egui::Ui, text: &str) -> egui::Response {
    egui::Frame::none()
        .fill(GLASS)
        .stroke(Stroke::new(1.0, BORDER))
        .rounding(Rounding::same(999.0))
        .inner_margin(egui::Margin::symmetric(12.0, 4.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(11.0).color(TEXT_MUTED));
        })
        .response
}

/// Big number over a small caption.
pub fn metric(ui: &mut egui::Ui, label: &str, value: u32, suffix: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("{value}{suffix}"))
                .size(40.0)
                .strong()
                .color(TEXT),
        );
        ui.label(egui::RichText::new(label.to_uppercase()).size(11.0).color(TEXT_MUTED));
    });
}

// ─── Painting ─────────────────────────────────────────────────────────────────

/// Fill `rect` with the horizontal accent gradient.
pub fn paint_accent_rect(painter: &egui::Painter, rect: Rect, opacity: f32) {
    const STEPS: usize = 8;
    let mut mesh = egui::Mesh::default();
    for step in 0..=STEPS {
        let t = step as f32 / STEPS as f32;
        let x = egui::emath::lerp(rect.left()..=rect.right(), t);
        let color = accent_at(t).gamma_multiply(opacity);
        mesh.colored_vertex(Pos2::new(x, rect.top()), color);
        mesh.colored_vertex(Pos2::new(x, rect.bottom()), color);
    }
    for step in 0..STEPS as u32 {
        let i = step * 2;
        mesh.add_triangle(i, i + 1, i + 2);
        mesh.add_triangle(i + 1, i + 3, i + 2);
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Rounded square with initials, drawn when an avatar image is missing.
pub fn paint_initials(painter: &egui::Painter, rect: Rect, initials: &str, opacity: f32) {
    painter.rect_filled(rect, Rounding::same(14.0), mix(CARD, ACCENT[0], 0.35 * opacity));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        FontId::proportional(rect.height() * 0.38),
        mix(CARD, TEXT, opacity),
    );
}
