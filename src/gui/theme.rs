use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};
use egui::style::Selection;

use crate::core::presentation::SeverityTier;

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::clinic()
    }
}

impl Theme {
    pub fn clinic() -> Self {
        Self { dark: Palette::clinic_dark(), light: Palette::clinic_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent).strong()
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).muted)
    }

    pub fn error(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).high
    }

    pub fn warning(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).medium
    }

    pub fn ok(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).low
    }

    pub fn tier_color(&self, ctx: &egui::Context, tier: SeverityTier) -> Color32 {
        let palette = self.palette(ctx);
        match tier {
            SeverityTier::High => palette.high,
            SeverityTier::Medium => palette.medium,
            SeverityTier::Low => palette.low,
        }
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    panel: Color32,
    raised: Color32,
    foreground: Color32,
    muted: Color32,
    accent: Color32,
    selection: Color32,
    high: Color32,
    medium: Color32,
    low: Color32,
}

impl Palette {
    fn clinic_dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1b, 0x22, 0x2c),
            panel: Color32::from_rgb(0x22, 0x2b, 0x37),
            raised: Color32::from_rgb(0x2e, 0x39, 0x48),
            foreground: Color32::from_rgb(0xe6, 0xed, 0xf3),
            muted: Color32::from_rgb(0x8b, 0x9b, 0xad),
            accent: Color32::from_rgb(0x5c, 0xc8, 0xd7),
            selection: Color32::from_rgb(0x2f, 0x5d, 0x73),
            high: Color32::from_rgb(0xff, 0x6b, 0x6b),
            medium: Color32::from_rgb(0xff, 0xb3, 0x47),
            low: Color32::from_rgb(0x6b, 0xd4, 0x8e),
        }
    }

    fn clinic_light() -> Self {
        Self {
            background: Color32::from_rgb(0xf7, 0xf9, 0xfb),
            panel: Color32::from_rgb(0xee, 0xf2, 0xf6),
            raised: Color32::from_rgb(0xff, 0xff, 0xff),
            foreground: Color32::from_rgb(0x1f, 0x29, 0x33),
            muted: Color32::from_rgb(0x61, 0x70, 0x80),
            accent: Color32::from_rgb(0x0f, 0x7c, 0x8c),
            selection: Color32::from_rgb(0xc5, 0xe6, 0xee),
            high: Color32::from_rgb(0xc6, 0x28, 0x28),
            medium: Color32::from_rgb(0xc7, 0x6b, 0x00),
            low: Color32::from_rgb(0x2e, 0x7d, 0x32),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, egui::Theme::Dark);
    set_theme_variant(ctx, &theme.light, egui::Theme::Light);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, variant: egui::Theme) {
    let default = match variant {
        egui::Theme::Dark => Visuals::dark(),
        egui::Theme::Light => Visuals::light(),
    };

    let mut visuals = Visuals {
        selection: Selection {
            bg_fill: palette.selection,
            stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
        },
        hyperlink_color: palette.accent,
        extreme_bg_color: palette.raised,
        error_fg_color: palette.high,
        warn_fg_color: palette.medium,
        window_fill: palette.background,
        panel_fill: palette.panel,
        ..default
    };

    visuals.widgets.noninteractive.fg_stroke.color = palette.foreground;
    visuals.widgets.inactive.fg_stroke.color = palette.foreground;
    visuals.widgets.hovered.bg_stroke.color = palette.accent;
    visuals.widgets.active.bg_stroke.color = palette.accent;

    ctx.set_visuals_of(variant, visuals);
}
