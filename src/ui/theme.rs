//! Theme constants for the Cubic GUI

use egui::Color32;

// Layer grid colors - cool slate tones
pub const LAYER_BG: Color32 = Color32::from_rgb(214, 222, 235);
pub const LAYER_BORDER: Color32 = Color32::from_rgb(96, 110, 140);
pub const GRID_LINE: Color32 = Color32::from_rgb(130, 142, 168);
pub const LAYER_LABEL: Color32 = Color32::from_rgb(200, 205, 215);
pub const CENTER_CELL: Color32 = Color32::from_rgb(200, 210, 228);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(220, 70, 70);
pub const O_MARK: Color32 = Color32::from_rgb(60, 110, 220);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 190, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const SUGGESTION: Color32 = Color32::from_rgb(150, 90, 210);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 70)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const LAYER_GAP: f32 = 28.0;
pub const LAYER_LABEL_HEIGHT: f32 = 20.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_STROKE: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
