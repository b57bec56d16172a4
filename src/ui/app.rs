//! Main application for the Cubic GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Mark;
use crate::eval::HeuristicKind;
use crate::rules::GameStatus;

use super::board_view::BoardView;
use super::game_state::{GameMode, GameResult, GameState, MAX_UI_DEPTH};
use super::theme::*;

/// Main Cubic application
pub struct CubicApp {
    state: GameState,
    board_view: BoardView,
    show_analysis: bool,
}

impl Default for CubicApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_analysis: true,
        }
    }
}

impl CubicApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start a new game in `mode`, keeping the AI settings
    fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::with_config(mode, self.state.config);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI - play X)").clicked() {
                        self.new_game(GameMode::PvE { human: Mark::X });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI - play O)").clicked() {
                        self.new_game(GameMode::PvE { human: Mark::O });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_analysis, "AI Analysis (A)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("vs AI - You: {human}"),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info, settings and analysis
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(12.0);
                    self.render_title_card(ui);
                    ui.add_space(12.0);

                    self.render_turn_card(ui);
                    ui.add_space(10.0);

                    self.render_timer_card(ui);
                    ui.add_space(10.0);

                    self.render_settings_card(ui);
                    ui.add_space(10.0);

                    self.render_actions_card(ui);

                    if self.show_analysis {
                        ui.add_space(10.0);
                        self.render_analysis_card(ui);
                    }

                    if let Some(result) = self.state.game_over {
                        ui.add_space(10.0);
                        if self.render_game_over_card(ui, &result) {
                            self.state.reset();
                        }
                    }

                    if let Some(msg) = &self.state.message {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, msg);
                    }
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn card_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_MARK));
            ui.label(RichText::new("O").size(20.0).strong().color(O_MARK));
            ui.add_space(4.0);
            ui.label(RichText::new("CUBIC").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("4x4x4 tic-tac-toe").size(11.0).color(TEXT_MUTED));
        });
    }

    fn mark_color(mark: Mark) -> egui::Color32 {
        match mark {
            Mark::X => X_MARK,
            Mark::O => O_MARK,
            Mark::Empty => TEXT_MUTED,
        }
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, BUTTON_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(28.0),
                    Self::mark_color(turn),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("{turn} to move")).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Waiting for AI", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "TIMER");

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 5.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render AI settings card
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "AI SETTINGS");
            let config = &mut self.state.config;

            ui.label(RichText::new("Heuristic").size(11.0).color(TEXT_SECONDARY));
            ui.horizontal(|ui| {
                for kind in HeuristicKind::ALL {
                    ui.radio_value(&mut config.heuristic, kind, kind.name());
                }
            });
            ui.add_space(4.0);

            ui.checkbox(&mut config.alpha_beta, "Alpha-beta pruning");
            ui.checkbox(&mut config.transposition, "Transposition table");
            ui.checkbox(&mut config.symmetry_reduction, "Symmetry reduction");
            ui.checkbox(&mut config.heuristic_reduction, "Heuristic reduction");
            ui.add_space(4.0);

            ui.add(egui::Slider::new(&mut config.depth, 1..=MAX_UI_DEPTH).text("Depth"));
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "ACTIONS");

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui.add(egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.state.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    if ui.add(egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.state.reset();
                    }
                });

                if self.state.mode == GameMode::PvP {
                    ui.add_space(4.0);
                    btn_frame.show(ui, |ui| {
                        if ui.add(egui::Label::new(RichText::new("Hint").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                            self.state.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.state.move_count())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render AI analysis card
    fn render_analysis_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "AI ANALYSIS");

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };
            let stats = &result.stats;

            match result.best_move {
                Some(pos) => {
                    ui.label(
                        RichText::new(format!("Layer {}, Row {}, Col {}", pos.layer, pos.row, pos.col))
                            .size(13.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
                None => {
                    ui.label(RichText::new("No move").size(13.0).color(TEXT_MUTED));
                }
            }
            ui.add_space(4.0);

            egui::Grid::new("analysis_grid").num_columns(2).spacing([12.0, 2.0]).show(ui, |ui| {
                let rows = [
                    ("Score", format!("{:.1}", result.score)),
                    ("Nodes", stats.nodes_explored.to_string()),
                    ("Pruned", stats.nodes_pruned.to_string()),
                    ("TT hits", format!("{} ({:.1}%)", stats.tt_hits, stats.tt_hit_rate)),
                    ("Symmetry hits", stats.symmetry_hits.to_string()),
                    ("Pruning", format!("{:.1}%", stats.pruning_ratio() * 100.0)),
                    ("Time", format!("{:.1}ms", stats.elapsed_ms())),
                    ("Depth", stats.depth.to_string()),
                    ("Heuristic", stats.heuristic.to_string()),
                ];
                for (name, value) in rows {
                    ui.label(RichText::new(name).size(10.0).color(TEXT_MUTED));
                    ui.label(RichText::new(value).size(10.0).color(TEXT_SECONDARY));
                    ui.end_row();
                }
            });

            ui.add_space(4.0);
            ui.label(RichText::new(stats.algorithm_name()).size(10.0).color(TIMER_NORMAL));
        });
    }

    /// Render game over card; returns true when a new game is requested
    fn render_game_over_card(&self, ui: &mut egui::Ui, result: &GameResult) -> bool {
        let mut new_game = false;

        let headline = match result.status {
            GameStatus::XWins => "X WINS!".to_string(),
            GameStatus::OWins => "O WINS!".to_string(),
            GameStatus::Draw | GameStatus::Ongoing => "DRAW".to_string(),
        };
        let accent = result.status.winner().map_or(TEXT_SECONDARY, Self::mark_color);

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(accent));

                    if let Some(line) = &result.winning_line {
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("by {}", line.describe())).size(11.0).color(TEXT_SECONDARY));
                    }

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                                .clicked()
                            {
                                new_game = true;
                            }
                        });
                });
            });

        new_game
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                let winning_line = self.state.game_over.and_then(|r| r.winning_line);

                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.current_turn,
                    self.state.suggested_move,
                    winning_line.as_ref(),
                    self.state.game_over.is_some(),
                );

                if let Some(pos) = clicked {
                    if let Err(err) = self.state.try_place(pos) {
                        self.state.message = Some(err.to_string());
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // A - Toggle analysis card
            if i.key_pressed(egui::Key::A) {
                self.show_analysis = !self.show_analysis;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for CubicApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
