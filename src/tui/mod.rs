//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel for the five model inputs (peak RFD,
//! duration, k_RFD, a, d0), then renders the predicted values and the decline
//! curve. Every keypress rebuilds the outputs from the current inputs; no
//! model state lives outside `SimConfig`.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{run_model, RunOutput};
use crate::domain::SimConfig;
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::RfdPlottersChart;

/// Settings fields in display order.
const FIELD_COUNT: usize = 5;

/// Start the TUI.
pub fn run(config: SimConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: SimConfig,
    selected_field: usize,
    editing: bool,
    value_input: String,
    status: String,
    run: RunOutput,
}

impl App {
    fn new(config: SimConfig) -> Self {
        let run = run_model(&config);
        Self {
            config,
            selected_field: 0,
            editing: false,
            value_input: String::new(),
            status: "Ready.".to_string(),
            run,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        if self.editing {
            return self.handle_value_edit(code);
        }

        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < FIELD_COUNT - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1.0),
            KeyCode::Right => self.adjust_field(1.0),
            KeyCode::Enter => {
                self.editing = true;
                self.value_input.clear();
                self.status = format!(
                    "Editing {} (type a number, Enter to apply, Esc to cancel).",
                    field_name(self.selected_field)
                );
            }
            KeyCode::Char('s') => {
                let path = std::path::Path::new("rfd_curve.json");
                match crate::io::curve::write_curve_json(path, &self.config, &self.run) {
                    Ok(()) => self.status = format!("Wrote curve JSON: {}", path.display()),
                    Err(err) => self.status = format!("Curve write failed: {err}"),
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn handle_value_edit(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Esc => {
                self.editing = false;
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing = false;
                self.apply_value_input();
            }
            KeyCode::Backspace => {
                self.value_input.pop();
            }
            KeyCode::Char(c) => {
                if c.is_ascii_digit() || c == '.' {
                    self.value_input.push(c);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn apply_value_input(&mut self) {
        let trimmed = self.value_input.trim();
        let value: f64 = match trimmed.parse() {
            Ok(v) => v,
            Err(e) => {
                self.status = format!("Invalid number '{trimmed}': {e}");
                return;
            }
        };
        self.set_field(value);
        self.regenerate();
    }

    /// Step the selected field by its widget increment, clamped to its range.
    ///
    /// Per-field steps: peak ±100, duration ±1, k_RFD ±0.05, a ±0.05, d0 ±0.5.
    fn adjust_field(&mut self, direction: f64) {
        let current = self.get_field();
        let step = match self.selected_field {
            0 => 100.0,
            1 => 1.0,
            2 => 0.05,
            3 => 0.05,
            4 => 0.5,
            _ => return,
        };
        self.set_field(current + direction * step);
        self.regenerate();
    }

    fn get_field(&self) -> f64 {
        match self.selected_field {
            0 => self.config.params.rfd_peak,
            1 => self.config.duration,
            2 => self.config.params.k_rfd,
            3 => self.config.params.a,
            4 => self.config.params.d0,
            _ => 0.0,
        }
    }

    fn set_field(&mut self, value: f64) {
        match self.selected_field {
            0 => self.config.params.rfd_peak = value.max(0.0),
            1 => {
                self.config.duration = value.clamp(self.config.domain.start, self.config.domain.end)
            }
            2 => self.config.params.k_rfd = value.clamp(0.0, 1.0),
            3 => self.config.params.a = value.max(0.0),
            4 => self.config.params.d0 = value.max(0.0),
            _ => {}
        }
    }

    fn regenerate(&mut self) {
        self.run = run_model(&self.config);
        self.status = format!(
            "{} = {}",
            field_name(self.selected_field),
            fmt_field(self.selected_field, self.get_field())
        );
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("rfdsim", Style::default().fg(Color::Cyan)),
            Span::raw(" — RFD decline after aerobic exercise"),
        ]));

        lines.push(Line::from(Span::styled(
            format!(
                "peak: {:.1} N/s | duration: {:.1} min | predicted: {:.1} N/s | loss: {:.1}%",
                self.config.params.rfd_peak,
                self.config.duration,
                self.run.prediction.rfd_pred,
                self.run.prediction.loss_percent,
            ),
            Style::default().fg(Color::Gray),
        )));

        lines.push(Line::from(Span::styled(
            crate::report::format_params_caption(&self.config.params),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(9)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_settings(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("Predicted Force Development Decline")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (x_bounds, y_bounds) = chart_bounds(&self.run.curve, &self.config);

        let widget = RfdPlottersChart {
            curve: &self.run.curve,
            marker_duration: self.config.duration,
            marker_rfd: self.run.prediction.rfd_pred,
            x_bounds,
            y_bounds,
            x_label: "duration (min)",
            y_label: "RFD (N/s)",
        };

        frame.render_widget(widget, inner);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut items = Vec::with_capacity(FIELD_COUNT);
        for field in 0..FIELD_COUNT {
            let value = match field {
                0 => self.config.params.rfd_peak,
                1 => self.config.duration,
                2 => self.config.params.k_rfd,
                3 => self.config.params.a,
                4 => self.config.params.d0,
                _ => unreachable!(),
            };
            items.push(ListItem::new(format!(
                "{}: {}",
                field_name(field),
                fmt_field(field, value)
            )));
        }

        let list = List::new(items)
            .block(Block::default().title("Model Inputs").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing {
            let hint = Paragraph::new(format!(
                "{} = {}_",
                field_name(self.selected_field),
                self.value_input
            ))
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter type value  s save curve  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn field_name(field: usize) -> &'static str {
    match field {
        0 => "Peak RFD (N/s)",
        1 => "Duration (min)",
        2 => "Scaling factor k_RFD",
        3 => "Rate constant a",
        4 => "Onset time d0 (min)",
        _ => "?",
    }
}

fn fmt_field(field: usize, value: f64) -> String {
    match field {
        // Fractions get two decimals, everything else one.
        2 | 3 => format!("{value:.2}"),
        _ => format!("{value:.1}"),
    }
}

/// Chart bounds from the sampled curve, padded slightly on the y-axis.
fn chart_bounds(curve: &[(f64, f64)], config: &SimConfig) -> ([f64; 2], [f64; 2]) {
    let x_bounds = [config.domain.start, config.domain.end];

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in curve {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    let y_bounds = [(y_min - pad).max(0.0), y_max + pad];

    (x_bounds, y_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CurveDomain, ModelParams};

    fn config() -> SimConfig {
        SimConfig {
            params: ModelParams::defaults(),
            duration: 20.0,
            domain: CurveDomain::defaults(),
            plot: true,
            plot_width: 100,
            plot_height: 25,
            export_csv: None,
            export_curve: None,
        }
    }

    #[test]
    fn adjust_clamps_k_rfd_to_unit_interval() {
        let mut app = App::new(config());
        app.selected_field = 2;
        for _ in 0..10 {
            app.adjust_field(1.0);
        }
        assert!((app.config.params.k_rfd - 1.0).abs() < 1e-12);
        for _ in 0..40 {
            app.adjust_field(-1.0);
        }
        assert_eq!(app.config.params.k_rfd, 0.0);
    }

    #[test]
    fn adjust_keeps_duration_within_domain() {
        let mut app = App::new(config());
        app.selected_field = 1;
        for _ in 0..100 {
            app.adjust_field(1.0);
        }
        assert_eq!(app.config.duration, 60.0);
        for _ in 0..200 {
            app.adjust_field(-1.0);
        }
        assert_eq!(app.config.duration, 0.0);
    }

    #[test]
    fn adjust_reruns_model() {
        let mut app = App::new(config());
        let before = app.run.prediction;
        app.selected_field = 1;
        app.adjust_field(1.0);
        assert_ne!(app.run.prediction, before);
    }

    #[test]
    fn typed_value_applies_to_selected_field() {
        let mut app = App::new(config());
        app.selected_field = 0;
        app.value_input = "12000".to_string();
        app.apply_value_input();
        assert_eq!(app.config.params.rfd_peak, 12_000.0);
        assert_eq!(app.run.curve[0].1, 12_000.0);
    }

    #[test]
    fn chart_bounds_cover_curve() {
        let cfg = config();
        let run = crate::app::pipeline::run_model(&cfg);
        let (x, y) = chart_bounds(&run.curve, &cfg);
        assert_eq!(x, [0.0, 60.0]);
        assert!(y[0] < cfg.params.rfd_peak * (1.0 - cfg.params.k_rfd) + 1.0);
        assert!(y[1] > cfg.params.rfd_peak);
    }
}
