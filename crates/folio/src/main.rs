mod logging;
mod page;
mod typewriter;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_config::Config;
use folio_core::{Rgb, Section};
use log::info;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::page::Page;
use crate::typewriter::Typewriter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    match logging::init(&config) {
        Ok(Some(path)) => info!("logging to {}", path.display()),
        Ok(None) => {}
        Err(err) => eprintln!("warning: logging disabled: {err:#}"),
    }

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Scrollable page of sections.
    page: Page,
    /// Hero tagline.
    tagline: Typewriter,
    /// Name shown in the hero heading.
    name: String,
    /// Time between refreshes.
    frame_interval: Duration,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            page: Page::new(&config),
            tagline: Typewriter::new(config.tagline.clone(), config.typing_interval()),
            name: config.name.clone(),
            frame_interval: config.frame_interval(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        info!("started");
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        info!("stopped");
        Ok(())
    }

    /// Renders the user interface. Each call is one animation refresh.
    fn render(&mut self, frame: &mut Frame) {
        let [nav_area, page_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        // Reinitialize if dimensions changed, then step every mounted section
        self.page.set_viewport(page_area.width, page_area.height);
        self.page.tick();
        self.page.render(frame, page_area);

        for section in Section::ALL {
            if let Some(rows) = self.page.visible_rows(section) {
                self.render_heading(frame, page_area, section, rows);
            }
        }

        frame.render_widget(self.nav_bar(), nav_area);
        frame.render_widget(help_line(), help_area);
    }

    /// Draw a section's heading lines if they are on screen.
    fn render_heading(
        &self,
        frame: &mut Frame,
        page_area: Rect,
        section: Section,
        rows: page::VisibleRows,
    ) {
        let accent: Color = section.field_config().particle_color.into();
        let middle = page_area.height / 2;

        let lines: Vec<(u16, Line)> = match section {
            Section::Hero => {
                let mut lines = Vec::new();
                if !self.name.is_empty() {
                    lines.push((
                        middle.saturating_sub(1),
                        Line::from(vec![
                            Span::raw(format!("{} ", section.title())).bold().white(),
                            Span::raw(self.name.clone()).bold().fg(accent),
                        ]),
                    ));
                }
                let cursor = if self.tagline.is_done() { "" } else { "▌" };
                lines.push((
                    middle + 1,
                    Line::from(format!("{}{}", self.tagline.visible(), cursor))
                        .style(Style::new().fg(Color::from(Rgb::new(219, 234, 254)))),
                ));
                lines
            }
            _ => vec![
                (
                    middle.saturating_sub(1),
                    Line::from(section.title()).bold().white(),
                ),
                (
                    middle + 1,
                    Line::from(format!("{} / {}", section.index() + 1, Section::ALL.len()))
                        .fg(accent),
                ),
            ],
        };

        for (row, line) in lines {
            if row < rows.start || row >= rows.end {
                continue;
            }
            let y = page_area.y + rows.screen_row + (row - rows.start);
            let area = Rect::new(page_area.x, y, page_area.width, 1);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        }
    }

    /// Section links with the current one highlighted.
    fn nav_bar(&self) -> Line<'static> {
        let current = self.page.current_section();
        let spans: Vec<Span> = Section::ALL
            .into_iter()
            .flat_map(|section| {
                let label = Span::raw(section.label());
                let label = if section == current {
                    label
                        .bold()
                        .fg(Color::from(section.field_config().particle_color))
                } else {
                    label.dark_gray()
                };
                [label, Span::raw("  ")]
            })
            .collect();
        Line::from(spans).centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so animation keeps running.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                // Picked up by the next render
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('j') | KeyCode::Down) => self.page.scroll_by(1),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.page.scroll_by(-1),
            (_, KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::PageDown) => {
                self.page.next_section()
            }
            (_, KeyCode::Char('p') | KeyCode::PageUp) => self.page.prev_section(),
            (_, KeyCode::Char('g') | KeyCode::Home) => self.page.top(),
            (_, KeyCode::Char('G') | KeyCode::End) => self.page.bottom(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Key hints shown at the bottom.
fn help_line() -> Line<'static> {
    let key = |k: &'static str| k.bold().cyan();
    Line::from(vec![
        key("j/k"),
        " scroll  ".dark_gray(),
        key("n/p"),
        " section  ".dark_gray(),
        key("g/G"),
        " top/bottom  ".dark_gray(),
        key("q"),
        " quit".dark_gray(),
    ])
    .centered()
}
