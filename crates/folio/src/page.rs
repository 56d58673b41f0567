//! The scrollable portfolio page.
//!
//! Every section is one viewport tall. Sections that intersect the viewport
//! are mounted (their animation loops run); sections scrolled out of view
//! are unmounted and their loops dropped.

use folio_background::{
    Animation, AnimationLoop, CanvasPainter, CodeRainField, DisplayList, ParticleField,
    SurfaceSize, Viewport,
};
use folio_config::Config;
use folio_core::{FieldConfig, Section};
use log::debug;
use ratatui::{Frame, layout::Rect};

/// One running background layer and the surface it draws on.
#[derive(Debug)]
struct Layer {
    animation_loop: AnimationLoop<Box<dyn Animation>>,
    surface: DisplayList,
}

impl Layer {
    fn start(animation: Box<dyn Animation>, size: SurfaceSize) -> Option<Self> {
        AnimationLoop::start(animation, Some(size)).map(|animation_loop| Self {
            animation_loop,
            surface: DisplayList::new(),
        })
    }
}

/// A section and, while it is on screen, its running layers.
#[derive(Debug)]
pub struct SectionView {
    section: Section,
    field: FieldConfig,
    mounted: bool,
    layers: Vec<Layer>,
}

impl SectionView {
    fn new(section: Section, field: FieldConfig) -> Self {
        Self {
            section,
            field,
            mounted: false,
            layers: Vec::new(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Frames stepped by each running layer, bottom layer first.
    pub fn layer_frames(&self) -> Vec<u64> {
        self.layers
            .iter()
            .map(|layer| layer.animation_loop.frames())
            .collect()
    }

    fn mount(&mut self, size: SurfaceSize, code_rain: bool, seed: Option<u64>) {
        let base = self.section.index() as u64 * 2;
        let mut animations: Vec<Box<dyn Animation>> = Vec::new();

        if code_rain && self.section.has_code_rain() {
            animations.push(match seed {
                Some(seed) => Box::new(CodeRainField::seeded(seed.wrapping_add(base + 1))),
                None => Box::new(CodeRainField::new()),
            });
        }
        animations.push(match seed {
            Some(seed) => Box::new(ParticleField::seeded(self.field, seed.wrapping_add(base))),
            None => Box::new(ParticleField::new(self.field)),
        });

        self.layers = animations
            .into_iter()
            .filter_map(|animation| Layer::start(animation, size))
            .collect();
        self.mounted = true;
        debug!(
            "mounted {} with {} layers",
            self.section.label(),
            self.layers.len()
        );
    }

    fn unmount(&mut self) {
        // Dropping a loop stops it
        self.layers.clear();
        self.mounted = false;
        debug!("unmounted {}", self.section.label());
    }

    fn resize(&mut self, size: SurfaceSize, code_rain: bool, seed: Option<u64>) {
        if self.mounted && self.layers.is_empty() {
            // Mounted without a usable surface; try again at the new size
            self.mount(size, code_rain, seed);
            return;
        }
        for layer in &mut self.layers {
            layer.animation_loop.resize(size);
        }
    }

    fn tick(&mut self) {
        for layer in &mut self.layers {
            layer.animation_loop.tick(&mut layer.surface);
        }
    }
}

/// Rows of a section that are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRows {
    /// First visible row, relative to the section top.
    pub start: u16,
    /// One past the last visible row, relative to the section top.
    pub end: u16,
    /// Screen row (relative to the page area) where `start` is drawn.
    pub screen_row: u16,
}

/// Scroll state and section views.
#[derive(Debug)]
pub struct Page {
    sections: Vec<SectionView>,
    /// Scroll offset in rows from the page top.
    scroll: u32,
    cols: u16,
    rows: u16,
    cell_width_px: f64,
    cell_height_px: f64,
    code_rain: bool,
    seed: Option<u64>,
}

impl Page {
    pub fn new(config: &Config) -> Self {
        let sections = Section::ALL
            .into_iter()
            .map(|section| SectionView::new(section, config.field_config(section)))
            .collect();
        Self {
            sections,
            scroll: 0,
            cols: 0,
            rows: 0,
            cell_width_px: config.cell_width_px,
            cell_height_px: config.cell_height_px,
            code_rain: config.code_rain,
            seed: config.seed,
        }
    }

    pub fn sections(&self) -> &[SectionView] {
        &self.sections
    }

    /// Virtual pixel size of every section's drawing surface.
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.cols as f64 * self.cell_width_px,
            self.rows as f64 * self.cell_height_px,
        )
    }

    fn max_scroll(&self) -> u32 {
        (Section::ALL.len() as u32 - 1) * self.rows as u32
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    /// The section filling most of the viewport.
    pub fn current_section(&self) -> Section {
        if self.rows == 0 {
            return Section::Hero;
        }
        let rows = self.rows as u32;
        let index = ((self.scroll + rows / 2) / rows) as usize;
        Section::ALL[index.min(Section::ALL.len() - 1)]
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = self.scroll as i64 + delta as i64;
        self.scroll = target.clamp(0, self.max_scroll() as i64) as u32;
        self.update_mounts();
    }

    pub fn jump_to(&mut self, section: Section) {
        self.scroll = (section.index() as u32 * self.rows as u32).min(self.max_scroll());
        self.update_mounts();
    }

    pub fn next_section(&mut self) {
        self.jump_to(self.current_section().next());
    }

    pub fn prev_section(&mut self) {
        self.jump_to(self.current_section().prev());
    }

    pub fn top(&mut self) {
        self.jump_to(Section::Hero);
    }

    pub fn bottom(&mut self) {
        self.jump_to(Section::Contact);
    }

    /// Match the viewport to the page area, regenerating every mounted
    /// layer when the size changed.
    pub fn set_viewport(&mut self, cols: u16, rows: u16) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        let section = self.current_section();
        debug!("viewport {}x{} -> {}x{}", self.cols, self.rows, cols, rows);
        self.cols = cols;
        self.rows = rows;
        self.scroll = (section.index() as u32 * rows as u32).min(self.max_scroll());

        let size = self.surface_size();
        for view in &mut self.sections {
            view.resize(size, self.code_rain, self.seed);
        }
        self.update_mounts();
    }

    /// Visible rows of `section`, if any.
    pub fn visible_rows(&self, section: Section) -> Option<VisibleRows> {
        if self.rows == 0 {
            return None;
        }
        let rows = self.rows as u32;
        let top = section.index() as u32 * rows;
        let start = top.max(self.scroll);
        let end = (top + rows).min(self.scroll + rows);
        (start < end).then(|| VisibleRows {
            start: (start - top) as u16,
            end: (end - top) as u16,
            screen_row: (start - self.scroll) as u16,
        })
    }

    fn update_mounts(&mut self) {
        let size = self.surface_size();
        let visible: Vec<bool> = Section::ALL
            .iter()
            .map(|&section| self.visible_rows(section).is_some())
            .collect();

        for (view, visible) in self.sections.iter_mut().zip(visible) {
            match (visible, view.mounted) {
                (true, false) => view.mount(size, self.code_rain, self.seed),
                (false, true) => view.unmount(),
                _ => {}
            }
        }
    }

    /// Step every mounted section once.
    pub fn tick(&mut self) {
        for view in self.sections.iter_mut().filter(|view| view.mounted) {
            view.tick();
        }
    }

    /// Paint the visible section backgrounds into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = self.cols as f64 * self.cell_width_px;
        for view in &self.sections {
            let Some(rows) = self.visible_rows(view.section) else {
                continue;
            };
            let slice = Rect::new(
                area.x,
                area.y + rows.screen_row,
                area.width,
                rows.end - rows.start,
            );
            let viewport = Viewport::new(
                width,
                rows.start as f64 * self.cell_height_px,
                rows.end as f64 * self.cell_height_px,
            );
            let painter = view
                .layers
                .iter()
                .fold(CanvasPainter::new(viewport), |painter, layer| {
                    painter.layer(&layer.surface)
                });
            frame.render_widget(painter, slice);
        }
    }
}
