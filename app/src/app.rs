use std::{cell::Cell, rc::Rc, time::Instant};

use eframe::{CreationContext, Frame};
use egui::{Context, Painter, Pos2, Rect, Sense, Slider, Stroke, Ui, Vec2, pos2};
use life::{Change, Coord, LifeEngine, pattern::NAMED};
use log::debug;

use crate::{
    cadence::Cadence,
    settings::{CELL_SIZE_RANGE, SPEED_RANGE, Settings},
    view::Viewport,
};

pub struct App {
    engine: LifeEngine,
    settings: Settings,
    view: Viewport,
    cadence: Cadence,
    selected: usize,
    generation: Rc<Cell<u64>>,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let settings = Settings::default();
        let generation = Rc::new(Cell::new(0));
        let mut engine = LifeEngine::new();
        let counter = generation.clone();
        engine.subscribe(move |update| {
            counter.set(update.generation);
            if update.change != Change::Stepped {
                debug!("{:?}: {} alive", update.change, update.state.population());
            }
        });
        engine.seed(NAMED[0].pattern());
        Self {
            engine,
            view: Viewport::new(settings.cell_size),
            cadence: Cadence::new(settings.interval()),
            settings,
            selected: 0,
            generation,
        }
    }

    fn start_stop(&mut self, now: Instant) {
        if self.cadence.is_running() {
            self.cadence.stop();
        } else {
            self.engine.step();
            self.cadence.start(now);
        }
    }

    fn clear_reset(&mut self) {
        if self.generation.get() > 0 {
            self.engine.reset();
        } else {
            self.engine.clear();
        }
    }

    fn controls(&mut self, ui: &mut Ui, now: Instant) {
        ui.horizontal(|ui| {
            let label = if self.cadence.is_running() { "stop" } else { "start" };
            if ui.button(label).clicked() {
                self.start_stop(now);
            }
            if ui.button("next").clicked() {
                self.engine.step();
            }
            let label = if self.generation.get() > 0 { "reset" } else { "clear" };
            if ui.button(label).clicked() {
                self.clear_reset();
            }
            if ui.button("center").clicked() {
                if let Some(centroid) = self.engine.state().centroid() {
                    self.view.centre_on(centroid);
                }
            }
            ui.separator();

            egui::ComboBox::from_id_salt("pattern")
                .selected_text(NAMED[self.selected].name)
                .show_ui(ui, |ui| {
                    for (i, named) in NAMED.iter().enumerate() {
                        ui.selectable_value(&mut self.selected, i, named.name);
                    }
                });
            if ui.button("load").clicked() {
                self.cadence.stop();
                self.engine.seed(NAMED[self.selected].pattern());
                self.view.centre_on((0., 0.));
            }
            ui.separator();

            let speed = ui.add(Slider::new(&mut self.settings.speed, SPEED_RANGE).text("speed"));
            // A drag reports a change every frame; step once when it ends.
            let settled = speed.drag_stopped() || (speed.changed() && !speed.dragged());
            if (speed.changed() || settled)
                && self.cadence.retime(self.settings.interval(), now, settled)
            {
                self.engine.step();
            }
            let mut cell_size = self.view.cell_size;
            if ui.add(Slider::new(&mut cell_size, CELL_SIZE_RANGE).text("zoom")).changed() {
                self.view.zoom_to(cell_size);
            }
            ui.separator();

            let state = self.engine.state();
            ui.label(format!("generation {}", self.generation.get()));
            ui.label(format!("{} alive, {} tracked", state.population(), state.size()));
        });
    }

    fn canvas(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas = response.rect;
        if response.dragged() {
            self.view.pan(response.drag_delta());
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.engine.toggle(self.view.to_grid(canvas, pos));
            }
        }
        self.paint(&painter, canvas);
    }

    fn paint(&self, painter: &Painter, canvas: Rect) {
        let Settings {
            line_width,
            grid_color,
            cell_color,
            ..
        } = self.settings;
        let (first, last) = self.view.visible(canvas);
        let stroke = Stroke::new(line_width, grid_color);
        for x in first.x..=last.x + 1 {
            let Pos2 { x: sx, .. } = self.view.to_screen(canvas, Coord::new(x, 0));
            painter.line_segment([pos2(sx, canvas.top()), pos2(sx, canvas.bottom())], stroke);
        }
        for y in first.y..=last.y + 1 {
            let Pos2 { y: sy, .. } = self.view.to_screen(canvas, Coord::new(0, y));
            painter.line_segment([pos2(canvas.left(), sy), pos2(canvas.right(), sy)], stroke);
        }
        let visible = |c: &Coord| (first.x..=last.x).contains(&c.x) && (first.y..=last.y).contains(&c.y);
        for c in self.engine.state().alive_cells().filter(visible) {
            let rect = self.view.cell_rect(canvas, c, line_width);
            painter.rect_filled(rect.translate(Vec2::splat(line_width / 2.)), 0.0, cell_color);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        if self.cadence.due(now) {
            self.engine.step();
        }
        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui, now));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));
        if let Some(wait) = self.cadence.until_due(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
