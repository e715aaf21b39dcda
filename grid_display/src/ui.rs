// ui.rs - Plays a finished run back, one snapshot per interval, once

use egui::{Color32, Rect, Stroke, Vec2};
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use conway::{Cycle, Grid};

pub struct Player {
    snapshots: Vec<Grid>,
    current: usize,
    cycle: Option<Cycle>,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl Player {
    /// `snapshots` must be non-empty; `simulate` never returns an empty run.
    pub fn new(snapshots: Vec<Grid>, update_interval: Duration, cycle: Option<Cycle>) -> Self {
        Self {
            snapshots,
            current: 0,
            cycle,
            is_running: true,
            last_update: Instant::now(),
            update_interval,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
        }
    }

    fn last(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    pub fn at_end(&self) -> bool {
        self.current >= self.last()
    }

    /// Moves to the next snapshot once the interval has elapsed. Playback
    /// stops on the final snapshot instead of wrapping around.
    pub fn advance(&mut self, now: Instant) {
        if !self.is_running || now.duration_since(self.last_update) < self.update_interval {
            return;
        }
        if self.at_end() {
            self.is_running = false;
            return;
        }
        self.current += 1;
        self.last_update = now;
        if self.at_end() {
            self.is_running = false;
        }
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.is_running = true;
        self.last_update = Instant::now();
    }

    /// Playback speed in generations per second.
    fn speed(&self) -> f32 {
        1000.0 / self.update_interval.as_millis().max(1) as f32
    }

    /// Slider bounds, widened so the configured speed is always reachable
    /// and never clamped on display.
    fn speed_range(&self) -> RangeInclusive<f32> {
        let speed = self.speed();
        speed.min(0.5)..=speed.max(90.0)
    }

    fn grid(&self) -> Option<&Grid> {
        self.snapshots.get(self.current)
    }

    fn cycle_text(&self) -> String {
        match self.cycle {
            Some(cycle) if cycle.is_still() => format!("Still from i = {}", cycle.start),
            Some(cycle) => format!("Period {} from i = {}", cycle.period, cycle.start),
            None => "No repetition".to_owned(),
        }
    }
}

impl eframe::App for Player {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("i = {}", self.current));

            // Controls
            ui.horizontal(|ui| {
                if self.at_end() {
                    if ui.button("⏮ Restart").clicked() {
                        self.restart();
                    }
                } else {
                    let button_text = if self.is_running { "⏸ Pause" } else { "▶ Resume" };
                    if ui.button(button_text).clicked() {
                        self.is_running = !self.is_running;
                        if self.is_running {
                            self.last_update = Instant::now();
                        }
                    }
                }

                ui.separator();

                let last = self.last();
                if ui
                    .add(egui::Slider::new(&mut self.current, 0..=last).text("generation"))
                    .changed()
                {
                    self.is_running = false;
                }

                ui.separator();
                ui.label(self.cycle_text());
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = self.speed();
                let slider = egui::Slider::new(&mut speed, self.speed_range())
                    .clamp_to_range(false)
                    .suffix(" gen/sec");
                if ui.add(slider).changed() && speed > 0.0 {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            let Some(grid) = self.grid() else {
                ui.label("Nothing to show");
                return;
            };

            // Fit the grid into the space left, up to 15px per cell
            let spacing = 0.5;
            let longest = grid.rows().max(grid.cols()) as f32;
            let room = ui.available_width().min(ui.available_height() - 40.0);
            let box_size = (room / longest - spacing).clamp(2.0, 15.0);

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * grid.cols() as f32 - spacing,
                (box_size + spacing) * grid.rows() as f32 - spacing,
            );

            let (_response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

            // Fill background
            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            for (row, cells) in grid.iter_rows().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);

                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let cell_color = if alive { self.live_color } else { self.dead_color };

                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            ui.separator();

            let total = grid.cell_count();
            let live_cells = grid.population();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep the animation moving while playing
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(len: usize) -> Player {
        let grid = Grid::new(2, 2).unwrap();
        Player::new(vec![grid; len], Duration::from_millis(100), None)
    }

    #[test]
    fn waits_for_interval() {
        let mut player = player(3);
        let start = player.last_update;
        player.advance(start + Duration::from_millis(50));
        assert_eq!(player.current, 0);
        player.advance(start + Duration::from_millis(100));
        assert_eq!(player.current, 1);
    }

    #[test]
    fn plays_once_and_stops_on_last_snapshot() {
        let mut player = player(3);
        let mut now = player.last_update;
        for _ in 0..10 {
            now += Duration::from_millis(100);
            player.advance(now);
        }
        assert_eq!(player.current, 2);
        assert!(!player.is_running);
        assert!(player.at_end());

        player.restart();
        assert_eq!(player.current, 0);
        assert!(player.is_running);
    }

    #[test]
    fn paused_player_holds_position() {
        let mut player = player(3);
        player.is_running = false;
        player.advance(player.last_update + Duration::from_secs(5));
        assert_eq!(player.current, 0);
    }

    #[test]
    fn single_snapshot_run_is_already_finished() {
        let mut player = player(1);
        player.advance(player.last_update + Duration::from_millis(100));
        assert_eq!(player.current, 0);
        assert!(!player.is_running);
    }

    #[test]
    fn speed_range_covers_configured_interval() {
        for millis in [5, 100, 2_000, 10_000] {
            let player = Player::new(vec![Grid::new(1, 1).unwrap()], Duration::from_millis(millis), None);
            let speed = player.speed();
            assert!(player.speed_range().contains(&speed), "interval {millis}ms");
        }
        let player = player(1);
        assert_eq!(player.speed_range(), 0.5..=90.0);
    }

    #[test]
    fn describes_cycles() {
        let mut player = player(2);
        assert_eq!(player.cycle_text(), "No repetition");
        player.cycle = Some(Cycle { start: 4, period: 1 });
        assert_eq!(player.cycle_text(), "Still from i = 4");
        player.cycle = Some(Cycle { start: 0, period: 2 });
        assert_eq!(player.cycle_text(), "Period 2 from i = 0");
    }
}
