use crate::device_display::interface::DeviceDisplay;
use crate::landmark::{HandSet, HAND_CONNECTIONS};
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Default)]
struct OverlayState {
    hands: HandSet,
    label: Option<String>,
}

/// Landmark overlay window. The pipeline thread renders into it through
/// `DeviceDisplayGui` and the window repaints from the shared state.
pub struct OverlayWindow {
    state: Arc<Mutex<OverlayState>>,
}

impl OverlayWindow {
    /// Blocks until the window is closed. Must run on the main thread.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
            ..Default::default()
        };

        eframe::run_native("Sign Gesture", options, Box::new(move |_cc| Box::new(self)))
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

impl eframe::App for OverlayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (hands, label) = {
            let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            (state.hands.clone(), state.label.clone())
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(20, 20, 20));

            let green = egui::Color32::from_rgb(0, 220, 0);

            for segment in skeleton_segments(&hands, rect) {
                painter.line_segment(segment, egui::Stroke::new(3.0, green));
            }
            for hand in &hands.hands {
                for point in &hand.points {
                    painter.circle_filled(to_screen(rect, point.x, point.y), 5.0, green);
                }
            }

            painter.text(
                egui::pos2(rect.center().x, rect.top() + 16.0),
                egui::Align2::CENTER_TOP,
                label.as_deref().unwrap_or("..."),
                egui::FontId::proportional(32.0),
                egui::Color32::WHITE,
            );
        });

        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

/// Maps normalized landmark coordinates onto `rect`.
pub fn to_screen(rect: egui::Rect, x: f32, y: f32) -> egui::Pos2 {
    egui::pos2(rect.left() + x * rect.width(), rect.top() + y * rect.height())
}

/// Skeleton edges to draw. Edges with a missing endpoint are skipped.
pub fn skeleton_segments(hands: &HandSet, rect: egui::Rect) -> Vec<[egui::Pos2; 2]> {
    hands
        .hands
        .iter()
        .flat_map(|hand| {
            HAND_CONNECTIONS.iter().filter_map(move |&(start, end)| {
                let a = hand.points.get(start)?;
                let b = hand.points.get(end)?;
                Some([to_screen(rect, a.x, a.y), to_screen(rect, b.x, b.y)])
            })
        })
        .collect()
}

pub struct DeviceDisplayGui {
    state: Arc<Mutex<OverlayState>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(OverlayState::default())),
        }
    }

    pub fn window(&self) -> OverlayWindow {
        OverlayWindow {
            state: self.state.clone(),
        }
    }
}

impl Default for DeviceDisplayGui {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = OverlayState::default();
        Ok(())
    }

    fn render(
        &mut self,
        hands: &HandSet,
        label: Option<&str>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.hands = hands.clone();
        state.label = label.map(str::to_string);
        Ok(())
    }
}
