//! Static egui window for the demo records

use crate::display::DisplayLines;

/// Native viewport geometry and titles
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportSettings {
    pub title: String,
    pub window_label: String,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            title: "Astronomical Simulator".to_string(),
            window_label: "Astronomical GUI".to_string(),
            width: 600.0,
            height: 300.0,
        }
    }
}

/// Shows a fixed set of lines; nothing is edited or read back.
pub struct ObservatoryApp {
    window_label: String,
    lines: DisplayLines,
}

impl ObservatoryApp {
    pub fn new(window_label: impl Into<String>, lines: DisplayLines) -> Self {
        Self {
            window_label: window_label.into(),
            lines,
        }
    }

    pub fn lines(&self) -> &DisplayLines {
        &self.lines
    }
}

impl eframe::App for ObservatoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::Window::new(self.window_label.as_str()).show(ctx, |ui| {
            for line in self.lines.lines() {
                ui.label(line);
            }
        });
    }
}

/// Open the native window and block until it is closed.
pub fn run(lines: DisplayLines, settings: ViewportSettings) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.width, settings.height])
            .with_title(settings.title.clone()),
        ..Default::default()
    };

    let ViewportSettings {
        title,
        window_label,
        ..
    } = settings;
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ObservatoryApp::new(window_label, lines)))),
    )
}
