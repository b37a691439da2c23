pub mod anomaly_view;
pub mod app;
pub mod components;
pub mod shell;
pub mod summary_view;
pub mod windows;

pub use anomaly_view::AnomalyView;
pub use app::AdInsightsApp;
pub use shell::{LoadState, Shell};
pub use summary_view::SummaryView;

/// Render one headless frame and collect every piece of text that was painted.
#[cfg(test)]
pub(crate) fn rendered_texts(mut add_contents: impl FnMut(&mut egui::Ui)) -> Vec<String> {
    fn collect(shape: &egui::Shape, texts: &mut Vec<String>) {
        match shape {
            egui::Shape::Text(text) => texts.push(text.galley.text().to_string()),
            egui::Shape::Vec(shapes) => {
                for shape in shapes {
                    collect(shape, texts);
                }
            }
            _ => {}
        }
    }

    let ctx = egui::Context::default();
    let output = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
    });

    let mut texts = Vec::new();
    for clipped in &output.shapes {
        collect(&clipped.shape, &mut texts);
    }
    texts
}
