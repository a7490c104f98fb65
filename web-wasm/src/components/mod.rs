pub mod emotion_chart;
pub mod face_canvas;
pub mod face_selector;
pub mod header;
pub mod settings_panel;
pub mod upload_area;
