pub mod app;
pub mod missing_answer_modal;
pub mod quiz_form;
pub mod review_panel;
pub mod theme;
pub mod top_bar;

pub use app::PraepdrillApp;
