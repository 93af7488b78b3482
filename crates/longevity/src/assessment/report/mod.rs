mod email;
pub mod views;

pub use email::{email_subject, render_email_html};
pub use views::{QuickStart, ResultsView, TopPick};
