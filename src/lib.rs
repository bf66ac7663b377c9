#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown
)]

pub mod cli;
pub mod gh;
pub mod iostreams;
pub mod model;
pub mod progress;
pub mod prompt;
pub mod status;
pub mod text;
pub mod view;
