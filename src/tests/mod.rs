mod app_tests;
mod cli_context_tests;
mod error_tests;
mod render_tests;
