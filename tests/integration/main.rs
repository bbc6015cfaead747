// tests/integration/main.rs

mod config_loading;
mod input_parsing;
mod run_driver;
