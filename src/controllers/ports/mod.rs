pub mod run_presenter;
