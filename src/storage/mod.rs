pub mod save_png;
