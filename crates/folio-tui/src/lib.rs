pub mod app;
pub mod event;
pub mod header;
pub mod input;
pub mod keymap;
pub mod page;
pub mod scroll;
pub mod text;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
pub use themes::load_theme;
