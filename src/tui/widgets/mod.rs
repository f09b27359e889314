//! Reusable TUI widgets.

pub mod carousel;
pub mod form;
pub mod map_view;
pub mod nav_bar;
pub mod stars;

pub use carousel::Carousel;
pub use form::{FIELD_ROW_HEIGHT, FieldRow, draw_field};
pub use map_view::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, MapView, draw_map};
pub use nav_bar::draw_nav_bar;
pub use stars::star_line;
