pub mod header;
pub mod items_grid;
pub mod lightbox;
