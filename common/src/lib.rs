//! Moving Sale Common Library
//!
//! CLIとWeb(WASM)で共有されるCSVパーサー・カタログ描画・ギャラリー状態機械

pub mod csv;
pub mod catalog;
pub mod gallery;
pub mod gesture;
pub mod controller;
pub mod page;

pub use csv::{parse, parse_table, CsvTable, RawRow};
pub use catalog::{load_catalog, normalize, render, render_all, CardLayout, CatalogItem};
pub use gallery::{sync_gallery, Direction, GalleryState};
pub use gesture::{classify_swipe, SWIPE_THRESHOLD};
pub use controller::{click_action, Action, Controller, Effect, Input, Key, Role, Surface};
