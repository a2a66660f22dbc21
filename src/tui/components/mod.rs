//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with the screen title and loaded metadata
//! - `PageSizeSelector`: The 10 / 20 / 50 / 100 selector
//! - `LoadingView`, `ErrorView`: Placeholders for the non-ready states
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ItemList`: Generic list renderer with persistent selection state
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `App`. This keeps dependencies explicit and components
//! testable against a `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs                (this file)
//! ├── title_bar.rs          (Top status bar)
//! ├── page_size_selector.rs (Page size control)
//! ├── item_list.rs          (Generic list renderer)
//! └── status_view.rs        (Loading and error placeholders)
//! ```

pub mod item_list;
pub mod page_size_selector;
pub mod status_view;
pub mod title_bar;

pub use item_list::{ItemList, ItemListState};
pub use page_size_selector::PageSizeSelector;
pub use status_view::{ErrorView, LoadingView};
pub use title_bar::TitleBar;
