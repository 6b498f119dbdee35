//! # TUI Components
//!
//! Stateless, props-based components. Each receives everything it shows as
//! struct fields and renders into the `Rect` it is given:
//!
//! - `TitleBar`: app name, feed client, position, status
//! - `ContentCard`: the current item (stand-in for the rendering surface)
//! - `NavBar`: up/down controls, fetch indicator, last error
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── content_card.rs
//! └── nav_bar.rs
//! ```

mod content_card;
mod nav_bar;
mod title_bar;

pub use content_card::ContentCard;
pub use nav_bar::NavBar;
pub use title_bar::TitleBar;
