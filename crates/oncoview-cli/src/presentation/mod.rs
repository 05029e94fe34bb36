//! # Presentation Layer
//!
//! This module implements the **User Interface** logic for the CLI.
//! It is designed using an adaptation of the **MVVM (Model-View-ViewModel)** pattern
//! to keep the prediction payload (`oncoview_types`) and the display rules
//! (`oncoview_engine`) apart from the output logic.
//!
//! ## 🏗️ Architecture & Data Flow
//!
//! The data flow is strictly unidirectional:
//!
//! ```text
//! [ Handler ] --> [ AggregatePresenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!    (Controller)   (Converter + UI State)      (Contract)        (View)        (Console/JSON)
//! ```
//!
//! ---
//!
//! ## 📂 Directory Guide: Where does code go?
//!
//! ### 1. `view_models/` (The Data Contract)
//! * **What:** Structs and Enums that define *what* information is available to the user.
//! * **Rule:** Pure data containers. Must implement `Serialize`. **No** calculation logic.
//! * **The JSON Test:** "If I output this struct as JSON, is it clean and machine-readable?"
//!
//! ### 2. `presenters/` (The Transformation Logic)
//! * **What:** Pure functions that convert payloads into ViewModels, plus the
//!   `AggregatePresenter` that owns one response and its expand/collapse state.
//! * **Rule:** Lookups, sorting, consensus and every fallback decision live here.
//! * **Constraint:** Expansion state never enters a `ModelResultView`; it is
//!   attached only when a report snapshot is taken.
//!
//! ### 3. `views/` (The Layout)
//! * **What:** `fmt::Display` structs that lay a ViewModel out as text for a `ViewMode`.
//!
//! ### 4. `renderers/` (The Output Strategy)
//! * **What:** The driver that takes a `CommandResultViewModel` and paints it to the screen.
//! * **Rule:** Chooses JSON vs Text; JSON always dumps the full ViewModel.
//!
//! ### 5. `formatters/` (The Utilities)
//! * **What:** Reusable, small utility functions for string manipulation.
//! * **Examples:** `format_percentage`, `format_bar`.
//!
//! ---
//!
//! ## ⚖️ Decision Matrix
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a new field to the JSON output | **`view_models/`** |
//! | Change a fallback icon or consensus rule | **`presenters/`** |
//! | Change the indentation of a list | **`views/`** |
//! | Change how a probability is printed | **`formatters/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use presenters::AggregatePresenter;
pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, RenderOptions, StatusBadge, StatusLevel,
    ViewMode,
};
