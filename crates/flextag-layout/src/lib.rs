//! Flow layout for tag collections.
//!
//! Items of varying size are wrapped into rows that fit the container width,
//! each row is aligned left, center or right, and every item receives an
//! absolute frame. The aggregate content height feeds back into the
//! container's own sizing.
//!
//! # Architecture
//!
//! 1. **Measurement**: items report a preferred size for a width budget ([`Measure`])
//! 2. **Line packing**: greedy, order-preserving row partitioning ([`LinePacker`])
//! 3. **Alignment**: per-row leading offset ([`alignment_offset`])
//! 4. **Positioning**: absolute frames and content height ([`FlowLayout`])
//!
//! # Example
//!
//! ```
//! use flextag_core::Size;
//! use flextag_layout::{FlowLayout, LayoutConfig};
//!
//! let layout = FlowLayout::new(LayoutConfig::default());
//! let items = [Size::new(50.0, 20.0), Size::new(60.0, 20.0), Size::new(40.0, 20.0)];
//! let result = layout.layout(&items, 200.0);
//!
//! assert_eq!(result.line_count, 1);
//! for placed in &result.items {
//!     println!("{}: {:?}", placed.index, placed.frame);
//! }
//! ```

mod align;
mod config;
mod engine;
mod line;
mod measure;
mod text;

pub use align::alignment_offset;
pub use config::{LayoutConfig, DEFAULT_FALLBACK_WIDTH, DEFAULT_MIN_CONTAINER_WIDTH};
pub use engine::{FlowLayout, LayoutResult, PlacedItem, Sizing, MIN_CONTAINER_HEIGHT};
pub use line::{pack_lines, Line, LineItem, LinePacker};
pub use measure::{Measure, MeasureFn};
pub use text::{measure_text, EstimatedText, TextMeasure, TextMetrics, TextStyle};
