//! Tag container adapter.
//!
//! [`TagView`] owns a tag list and a [`FlowLayout`](flextag_layout::FlowLayout)
//! and sits between them and a render host:
//!
//! - mutations mark the view dirty; [`TagView::tick`] runs at most one pass
//!   per host frame and hands the result to a [`TagHost`]
//! - taps are forwarded to observers by index; stale indices are dropped
//! - changes requested from inside callbacks go through a [`ViewHandle`] and
//!   apply on the next tick
//!
//! ```
//! use flextag_view::{RecordingHost, TagView};
//!
//! let mut view = TagView::new();
//! let mut host = RecordingHost::new();
//! view.set_container_width(320.0);
//! view.set_texts(["Swift", "iOS", "Rust"]);
//!
//! assert!(view.tick(&mut host));
//! assert!(!view.tick(&mut host));
//! assert_eq!(host.pass_count(), 1);
//! ```

mod events;
mod handle;
mod host;
mod state;
mod view;

pub use events::{SubscriptionId, TapEvent, TapObserver};
pub use handle::{Mutation, ViewHandle};
pub use host::{render_rects, RecordingHost, RenderRect, TagHost};
pub use state::LayoutState;
pub use view::TagView;
