mod rect;

#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use rect::spans_overlap;
