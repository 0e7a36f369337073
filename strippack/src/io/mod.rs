mod export;
mod import;

/// External (serializable) representations of all strip packing related entities.
pub mod ext_repr;

/// Drawing layouts as SVG documents
pub mod svg;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use export::sequence_signature;
#[doc(inline)]
pub use export::write_text_solution;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use import::parse_text_instance;
