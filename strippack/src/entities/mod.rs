mod instance;
mod item;
mod layout;
mod strip;

#[doc(inline)]
pub use instance::SPInstance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use strip::Strip;
