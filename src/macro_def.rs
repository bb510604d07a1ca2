//! defines macro
//!
//! # getter!
//! getter that return a reference
//! ## Examples
//! ```ignore
//! struct a {b: usize}
//! impl a {
//!     getter!(b, usize);
//! }
//! ```
//! # getter_copy!
//! create a getter that copy the value.
//! ## Examples
//! ```ignore
//! struct a {b: usize}
//! impl a {
//!     getter_copy!(const, b, usize);
//! }
//! ```

macro_rules! getter {
    ($(#[$meta:meta])* $i:ident, $t:ty) => {
        $(#[$meta])*
        pub fn $i(&self) -> &$t {
            &self.$i
        }
    };
    (const, $(#[$meta:meta])* $i:ident, $t:ty) => {
        $(#[$meta])*
        pub const fn $i(&self) -> &$t {
            &self.$i
        }
    }
}

macro_rules! getter_copy {
    ($(#[$meta:meta])* $i:ident, $t:ty) => {
        $(#[$meta])*
        pub fn $i(&self) -> $t {
            self.$i
        }
    };
    (const, $(#[$meta:meta])* $i:ident, $t:ty) => {
        $(#[$meta])*
        pub const fn $i(&self) -> $t {
            self.$i
        }
    }
}
