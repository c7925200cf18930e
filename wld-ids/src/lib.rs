//! Numeric block and wall ids used by Terraria world files, with their
//! display names.
//!
//! The tables cover every id up to the 1.4.4 release (world version 279):
//! blocks `0..=692` and walls `1..=346`. Ids never change meaning between
//! releases, so anything past the end comes from a newer game and is
//! resolved through a catalog override file or reported as unknown.

macro_rules! id_table {
    ($($id:literal => $konst:ident = $name:literal,)*) => {
        $(pub const $konst: u16 = $id;)*

        /// Every `(id, name)` pair in ascending id order.
        pub static TABLE: &[(u16, &str)] = &[$(($id, $name)),*];

        /// Display name for `id`, if known.
        pub fn name(id: u16) -> Option<&'static str> {
            match id {
                $($id => Some($name),)*
                _ => None,
            }
        }

        /// Reverse lookup by display name.
        pub fn id(name: &str) -> Option<u16> {
            TABLE.iter().find(|(_, n)| *n == name).map(|(id, _)| *id)
        }
    };
}

pub mod tile;
pub mod wall;
