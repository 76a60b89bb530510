//! Declaration macros for closed codes and offset/length tables

/// Declare an enum whose variants map one-to-one onto raw codes
///
/// Generates the enum and its [`ClosedCode`](crate::validate::ClosedCode)
/// impl. Any raw value not listed decodes to `None`.
macro_rules! closed_code {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $raw:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::validate::ClosedCode for $name {
            fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $( $raw => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn to_raw(self) -> u32 {
                match self {
                    $( $name::$variant => $raw, )+
                }
            }
        }
    };
}

/// Declare one version of an offset/length table
///
/// Each field is an [`FcLcb`](crate::fclcb::FcLcb) read with the listed
/// [`FcLcbRule`](crate::fclcb::FcLcbRule). A version that extends an earlier
/// one names it after `extends`; the earlier version is decoded first and
/// stored as the first field.
macro_rules! fc_lcb_table {
    (
        $(#[$meta:meta])*
        pub struct $name:ident $(extends $base_ty:ident as $base:ident)? {
            $(
                $(#[$fmeta:meta])*
                $field:ident => $rule:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                /// The complete previous version of the table
                pub $base: $base_ty,
            )?
            $(
                $(#[$fmeta])*
                pub $field: $crate::fclcb::FcLcb,
            )+
        }

        impl $name {
            /// Names of the entries this version appends, in stream order
            pub const OWN_FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];

            /// Total number of entries including earlier versions
            pub const PAIR_COUNT: usize = $($base_ty::PAIR_COUNT +)? Self::OWN_FIELDS.len();

            /// Size of this version in bytes
            pub const SIZE: usize = Self::PAIR_COUNT * 8;

            /// Decode this version, validating each entry against `ctx` as it is read
            pub fn decode<R: $crate::stream::FormatRead + ?Sized>(
                reader: &mut R,
                ctx: &$crate::context::DecodeContext,
            ) -> $crate::Result<Self> {
                $( let $base = $base_ty::decode(reader, ctx)?; )?
                $(
                    let $field = $crate::fclcb::FcLcb::read(
                        reader,
                        stringify!($field),
                        $rule,
                        ctx,
                    )?;
                )+
                Ok(Self {
                    $( $base, )?
                    $( $field, )+
                })
            }

            /// Every entry with its name and rule, earlier versions first
            pub fn entries(&self) -> alloc::vec::Vec<$crate::fclcb::TableEntry> {
                let mut out = alloc::vec::Vec::with_capacity(Self::PAIR_COUNT);
                self.collect_entries(&mut out);
                out
            }

            pub(crate) fn collect_entries(&self, out: &mut alloc::vec::Vec<$crate::fclcb::TableEntry>) {
                $( self.$base.collect_entries(out); )?
                $(
                    out.push($crate::fclcb::TableEntry {
                        name: stringify!($field),
                        rule: $rule,
                        value: self.$field,
                    });
                )+
            }

            /// Entry names in stream order, earlier versions first
            pub fn field_names() -> alloc::vec::Vec<&'static str> {
                let mut names = alloc::vec::Vec::with_capacity(Self::PAIR_COUNT);
                $( names.extend($base_ty::field_names()); )?
                names.extend_from_slice(Self::OWN_FIELDS);
                names
            }
        }
    };
}

/// Declare a bit-flag set over one storage unit
///
/// Every raw value is legal and kept bit-for-bit; the named bits are only
/// accessors.
macro_rules! bit_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($ty:ty) {
            $(
                $(#[$fmeta:meta])*
                const $flag:ident = $bit:expr => $getter:ident;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name($ty);

        impl $name {
            $(
                $(#[$fmeta])*
                pub const $flag: $ty = $bit;
            )*

            /// Wrap a raw value
            pub const fn new(raw: $ty) -> Self {
                Self(raw)
            }

            /// The raw value as stored
            pub const fn raw(&self) -> $ty {
                self.0
            }

            /// True if every bit in `mask` is set
            pub const fn contains(&self, mask: $ty) -> bool {
                (self.0 & mask) == mask
            }

            $(
                #[doc = concat!("True if `", stringify!($flag), "` is set")]
                pub const fn $getter(&self) -> bool {
                    self.contains(Self::$flag)
                }
            )*

            /// Read one storage unit; never fails on content
            pub fn decode<R: $crate::stream::FormatRead + ?Sized>(reader: &mut R) -> $crate::Result<Self> {
                <$ty as $crate::bits::StorageUnit>::read_unit(reader).map(Self)
            }
        }
    };
}
