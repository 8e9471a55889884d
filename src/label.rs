use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// A checkpoint label.
///
/// Labels are compared and hashed to group observations into `(from, to)`
/// pairs; no ordering is assumed between distinct labels. `label_name` is
/// what reports print for the label.
///
/// Implemented for strings (the dynamic variant) and integers. Closed token
/// enumerations get an implementation from [`define_tokens!`], which makes a
/// stamper over one token set reject labels of another set at compile time.
pub trait Label: Clone + Eq + Hash + Debug {
    fn label_name(&self) -> Cow<'_, str>;
}

impl Label for String {
    fn label_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Label for &'static str {
    fn label_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

macro_rules! impl_label_for_integers {
    ($($ty:ty),*) => {
        $(
            impl Label for $ty {
                fn label_name(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_label_for_integers!(i8, i16, i32, i64, u8, u16, u32, u64, usize, char);

/// Declares a closed token enumeration usable as a stamper label.
///
/// Each variant prints as its own name in reports.
///
/// ```
/// use sxs_toolbox::define_tokens;
/// use sxs_toolbox::label::Label;
///
/// define_tokens! {
///     pub enum Phase { Load, Solve, Store }
/// }
///
/// assert_eq!(Phase::Solve.label_name(), "Solve");
/// assert_eq!(Phase::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! define_tokens {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($variant),*
        }

        impl $name {
            /// Every token, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::label::Label for $name {
            fn label_name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(self.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
