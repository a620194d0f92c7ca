// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Give an enum a fixed label per variant.
///
/// Generates `name(&self) -> &'static str` and a `Display` impl that writes
/// the same label. Data-carrying variants use `(..)`.
///
/// ```ignore
/// turno_core::variant_names! {
///     Reason {
///         Missing => "missing",
///         Other(..) => "other",
///     }
/// }
/// ```
#[macro_export]
macro_rules! variant_names {
    ($enum:ty { $( $variant:ident $(( $($rest:tt)* ))? => $name:literal ),+ $(,)? }) => {
        impl $enum {
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant $(( $($rest)* ))? => $name, )+
                }
            }
        }

        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
