//! `define_port_error!` declares a port's error enum together with one
//! snake_case constructor per variant.
//!
//! Every variant carries named fields and a display message. Constructor
//! parameters take `impl Into<T>`, so adapters can write
//! `ContactRepositoryError::rejected("phone missing")` or
//! `UserRepositoryError::not_found(7_u32)` without converting first.

macro_rules! define_port_error {
    (@constructor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant {
                    $($field: $field.into()),*
                }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructor $variant { $($field : $ty),* });
            )*
        }
    };
}

pub(crate) use define_port_error;
