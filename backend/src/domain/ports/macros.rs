//! Helper macro for declaring port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept anything convertible into the field type.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor generation for port error enums.
    use rstest::rstest;

    define_port_error! {
        pub enum ChannelProbeError {
            Closed { message: String } => "channel closed: {message}",
            Lagged { skipped: u64 } => "subscriber lagged by {skipped} events",
            Refused { message: String, attempts: u32 } => "refused: {message} after {attempts}",
            Unavailable => "channel unavailable",
        }
    }

    #[rstest]
    fn string_fields_accept_str() {
        let err = ChannelProbeError::closed("shutdown");
        assert_eq!(err.to_string(), "channel closed: shutdown");
    }

    #[rstest]
    fn numeric_fields_keep_their_type() {
        let err = ChannelProbeError::lagged(3_u64);
        assert_eq!(err, ChannelProbeError::Lagged { skipped: 3 });
    }

    #[rstest]
    fn mixed_fields_are_ordered_as_declared() {
        let err = ChannelProbeError::refused("full", 2_u32);
        assert_eq!(err.to_string(), "refused: full after 2");
    }

    #[rstest]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(
            ChannelProbeError::unavailable().to_string(),
            "channel unavailable"
        );
    }
}
