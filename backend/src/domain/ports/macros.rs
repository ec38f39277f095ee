//! `define_port_error!` generates port error enums with snake_case
//! constructors, so adapters can write `Error::query(msg)`.

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
    define_port_error! {
        pub enum StoreProbeError {
            Offline { message: String } => "store offline: {message}",
            MissingRow { id: i64 } => "row {id} missing",
            Mismatch { table: String, id: i64 } => "{table} row {id} mismatched",
        }
    }

    #[test]
    fn string_fields_accept_borrowed_text() {
        assert_eq!(
            StoreProbeError::offline("pool closed").to_string(),
            "store offline: pool closed"
        );
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        assert_eq!(StoreProbeError::missing_row(7_i64).to_string(), "row 7 missing");
    }

    #[test]
    fn mixed_fields_are_positional() {
        let err = StoreProbeError::mismatch("maszyny", 3_i64);
        assert_eq!(err.to_string(), "maszyny row 3 mismatched");
    }
}
