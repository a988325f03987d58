/// Declares the SQLSTATE classes: one `pub const` per class plus the
/// `CLASSES` catalog table, in declaration order.
macro_rules! error_classes {
    ($($name:ident = $class:literal, $description:literal;)*) => {
        $(
            pub const $name: $crate::pgerror::sqlstate::ErrorClass =
                $crate::pgerror::sqlstate::ErrorClass::from_static($class);
        )*

        pub(crate) static CLASSES: &[$crate::pgerror::sqlstate::ClassEntry] = &[
            $(
                $crate::pgerror::sqlstate::ClassEntry {
                    class: $name,
                    name: stringify!($name),
                    description: $description,
                },
            )*
        ];
    };
}

/// Declares the SQLSTATE codes: one `pub const` per code plus the
/// `CODES` catalog table, in declaration order.
///
/// `NAME = "code", "condition_name";` declares a code.
/// `NAME = "code";` declares an alias for a code declared earlier.
macro_rules! error_codes {
    (@condition) => { None };
    (@condition $condition:literal) => { Some($condition) };
    ($(
        $(#[$meta:meta])*
        $name:ident = $code:literal $(, $condition:literal)?;
    )*) => {
        $(
            $(#[$meta])*
            pub const $name: $crate::pgerror::sqlstate::ErrorCode =
                $crate::pgerror::sqlstate::ErrorCode::from_static($code);
        )*

        pub(crate) static CODES: &[$crate::pgerror::sqlstate::CodeEntry] = &[
            $(
                $crate::pgerror::sqlstate::CodeEntry {
                    code: $name,
                    name: stringify!($name),
                    condition: error_codes!(@condition $($condition)?),
                },
            )*
        ];
    };
}
