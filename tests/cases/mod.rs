#![allow(dead_code)]

use once_cell::sync::Lazy;

/// One input line and everything the calculator prints for it.
pub struct LineCase {
    pub input: &'static str,
    pub infix: &'static str,
    pub postfix: &'static str,
    pub value: i32,
}

pub static LINE_CASES: Lazy<Vec<LineCase>> = Lazy::new(|| {
    vec![
        LineCase {
            input: "1+1",
            infix: "1 + 1",
            postfix: "1 1 +",
            value: 2,
        },
        LineCase {
            input: "2+3*4",
            infix: "2 + 3 * 4",
            postfix: "2 3 4 * +",
            value: 14,
        },
        LineCase {
            input: "2*3+4",
            infix: "2 * 3 + 4",
            postfix: "2 3 * 4 +",
            value: 10,
        },
        LineCase {
            input: "10-2-3",
            infix: "10 - 2 - 3",
            postfix: "10 2 - 3 -",
            value: 5,
        },
        LineCase {
            input: "7/2",
            infix: "7 / 2",
            postfix: "7 2 /",
            value: 3,
        },
        LineCase {
            input: "-7/2",
            infix: "-1 * 7 / 2",
            postfix: "-1 7 * 2 /",
            value: -3,
        },
        LineCase {
            input: "-5+3",
            infix: "-1 * 5 + 3",
            postfix: "-1 5 * 3 +",
            value: -2,
        },
        LineCase {
            input: "2*3-4*5",
            infix: "2 * 3 - 4 * 5",
            postfix: "2 3 * 4 5 * -",
            value: -14,
        },
        LineCase {
            input: "12 + 34 * 2 - 100 / 7 =",
            infix: "12 + 34 * 2 - 100 / 7",
            postfix: "12 34 2 * + 100 7 / -",
            value: 66,
        },
        LineCase {
            input: "5",
            infix: "5",
            postfix: "5",
            value: 5,
        },
    ]
});

/// Defines a `#[test]` checking what the calculator does with one input.
///
/// - `value:` the answer
/// - `infix:` / `postfix:` the rendered forms
/// - `error:` a pattern the [`shisoku::Error`] must match
#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        $(infix: $infix:expr,)?
        $(postfix: $postfix:expr,)?
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let arena = bumpalo::Bump::new();
            let expr = shisoku::Calculator::default()
                .compile(&arena, $input)
                .unwrap_or_else(|e| panic!("{:?} failed to compile: {}", $input, e));
            $(pretty_assertions::assert_eq!(expr.infix(), $infix);)?
            $(pretty_assertions::assert_eq!(expr.postfix(), $postfix);)?
            pretty_assertions::assert_eq!(expr.run(), Ok($value));
        }
    };
    (
        $name:ident,
        input: $input:expr,
        error: $pattern:pat $(,)?
    ) => {
        #[test]
        fn $name() {
            let result = shisoku::calculate($input);
            assert!(
                matches!(result, Err($pattern)),
                "{:?}: unexpected result {:?}",
                $input,
                result
            );
        }
    };
}

/// Code of the first diagnostic attached to an error.
pub fn first_code(error: &shisoku::Error) -> Option<&str> {
    error.diagnostics().first().and_then(|d| d.code.as_deref())
}
