/// Runs `first`, then every function of `rest` in order on the running result.
///
/// Only `first` may change the type. With an empty `rest` this is `first`.
/// For closures of different types use the `combine!` macro instead.
pub fn combine<A, B, F, G>(first: F, rest: Vec<G>) -> impl Fn(A) -> B
where
    F: Fn(A) -> B,
    G: Fn(B) -> B,
{
    move |arg| rest.iter().fold(first(arg), |acc, g| g(acc))
}

/// Runs `first`, then `next` on its result.
pub fn then<A, B, F, G>(first: F, next: G) -> impl Fn(A) -> B
where
    F: Fn(A) -> B,
    G: Fn(B) -> B,
{
    move |arg| next(first(arg))
}

/// `combine!(first, g1, g2, ...)` builds `|x| ...g2(g1(first(x)))`.
///
/// The trailing functions may all be different closure types. A single
/// argument expands to the argument itself.
#[macro_export]
macro_rules! combine {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $next:expr $(, $rest:expr)* $(,)?) => {
        $crate::combine!($crate::combinators::then($first, $next) $(, $rest)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::Calls;

    fn double(n: i64) -> i64 {
        n * 2
    }

    fn minus_three(n: i64) -> i64 {
        n - 3
    }

    #[test]
    fn test_combine_order() {
        let f = combine(
            |n: i32| i64::from(n) + 1,
            vec![double as fn(i64) -> i64, minus_three],
        );
        // minus_three(double(5 + 1))
        assert_eq!(f(5), 9);

        let g = combine(
            |n: i32| i64::from(n) + 1,
            vec![minus_three as fn(i64) -> i64, double],
        );
        assert_eq!(g(5), 6);
    }

    #[test]
    fn test_combine_boxed() {
        let offset = 10;
        let rest: Vec<Box<dyn Fn(String) -> String>> = vec![
            Box::new(|s: String| s + "b"),
            Box::new(move |s: String| format!("{}{}", s, offset)),
            Box::new(|s: String| s.to_uppercase()),
        ];
        let f = combine(|c: char| c.to_string(), rest);
        assert_eq!(f('a'), "AB10");
    }

    #[test]
    fn test_combine_empty_rest() {
        let f = combine(|n: i32| n.to_string(), Vec::<fn(String) -> String>::new());
        assert_eq!(f(17), "17");

        let calls = Calls::<i32>::new();
        let g = combine!(calls.record(|n: i32| n + 1));
        assert_eq!(g(1), 2);
        assert_eq!(calls.args(), vec![1]);
    }

    #[test]
    fn test_combine_macro() {
        let suffix = String::from("!");
        let f = combine!(
            |n: u8| vec![n],
            |mut v: Vec<u8>| {
                v.push(2);
                v
            },
            |mut v: Vec<u8>| {
                v.push(3);
                v
            },
        );
        assert_eq!(f(1), vec![1, 2, 3]);

        let g = combine!(|s: &str| s.to_owned(), move |s: String| s + &suffix);
        assert_eq!(g("hi"), "hi!");
    }

    #[test]
    fn test_then() {
        let f = then(|n: i32| n + 1, |n: i32| n * 10);
        assert_eq!(f(0), 10);
        assert_eq!(f(4), 50);
    }

    #[quickcheck_macros::quickcheck]
    fn combine_applies_in_call_site_order(x: i32) -> bool {
        let first = |n: i32| i64::from(n) + 1;
        let f = combine!(first, double, minus_three);
        let g = combine(first, vec![double as fn(i64) -> i64, minus_three]);
        let expected = minus_three(double(first(x)));
        f(x) == expected && g(x) == expected
    }
}
