#[macro_export]
macro_rules! if_then_some {
    ($cond: expr, $val: expr) => {
        if $cond {
            Some($val)
        } else {
            None
        }
    };
}

#[test]
fn test_if_then_some() {
    assert_eq!(if_then_some!(1 < 2, "yes"), Some("yes"));
    assert_eq!(if_then_some!(2 < 1, "no"), None);
}
