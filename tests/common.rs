#[macro_export]
macro_rules! assert_delta {
    ($x:expr, $y:expr, $d:expr) => {
        assert!(
            ($x - $y).abs() < $d,
            "{} is not within {} of {}",
            $x,
            $d,
            $y
        );
    };
}
