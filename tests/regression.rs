use long_arithmetic::{Decimal, Dense, Integer, Natural, Rational, Zero};

fn factorial(n: i64) -> Integer {
    (1..=n).fold(Integer::one(), |product, i| product * Integer::from(i))
}

fn binomial(n: i64, k: i64) -> Integer {
    if k > n {
        return Integer::zero();
    }
    let denominator = &factorial(k) * &factorial(n - k);
    factorial(n).checked_div(&denominator).unwrap()
}

#[test]
fn factorials_and_binomials() {
    assert_eq!(factorial(0), Integer::one());
    assert_eq!(factorial(5), Integer::from(120));
    assert_eq!(factorial(20), Integer::from(2_432_902_008_176_640_000));
    assert_eq!(
        factorial(30).to_string(),
        "265252859812191058636308480000000"
    );

    assert_eq!(binomial(5, 2), Integer::from(10));
    assert_eq!(binomial(5, 6), Integer::zero());
    assert_eq!(binomial(100, 50).to_string(), "100891344545564193334812497256");
}

/// Σ_{k=0}^{n} (-1)^k C(n, k)
fn alternating_sum(n: i64) -> Integer {
    let mut sum = Integer::zero();
    for k in 0..=n {
        if k % 2 == 1 {
            sum -= &binomial(n, k);
        } else {
            sum += &binomial(n, k);
        }
    }
    sum
}

#[test]
fn alternating_binomial_sums_vanish() {
    for attempt in 0..10 {
        let n = (attempt + 1) * (attempt + 1);
        let sum = alternating_sum(n);
        assert!(sum.is_zero(), "sum_(k=0)^{} (-1)^k C({}, k) = {}", n, n, sum);
    }
}

#[test]
fn empty_alternating_binomial_sum_is_one() {
    assert_eq!(alternating_sum(0), Integer::one());
}

#[test]
fn powers_of_two() {
    let two = Natural::<Dense>::from(2u32);
    assert_eq!(two.pow(10).to_string(), "1024");
    assert_eq!(two.pow(64).to_string(), "18446744073709551616");

    let huge = two.pow(10_000).to_string();
    assert_eq!(huge.len(), 3011);
    assert!(huge.starts_with("199506311688075838"));
    // 2^10000 is 0 mod 16 and 1 mod 625
    assert!(huge.ends_with("9376"));
    assert_eq!(huge.parse::<Natural<Decimal>>().unwrap().convert::<Dense>(), two.pow(10_000));
}

#[test]
fn decimal_radix_agrees_with_dense() {
    let dense = Natural::<Dense>::from(3u32).pow(300);
    let decimal = Natural::<Decimal>::from(3u32).pow(300);
    assert_eq!(dense.to_string(), decimal.to_string());
    assert_eq!(decimal.convert::<Dense>(), dense);
}

#[test]
fn harmonic_sum_of_fractions() {
    let mut sum = Rational::<Dense>::zero();
    for n in 1..=100i64 {
        sum += Rational::new(Integer::one(), Integer::from(n)).unwrap();
    }
    assert_eq!(
        sum.to_string(),
        "14466636279520351160221518043104131447711/2788815009188499086581352357412492142272"
    );
}
