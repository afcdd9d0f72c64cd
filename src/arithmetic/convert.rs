use core::mem;

use alloc::vec::Vec;
use ref_cast::RefCast;

use crate::digit::radix;
use crate::numbers::places;
use crate::{Digits, Natural, NonZero, Octet, Radix, Zero};

impl<R: Radix> Natural<R> {
    /// The same value, stored in radix `S`.
    ///
    /// Repeatedly divides by `S::RADIX` (expressed in radix `R`),
    /// each remainder being the next digit in radix `S`.
    pub fn convert<S: Radix>(&self) -> Natural<S> {
        if radix::<R>() == radix::<S>() {
            return Natural::from_store(self.digits.clone());
        }

        // every digit in radix R takes at most this many digits in radix S
        let per_digit = places(radix::<R>() as u64 - 1, radix::<S>() as u64);
        let capacity = self.len() * per_digit;
        debug!(
            "converting {} digits from radix {} to radix {}, {} slots",
            self.len(), radix::<R>(), radix::<S>(), capacity
        );

        let new_radix = Self::from(radix::<S>() as u64);
        let new_radix = NonZero::ref_cast(&new_radix);
        let mut digits = Digits::with_capacity(capacity);

        let mut value = self.clone();
        let mut quotient = Self::zero();
        let mut remainder = Self::zero();
        let mut len = 0;
        loop {
            value.div_rem_nonzero(new_radix, &mut quotient, &mut remainder);
            digits.slots_mut()[len] = remainder.small_value();
            len += 1;
            mem::swap(&mut value, &mut quotient);
            if value.is_zero() {
                break;
            }
        }
        digits.set_len(len);

        Natural::from_store(digits)
    }

    /// Big-endian bytes, without leading zeros; zero is `[0]`.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.convert::<Octet>().iter().rev().map(|&octet| octet as u8).collect()
    }

    /// The value of big-endian `bytes`; leading zeros are ignored, no bytes is zero.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut digits = Digits::with_capacity(bytes.len().max(1));
        for (slot, &byte) in digits.slots_mut().iter_mut().zip(bytes.iter().rev()) {
            *slot = byte.into();
        }
        digits.set_len(bytes.len());
        Natural::<Octet>::from_store(digits).convert()
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use crate::arithmetic::test::Billion;
    use crate::{Decimal, Dense, Natural, Octet, One, Zero};

    #[test]
    fn decimal_and_dense() {
        let decimal = Natural::<Decimal>::from(123_456_789_012_345_678u64);
        let dense = decimal.convert::<Dense>();
        assert_eq!(dense, Natural::from(123_456_789_012_345_678u64));
        assert_eq!(dense.convert::<Decimal>(), decimal);
        assert_eq!(&*decimal, &[8, 7, 6, 5, 4, 3, 2, 1, 0, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn exact_capacity_from_power_of_ten() {
        let billion = Natural::<Billion>::from_digits(&[123_456_789, 12]).unwrap();
        let decimal = billion.convert::<Decimal>();
        assert_eq!(decimal.to_u64(), Some(12_123_456_789));
        assert_eq!(decimal.capacity(), 18);
    }

    #[test]
    fn same_radix_copies() {
        let x = Natural::<Dense>::from(u64::MAX);
        let y: Natural<Dense> = x.convert();
        assert_eq!(x, y);
    }

    #[test]
    fn zero_and_one() {
        assert!(Natural::<Dense>::zero().convert::<Decimal>().is_zero());
        assert!(Natural::<Octet>::one().convert::<Billion>().is_one());
    }

    #[test]
    fn large_round_trip() {
        let x = Natural::<Dense>::from(3u32).pow(500);
        let decimal = x.convert::<Decimal>();
        // 3^500 has 239 decimal digits
        assert_eq!(decimal.len(), 239);
        assert_eq!(decimal.convert::<Dense>(), x);
        assert_eq!(x.convert::<Octet>().convert::<Billion>().convert::<Dense>(), x);
    }

    #[test]
    fn bytes() {
        let x = Natural::<Dense>::from(u64::MAX);
        assert_eq!(x.to_be_bytes(), hex!("ffffffffffffffff"));

        let y = &x + &Natural::one();
        assert_eq!(y.to_be_bytes(), hex!("01 0000000000000000"));
        assert_eq!(Natural::<Dense>::from_be_bytes(&hex!("01 0000000000000000")), y);

        assert_eq!(Natural::<Decimal>::from_be_bytes(&hex!("0000 0100")), Natural::from(256u32));
        assert!(Natural::<Dense>::from_be_bytes(&[]).is_zero());
        assert_eq!(Natural::<Dense>::zero().to_be_bytes(), [0]);
    }

    #[test]
    fn bytes_of_a_power_of_two() {
        let x = Natural::<Decimal>::from(2u32).pow(100);
        let mut expected = [0u8; 13];
        expected[0] = 0x10;
        assert_eq!(x.to_be_bytes(), expected);
        assert_eq!(Natural::<Decimal>::from_be_bytes(&expected), x);
    }
}
