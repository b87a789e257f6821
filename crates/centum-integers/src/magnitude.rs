//! Unsigned arithmetic on base-100 digit slots.
//!
//! Every function here works on magnitudes stored least-significant first
//! and expects trimmed input (no zero slot at the high end). Results are
//! trimmed as well, so an all-zero result is the empty vector.

use std::cmp::Ordering;

use crate::{Digit, BASE};

/// Drops zero slots from the high end.
pub(crate) fn trim(digits: &mut Vec<Digit>) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

/// Compares two trimmed magnitudes.
pub(crate) fn compare(a: &[Digit], b: &[Digit]) -> Ordering {
    // Trimmed sequences: a longer one is always larger.
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Computes `|a| + |b|`.
pub(crate) fn add(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u16;

    for (i, &d) in long.iter().enumerate() {
        let s = carry + u16::from(d) + short.get(i).map_or(0, |&x| u16::from(x));
        sum.push((s % BASE) as Digit);
        carry = s / BASE;
    }
    if carry > 0 {
        sum.push(carry as Digit);
    }

    trim(&mut sum);
    sum
}

/// Computes `|a| - |b|`.
///
/// The caller guarantees `|a| >= |b|`.
pub(crate) fn sub(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    debug_assert!(
        compare(a, b) != Ordering::Less,
        "magnitude subtraction requires |a| >= |b|"
    );

    let mut diff = Vec::with_capacity(a.len());
    let mut borrow = 0i16;

    for (i, &d) in a.iter().enumerate() {
        let mut s = i16::from(d) - borrow - b.get(i).map_or(0, |&x| i16::from(x));
        if s < 0 {
            s += BASE as i16;
            borrow = 1;
        } else {
            borrow = 0;
        }
        diff.push(s as Digit);
    }

    trim(&mut diff);
    diff
}

/// Computes `|a| * |b|` by schoolbook convolution.
pub(crate) fn mul(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    // Each scratch slot stays below BASE between inner steps; the largest
    // intermediate is 99 + 99 * 99 + 99.
    let mut scratch = vec![0u32; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u32;
        for (j, &y) in b.iter().enumerate() {
            let v = scratch[i + j] + u32::from(x) * u32::from(y) + carry;
            scratch[i + j] = v % u32::from(BASE);
            carry = v / u32::from(BASE);
        }
        let mut pos = i + b.len();
        while carry > 0 {
            let v = scratch[pos] + carry;
            scratch[pos] = v % u32::from(BASE);
            carry = v / u32::from(BASE);
            pos += 1;
        }
    }

    let mut product: Vec<Digit> = scratch.into_iter().map(|v| v as Digit).collect();
    trim(&mut product);
    product
}
