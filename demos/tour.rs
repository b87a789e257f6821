//! Walks through the integer and rational operations and prints each result.
//!
//! Run with `RUST_LOG=debug` to see rejected constructions logged.

use centum::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("--- Integer ---");

    let i1 = Integer::from_digits(true, vec![45, 23, 1])?;
    let i2 = Integer::from_digits(false, vec![0, 99, 66, 33])?;
    println!("i1: {i1}, i2: {i2}");
    println!("-i1: {}, i1 + i2: {}", -&i1, &i1 + &i2);
    println!("i1 - i2: {}, i1 * i2: {}", &i1 - &i2, &i1 * &i2);

    let trimmed = Integer::from_digits(false, vec![99, 66, 33, 0, 0])?;
    println!("slots [99, 66, 33, 0, 0]: {trimmed}");

    match Integer::from_digits(false, vec![12, 100]) {
        Ok(n) => println!("unexpectedly accepted {n}"),
        Err(e) => println!("rejected: {e}"),
    }

    println!("\n--- Rational ---");

    let r1 = Rational::new(i1.clone(), i2.clone())?;
    let r2 = Rational::new(&i1 + &i2, &i1 - &i2)?;
    println!("r1: {r1}, r2: {r2}");
    println!("-r1: {}, r1 + r2: {}, r1 - r2: {}", -&r1, &r1 + &r2, &r1 - &r2);
    println!("r1 * r2: {}, r1 / r2: {}", &r1 * &r2, r1.checked_div(&r2)?);

    println!("\n--- Small fractions ---");

    let r_a = Rational::from_i64(1, 2)?;
    let r_b = Rational::from_i64(3, 4)?;
    let r_c = Rational::from_i64(-1, 3)?;
    let r_d = Rational::from_i64(2, -5)?;
    let r_zero = Rational::from_i64(0, 2)?;
    println!("r_a: {r_a}, r_b: {r_b}, r_c: {r_c}, r_d: {r_d}, r_zero: {r_zero}");

    let r_equiv = Rational::from_i64(2, 4)?;
    println!("r_a == 1/2: {}", r_a == Rational::from_i64(1, 2)?);
    println!("r_a == 2/4: {}", r_a == r_equiv);

    println!("-r_a: {}", -&r_a);
    println!("r_a + r_b: {}", &r_a + &r_b);
    println!("r_a - r_b: {}", &r_a - &r_b);
    println!("r_a * r_c: {}", &r_a * &r_c);
    println!("r_a / r_b: {}", r_a.checked_div(&r_b)?);

    match r_a.checked_div(&r_zero) {
        Ok(q) => println!("unexpectedly divided: {q}"),
        Err(e) => println!("r_a / r_zero rejected: {e}"),
    }

    Ok(())
}
