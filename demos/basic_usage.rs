// ============================================================================
// Basic Usage Example
// ============================================================================

use segmented_decimal::prelude::*;

fn main() -> Result<(), NumericError> {
    println!("=== Segmented Decimal Example ===\n");

    // Construction from literals far beyond native integer widths
    let a = Decimal::parse("12345678901234567890", DEFAULT_CHUNK_SIZE)?;
    let b = Decimal::parse("-98765432109876543210", DEFAULT_CHUNK_SIZE)?;
    println!("a = {}", a);
    println!("b = {}", b);
    println!("a segments: {:?}\n", a.integer_segments());

    // Additive arithmetic
    println!("a + b = {}", &a + &b);
    println!("a - b = {}", &a - &b);
    println!("a + a = {}\n", &a + &a);

    // Multiplicative arithmetic (integer domain)
    let g = Decimal::parse("100000", DEFAULT_CHUNK_SIZE)?;
    println!("100000 * 100000 = {}", &g * &g);
    println!("10000000000 / 100000 = {}", (&g * &g).checked_div(&g)?);
    println!(
        "2 ** 10 = {}\n",
        Decimal::from(2i64).checked_pow(&Decimal::from(10i64))?
    );

    // Rounding family
    let x = Decimal::parse("9.46", DEFAULT_CHUNK_SIZE)?;
    println!("round(9.46, 1) = {}", x.round(1));
    println!("ceil(9.41, 1)  = {}", Decimal::parse("9.41", DEFAULT_CHUNK_SIZE)?.ceil(1));
    println!("floor(-9.3, 0) = {}\n", Decimal::parse("-9.3", DEFAULT_CHUNK_SIZE)?.floor(0));

    // Irrational constants at the wide constant chunk size
    println!("pi(10) = {}", pi(10));
    println!("e(10)  = {}", e(10));
    println!("pi(5) + e(5) = {}\n", &pi(5) + &e(5));

    // The imaginary unit and its closed operation set
    let i = Numeric::imaginary();
    println!("i * i = {}", i.checked_mul(&i)?);
    println!("i ** 3 = {}", i.checked_pow(&Numeric::real(Decimal::from(3i64)))?);
    match i.checked_add(&Numeric::real(Decimal::from(1i64))) {
        Ok(sum) => println!("i + 1 = {}", sum),
        Err(err) => println!("i + 1 -> {}", err),
    }

    Ok(())
}
