// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_twelfths::numeric::EXTENDED_BUFFER_SIZE;
use roman_twelfths::prelude::*;

fn main() -> Result<(), RomanError> {
    println!("=== Roman Twelfths Example ===\n");

    // Basic numerals
    println!("Basic numerals:");
    for value in [0i16, 4, 42, 1951, -3999] {
        println!("  {:>6} -> {}", value, encode_basic(value)?);
    }

    // Vinculum and twelfths
    println!("\nExtended numerals:");
    for (int, twelfths) in [(4_000, 0i8), (1_900_051, 7), (-3_888_888, -11)] {
        let numeral = encode_extended(int, twelfths)?;
        println!("  {} -> {}", Fraction::new(int, twelfths)?, numeral);
    }

    // Reals round to the nearest twelfth
    let numeral = encode_f64(2.26)?;
    println!("\n2.26 -> {} ({})", numeral, parse(&numeral)?);

    // Parsing, including the errors
    println!("\nParsing:");
    for numeral in ["-_MCM_LIS.", "nulla", "MMMM", "_MCMLI", "IVI"] {
        match parse(numeral) {
            Ok(value) => println!("  {:<12} = {}", numeral, value),
            Err(error) => println!("  {:<12} ! {}", numeral, error),
        }
    }

    // Overlined layout
    println!("\nOverlined:");
    println!("{}", overline("-_MCM_LIS.", false)?);

    // Caller-provided buffer
    let mut buf = [0u8; EXTENDED_BUFFER_SIZE];
    let len = encode_extended_into(3_888_888, 11, &mut buf)?;
    println!(
        "\nBuffer holds {} bytes + NUL: {}",
        len,
        String::from_utf8_lossy(&buf[..len])
    );

    Ok(())
}
