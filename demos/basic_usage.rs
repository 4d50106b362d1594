// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    {
        if let Err(e) = calculator::utils::init_logging("calculator=debug") {
            eprintln!("{}", e);
        }
    }

    println!("=== Calculator Example ===\n");

    let calc = CalculatorBuilder::new("demo")
        .notify_events(true)
        .build(Arc::new(LoggingEventHandler))
        .expect("valid configuration");

    println!("Created calculator '{}'\n", calc.label());

    println!("add(5, 3)      = {}", calc.add(5.0, 3.0));
    println!("subtract(5, 3) = {}", calc.subtract(5.0, 3.0));
    println!("multiply(5, 3) = {}", calc.multiply(5.0, 3.0));

    match calc.divide(6.0, 3.0) {
        Ok(q) => println!("divide(6, 3)   = {}", q),
        Err(e) => println!("divide(6, 3)   failed: {}", e),
    }

    match calc.divide(5.0, 0.0) {
        Ok(q) => println!("divide(5, 0)   = {}", q),
        Err(e) => println!("divide(5, 0)   failed: {}", e),
    }

    // Dispatch by operation name or symbol
    println!("\n=== Evaluating by Operation ===");
    let requests = [
        ("+", 1.5, 2.25),
        ("multiply", 4.0, 0.5),
        ("/", 1.0, 8.0),
        ("%", 1.0, 2.0),
    ];

    for (input, a, b) in requests {
        let op: Operation = match input.parse() {
            Ok(op) => op,
            Err(e) => {
                println!("  {}", e);
                continue;
            }
        };

        match calc.evaluate_record(op, a, b) {
            Ok(eval) => println!("  {}", eval),
            Err(e) => println!("  {} {} {} -> {}", a, op.symbol(), b, e),
        }
    }
}
