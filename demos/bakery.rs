// ============================================================================
// Bakery Example
// ============================================================================

use bakery_catalog::prelude::*;
use std::sync::Arc;

type Apple = ApplePie<i32, 1, f64>;
type Cherry = CherryPie<i32, 1>;
type BigCherry = CherryPie<i32, 2>;

fn main() {
    #[cfg(feature = "logging")]
    bakery_catalog::telemetry::init_with_default("debug");

    println!("=== Bakery Catalog Example ===\n");
    println!("PI = {PI}\n");

    let cherry_pie = Cherry::new(1);
    println!("{}", Cherry::area());
    println!("{}", cherry_pie.stock());

    let apple_pie = Apple::new(2, 21.37);
    println!("{}", Apple::area());
    println!("{}", apple_pie.price());
    println!("initial stock: {}", apple_pie.stock());

    let big_cherry_pie = BigCherry::new(2);
    let mut bakery = Catalog::<f64, i32, 100, (Apple, Cherry, BigCherry)>::with_handler(
        (apple_pie, cherry_pie, big_cherry_pie),
        Arc::new(LoggingEventHandler),
    );

    println!("profits: {}", bakery.profits());
    println!("stock: {}", bakery.product_stock::<Apple, _>());
    bakery.sell::<Apple, _>();
    println!("profits: {}", bakery.profits());
    bakery.sell::<Apple, _>();
    println!("stock: {}", bakery.product_stock::<Apple, _>());
    println!("profits: {}", bakery.profits());

    // Sold out: further sales change nothing
    bakery.sell::<Apple, _>();
    println!("profits: {}", bakery.profits());
    bakery.sell::<Apple, _>();
    println!("profits: {}", bakery.profits());

    // Same products, another profit type
    let cheap_apple_pie = ApplePie::<i32, 1, f32>::new(2, 21.37);
    let second = Catalog::<f32, i32, 100, (ApplePie<i32, 1, f32>, Cherry)>::new((
        cheap_apple_pie,
        cherry_pie,
    ));

    println!("\n=== Shelf Snapshots ===");
    for snapshot in [bakery.snapshot(), second.snapshot()] {
        println!(
            "\ncapacity {} | footprint {:.4} | free {:.4} | profits {}",
            snapshot.capacity,
            snapshot.footprint,
            snapshot.free_area(),
            snapshot.profits
        );
        for product in &snapshot.products {
            println!("  {:<28} area {:>8.4}  stock {}", product.key.to_string(), product.area, product.stock);
        }
    }
}
