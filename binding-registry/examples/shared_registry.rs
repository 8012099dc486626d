//! Demonstrates that registry clones share one underlying name set.

use std::thread;
use std::time::Duration;

use binding_registry::{BindingLookup, BindingRegistry};

fn main() {
    let registry = BindingRegistry::new();

    // A "loader" thread publishing names as work completes.
    let writer = registry.clone();
    let loader = thread::spawn(move || {
        for name in ["config", "assets", "net"] {
            thread::sleep(Duration::from_millis(50));
            writer.define(name);
            println!("loader: defined {name}");
        }
    });

    while registry.len() < 3 {
        thread::sleep(Duration::from_millis(20));
    }

    println!("all defined: {:?}", registry.defined_names());
    println!("probe(net) = {:?}", registry.probe("net"));

    loader.join().unwrap();
}
