/// `UrlSearchParams` usage example
use formurl::{Init, UrlSearchParams};

fn main() {
    // Parse a query string
    let mut params = UrlSearchParams::parse("name=John&age=30&city=Tokyo&age=31");

    // Get values
    println!("name: {:?}", params.get("name")); // Some("John")
    println!("age: {:?}", params.get_all("age")); // ["30", "31"]
    println!("country: {:?}", params.get("country")); // None
    println!();

    // Observe mutations
    params.set_update_hook(|| println!("  (list updated)"));

    // Append a new parameter
    params.append("country", "Japan");
    println!("After append: {params}"); // name=John&age=30&city=Tokyo&age=31&country=Japan
    println!();

    // Set keeps the first position and drops later duplicates
    params.set("age", "32");
    println!("After set: {params}"); // name=John&age=32&city=Tokyo&country=Japan
    println!();

    // Delete a parameter
    params.delete("city");
    println!("After delete: {params}"); // name=John&age=32&country=Japan
    println!();

    // Copies are independent
    let mut copy = UrlSearchParams::with_init(Init::Params(&params));
    copy.append("note", "a b&c");
    println!("Copy: {copy}"); // name=John&age=32&country=Japan&note=a+b%26c
    println!("Original: {params}");
    println!();

    // Iterate over all parameters
    println!("All parameters:");
    for (key, value) in &params {
        println!("  {key} = {value}");
    }
}
