/// Percent codec and form-urlencoded usage example
use formurl::{percent_decoder, percent_encoder, urlencoded};

fn main() {
    let encoded = percent_encoder("東京 tower");
    println!("percent_encoder: {encoded}");
    println!("percent_decoder: {}", percent_decoder(&encoded));

    let pairs = urlencoded::parse(b"city=%E6%9D%B1%E4%BA%AC&note=100%25+sure&flag");
    for pair in &pairs {
        println!("  {:?} = {:?}", pair.name, pair.value);
    }
    println!("serialized: {}", urlencoded::serialize(&pairs));
}
