//! Print the drafted sleeve outline as flat coordinate lists, one
//! polyline per row. Optional args: surface width and height in pixels.

use garmpa::{Pattern, Sleeve};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let width = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(540);
    let height = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(900);

    match Sleeve::new(width, height) {
        Ok(sleeve) => {
            for line in sleeve.lines() {
                let coords: Vec<String> = line.flat().map(|c| c.to_string()).collect();
                println!("{}", coords.join(" "));
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
